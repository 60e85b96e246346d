//! Prints the topology CRDs as a multi-document YAML stream.
//!
//! Usage: `cargo run -p crds --bin crdgen | kubectl apply -f -`

use crds::{Definition, Template, TopologyLink, TopologyNode};
use kube::CustomResourceExt;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let crds = [
        Template::crd(),
        Definition::crd(),
        TopologyNode::crd(),
        TopologyLink::crd(),
    ];

    for crd in &crds {
        print!("---\n{}", serde_yaml::to_string(crd)?);
    }

    info!("Generated {} CRDs", crds.len());
    Ok(())
}
