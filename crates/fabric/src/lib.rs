//! Clos Fabric Topology Generator
//!
//! Generates the nodes and links of a leaf/spine/superspine fabric from a
//! fabric template, and renders them as `TopologyNode` / `TopologyLink`
//! records owned by the template.
//!
//! # Example
//!
//! ```no_run
//! use fabric::{Fabric, InMemoryResolver};
//! use crds::FabricTemplate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let template: FabricTemplate = serde_yaml::from_str(
//!     r#"
//! tier1: { num: 2, vendorInfo: [{ vendorType: nokiaSRL, platform: IXR-D3 }] }
//! pod:
//!   - num: 1
//!     tier2: { num: 2, vendorInfo: [{ vendorType: nokiaSRL, platform: IXR-D3 }] }
//!     tier3: { num: 4, vendorInfo: [{ vendorType: nokiaSRL, platform: IXR-D2 }] }
//! "#,
//! )?;
//!
//! let fabric = Fabric::build(&template, &InMemoryResolver::default()).await?;
//! for link in fabric.links() {
//!     println!("{}", link.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! - **Resolution** ([`template`]): validates the template and replaces pod
//!   references with the referenced child templates, fetched through a
//!   [`TemplateResolver`].
//! - **Tier expansion** ([`tier`]): builds superspines, spines and leafs.
//! - **Wiring** ([`wiring`]): builds leaf-spine and spine-superspine links,
//!   naming interfaces through an [`InterfaceNaming`] table.
//! - **Rendering** ([`render`]): turns nodes and links into CRD objects.

pub mod config;
pub mod error;
pub mod fabric;
pub mod kube_resolver;
pub mod link;
pub mod memory;
pub mod naming;
pub mod node;
pub mod render;
pub mod resolver;
pub mod template;
pub mod tier;
pub mod wiring;

pub use config::ResolverConfig;
pub use error::FabricError;
pub use fabric::Fabric;
pub use kube_resolver::KubeTemplateResolver;
pub use link::{Endpoint, FabricLink};
pub use memory::InMemoryResolver;
pub use naming::{InterfaceNaming, OffsetKey, PLACEHOLDER_INTERFACE};
pub use node::FabricNode;
pub use render::{render_link, render_node};
pub use resolver::{ResolveError, TemplateResolver};
pub use template::{ResolvedPod, ResolvedTemplate};
