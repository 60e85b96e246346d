//! Topology CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the `topo.yndd.io` API group:
//! fabric templates and definitions (intent), and the topology nodes and
//! links rendered from them (inventory).

pub mod references;
pub mod vendor;
pub mod template;
pub mod definition;
pub mod topology_node;
pub mod topology_link;

pub use references::*;
pub use vendor::*;
pub use template::*;
pub use definition::*;
pub use topology_node::*;
pub use topology_link::*;

/// API group served by every topology CRD
pub const API_GROUP: &str = "topo.yndd.io";

/// API version served by every topology CRD
pub const API_VERSION: &str = "v1alpha1";
