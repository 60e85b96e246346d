//! TopologyLink Custom Resource Definition
//!
//! One record per point-to-point link generated from a fabric template.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// TopologyLinkSpec describes a generated fabric link
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[kube(
    group = "topo.yndd.io",
    version = "v1alpha1",
    kind = "TopologyLink",
    namespaced,
    category = "topo"
)]
#[serde(rename_all = "camelCase")]
pub struct TopologyLinkSpec {
    /// Link kind
    #[serde(default)]
    pub kind: LinkKind,

    /// Endpoint A followed by endpoint B
    pub endpoints: Vec<LinkEndpoint>,
}

/// One side of a link
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkEndpoint {
    /// Name of the fabric node (e.g., "pod1-leaf1")
    pub node_name: String,

    /// Interface name on the node (e.g., "int-1/49")
    pub interface_name: String,

    /// Endpoint kind
    #[serde(default)]
    pub kind: LinkKind,
}

/// Kind of link or endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Fabric infrastructure link between switches
    #[default]
    Infra,
    /// Link towards a server or external device
    Edge,
}
