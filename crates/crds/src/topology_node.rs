//! TopologyNode Custom Resource Definition
//!
//! One record per node generated from a fabric template.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vendor::{Position, VendorType};

/// TopologyNodeSpec describes a generated fabric node
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[kube(
    group = "topo.yndd.io",
    version = "v1alpha1",
    kind = "TopologyNode",
    namespaced,
    category = "topo",
    printcolumn = r#"{"name":"POSITION","type":"string","jsonPath":".spec.position"}"#,
    printcolumn = r#"{"name":"PLATFORM","type":"string","jsonPath":".spec.platform"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct TopologyNodeSpec {
    /// Position in the fabric
    pub position: Position,

    /// Node index within its tier and pod (starts at 1)
    pub node_index: u32,

    /// Pod index (leaf and spine nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_index: Option<u32>,

    /// Plane index (superspine nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane_index: Option<u32>,

    /// Vendor type
    pub vendor_type: VendorType,

    /// Hardware platform
    pub platform: String,
}
