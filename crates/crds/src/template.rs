//! Template Custom Resource Definition
//!
//! A `Template` carries a fabric template: the tier counts, vendor
//! assignments and uplink fan-out of a leaf/spine/superspine fabric. Pod
//! entries either define their tiers natively or reference another template
//! (or a definition that points at one).

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::references::TopologyResourceReference;
use crate::vendor::VendorInfo;

/// TemplateSpec defines the desired fabric of a topology
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[kube(
    group = "topo.yndd.io",
    version = "v1alpha1",
    kind = "Template",
    namespaced,
    status = "TemplateStatus",
    category = "topo"
)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpec {
    /// Fabric template (leaf/spine/superspine tiers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<FabricTemplate>,
}

/// Fabric template
///
/// Root templates may reference child templates per pod; a child template
/// holds exactly one natively defined pod.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FabricTemplate {
    /// Superspine tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier1: Option<TierTemplate>,

    /// Border leaf tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_leaf: Option<TierTemplate>,

    /// Pod templates, in order
    #[serde(default, rename = "pod")]
    #[schemars(rename = "pod")]
    pub pods: Vec<PodTemplate>,

    /// Upper bound on spine uplinks towards one superspine
    #[serde(default = "default_max_uplinks")]
    #[schemars(range(min = 1, max = 4))]
    pub max_uplinks_tier2_to_tier1: u32,

    /// Upper bound on leaf uplinks towards one spine
    #[serde(default = "default_max_uplinks")]
    #[schemars(range(min = 1, max = 4))]
    pub max_uplinks_tier3_to_tier2: u32,
}

impl Default for FabricTemplate {
    fn default() -> Self {
        Self {
            tier1: None,
            border_leaf: None,
            pods: Vec::new(),
            max_uplinks_tier2_to_tier1: default_max_uplinks(),
            max_uplinks_tier3_to_tier2: default_max_uplinks(),
        }
    }
}

impl FabricTemplate {
    /// Whether any pod entry references another template or a definition
    #[must_use]
    pub fn has_reference(&self) -> bool {
        self.pods.iter().any(PodTemplate::has_reference)
    }
}

/// One pod entry of a fabric template
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplate {
    /// Number of pod instances built from this entry
    #[serde(default, rename = "num", skip_serializing_if = "Option::is_none")]
    #[schemars(rename = "num")]
    pub pod_number: Option<u32>,

    /// Spine tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier2: Option<TierTemplate>,

    /// Leaf tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier3: Option<TierTemplate>,

    /// Tiers given as a labelled list (kind "tier2" or "tier3")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<LabeledTier>,

    /// Reference to a child template providing this pod
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_reference: Option<TopologyResourceReference>,

    /// Reference to a definition whose template provides this pod
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_reference: Option<TopologyResourceReference>,
}

impl PodTemplate {
    /// Whether the pod defines tiers itself
    #[must_use]
    pub fn has_native_tiers(&self) -> bool {
        self.tier2.is_some() || self.tier3.is_some() || !self.tiers.is_empty()
    }

    /// Whether the pod references a template or a definition
    #[must_use]
    pub fn has_reference(&self) -> bool {
        self.template_reference.is_some() || self.definition_reference.is_some()
    }
}

/// Vendors, node count and uplink fan-out of one fabric tier
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TierTemplate {
    /// Vendors of the tier, assigned round-robin by node ordinal
    #[serde(default)]
    pub vendor_info: Vec<VendorInfo>,

    /// Number of nodes in the tier
    #[serde(default, rename = "num")]
    #[schemars(rename = "num")]
    pub node_number: u32,

    /// Uplinks from each node of the tier towards every node of the tier above
    #[serde(default = "default_uplinks_per_node")]
    #[schemars(range(min = 1, max = 4))]
    pub uplinks_per_node: u32,
}

/// Tier entry of the labelled tier list
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LabeledTier {
    /// Tier label: "tier2" (spine) or "tier3" (leaf)
    pub kind: String,

    /// Vendors of the tier
    #[serde(default)]
    pub vendor_info: Vec<VendorInfo>,

    /// Number of nodes in the tier
    #[serde(default, rename = "num")]
    #[schemars(rename = "num")]
    pub node_number: u32,

    /// Uplinks per node
    #[serde(default = "default_uplinks_per_node")]
    pub uplinks_per_node: u32,
}

impl From<&LabeledTier> for TierTemplate {
    fn from(tier: &LabeledTier) -> Self {
        Self {
            vendor_info: tier.vendor_info.clone(),
            node_number: tier.node_number,
            uplinks_per_node: tier.uplinks_per_node,
        }
    }
}

fn default_max_uplinks() -> u32 {
    1
}

fn default_uplinks_per_node() -> u32 {
    1
}

/// TemplateStatus defines the observed state of a template
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStatus {
    /// Current state of the template
    pub state: TemplateState,

    /// Number of nodes generated from the template
    #[serde(default)]
    pub node_count: u32,

    /// Number of links generated from the template
    #[serde(default)]
    pub link_count: u32,

    /// Error message if generation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Last generation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_generated: Option<chrono::DateTime<chrono::Utc>>,
}

/// Generation state of a template
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub enum TemplateState {
    #[default]
    Pending,
    /// A referenced template or definition does not exist yet
    ReferenceNotFound,
    Generated,
    Failed,
}
