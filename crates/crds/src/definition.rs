//! Definition Custom Resource Definition
//!
//! A `Definition` ties templates and discovery rules together. A pod entry
//! of a root template may reference a definition instead of a template; the
//! definition must then point at exactly one template.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::references::TopologyResourceReference;

/// DefinitionSpec defines the templates and discovery rules of a topology
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[kube(
    group = "topo.yndd.io",
    version = "v1alpha1",
    kind = "Definition",
    namespaced,
    category = "topo"
)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSpec {
    /// Templates associated with this definition
    #[serde(default)]
    pub templates: Vec<DefinitionRule>,

    /// Discovery rules associated with this definition
    #[serde(default)]
    pub discovery_rules: Vec<DefinitionRule>,
}

/// Reference from a definition to a template or discovery rule
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRule {
    /// Referenced resource
    pub template_ref: TopologyResourceReference,

    /// Whether the rule targets a digital twin rather than real hardware
    #[serde(default)]
    pub digital_twin: bool,
}

impl DefinitionRule {
    /// Rule pointing at a real (non digital twin) resource
    #[must_use]
    pub fn new(template_ref: TopologyResourceReference) -> Self {
        Self {
            template_ref,
            digital_twin: false,
        }
    }
}
