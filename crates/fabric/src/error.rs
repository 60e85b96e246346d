//! Fabric generation errors.
//!
//! Template validation and uplink errors are permanent: they need a template
//! fix. Resolver errors are passed through as-is and the caller decides
//! whether to retry (a missing reference usually resolves itself once the
//! referenced object is applied).

use thiserror::Error;

use crate::resolver::ResolveError;

/// Errors that can occur while generating a fabric
#[derive(Debug, Error)]
pub enum FabricError {
    /// A pod entry defines tiers natively and also references a template or definition
    #[error("pod {pod}: native pod definition can not be mixed with template/definition references")]
    MixedDefinition {
        /// Pod entry ordinal (0-based)
        pod: usize,
    },

    /// Tier label other than "tier2" or "tier3"
    #[error("pod {pod}: invalid tier kind {kind:?}, expected \"tier2\" or \"tier3\"")]
    InvalidTierKind {
        /// Pod entry ordinal (0-based)
        pod: usize,
        /// Offending label
        kind: String,
    },

    /// The same tier is given twice in one pod entry
    #[error("pod {pod}: tier {kind} is defined more than once")]
    DuplicateTier {
        /// Pod entry ordinal (0-based)
        pod: usize,
        /// Duplicated tier label
        kind: &'static str,
    },

    /// A child template references yet another template or definition
    #[error("child template {template} cannot reference another template or definition")]
    ChildWithReference {
        /// Child template reference
        template: String,
    },

    /// A child template sets a pod number other than 1
    #[error("child template {template} can only define 1 pod instance, got {pod_number}")]
    ChildPodNumber {
        /// Child template reference
        template: String,
        /// Requested pod number
        pod_number: u32,
    },

    /// A child template does not hold exactly one pod entry
    #[error("child template {template} must define exactly 1 pod, got {count}")]
    ChildPodCount {
        /// Child template reference
        template: String,
        /// Number of pod entries found
        count: usize,
    },

    /// A root pod entry without references does not set a pod number
    #[error("pod {pod}: a pod template without references must define a pod number")]
    MissingPodNumber {
        /// Pod entry ordinal (0-based)
        pod: usize,
    },

    /// A root pod entry with a reference also sets a pod number
    #[error("pod {pod}: a pod template with a reference cannot define the pod number")]
    ReferenceWithPodNumber {
        /// Pod entry ordinal (0-based)
        pod: usize,
    },

    /// A pod entry sets both a template and a definition reference
    #[error("pod {pod}: only one of templateReference and definitionReference may be set")]
    MultipleReferences {
        /// Pod entry ordinal (0-based)
        pod: usize,
    },

    /// A definition referenced by a pod is associated with more than one template
    #[error("definition {definition} must have exactly 1 template, got {count}")]
    MultipleTemplatesOnDefinition {
        /// Definition reference
        definition: String,
        /// Number of templates on the definition
        count: usize,
    },

    /// Uplink maximum outside the supported range
    #[error("{field} must be between 1 and 4, got {value}")]
    UplinkMaxOutOfRange {
        /// Template field name
        field: &'static str,
        /// Configured value
        value: u32,
    },

    /// A tier with nodes has no vendor information to assign
    #[error("{tier} defines {node_number} nodes but no vendorInfo")]
    EmptyVendorInfo {
        /// Tier label
        tier: &'static str,
        /// Number of nodes requested
        node_number: u32,
    },

    /// A node has more uplinks than the configured maximum
    #[error("uplink per node {uplinks} of {node} can not be bigger than {field} {max}")]
    UplinkExceedsMax {
        /// Node name
        node: String,
        /// Uplinks configured on the node
        uplinks: u32,
        /// Template field holding the maximum
        field: &'static str,
        /// Configured maximum
        max: u32,
    },

    /// Template or definition lookup failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl FabricError {
    /// Whether the error comes from a referenced object that does not exist yet
    #[must_use]
    pub fn is_reference_not_found(&self) -> bool {
        matches!(self, FabricError::Resolve(e) if e.is_not_found())
    }
}
