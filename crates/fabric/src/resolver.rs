//! Template resolver seam
//!
//! Pod entries of a root template reference other templates or definitions.
//! Fetching them is the only part of fabric generation that talks to the
//! outside world; this trait abstracts it so the generator can run against
//! the Kubernetes API, an in-memory store, or a test double.

use crds::{DefinitionSpec, FabricTemplate, TopologyResourceReference};
use thiserror::Error;

/// Errors returned by a [`TemplateResolver`]
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The referenced object does not exist (yet)
    #[error("{kind} {name} not found")]
    NotFound {
        /// Kind of the referenced object ("Template" or "Definition")
        kind: &'static str,
        /// Namespaced name of the referenced object
        name: String,
    },

    /// Kubernetes API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// The referenced object exists but cannot be used
    #[error("Invalid object: {0}")]
    Invalid(String),
}

impl ResolveError {
    /// Whether the referenced object is missing, which callers usually treat as transient
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Lookup of templates and definitions referenced from a root template
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait TemplateResolver: Send + Sync {
    /// Fetch the fabric template of a `Template` object
    async fn get_template(
        &self,
        reference: &TopologyResourceReference,
    ) -> Result<FabricTemplate, ResolveError>;

    /// Fetch the spec of a `Definition` object
    async fn get_definition(
        &self,
        reference: &TopologyResourceReference,
    ) -> Result<DefinitionSpec, ResolveError>;
}
