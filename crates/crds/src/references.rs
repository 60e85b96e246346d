//! Kubernetes object references for topology CRDs
//!
//! Pod entries of a fabric template point at other templates or at
//! definitions. A reference names the target object and optionally its
//! namespace; without a namespace the reference resolves in the namespace
//! chosen by whoever resolves it.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Namespaced reference to another topology resource
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TopologyResourceReference {
    /// Name of the referenced resource
    pub name: String,

    /// Namespace of the referenced resource (defaults to the resolver's namespace)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl TopologyResourceReference {
    /// Create a reference in the resolver's default namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Create a reference pinned to a namespace
    pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Namespace of the reference, or `default` when none is set
    #[must_use]
    pub fn namespace_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.namespace.as_deref().unwrap_or(default)
    }
}

impl fmt::Display for TopologyResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}
