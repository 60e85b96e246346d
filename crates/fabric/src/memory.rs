//! In-memory template resolver
//!
//! Holds templates and definitions keyed by namespace and name. Used by
//! tests and for offline generation from manifests read off disk.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crds::{DefinitionSpec, FabricTemplate, TopologyResourceReference};

use crate::resolver::{ResolveError, TemplateResolver};

type Key = (String, String);

/// In-memory resolver backed by shared maps
///
/// Clones share the same store, so a test can keep a handle and add objects
/// after handing the resolver to the code under test.
#[derive(Debug, Clone)]
pub struct InMemoryResolver {
    default_namespace: String,
    templates: Arc<Mutex<HashMap<Key, FabricTemplate>>>,
    definitions: Arc<Mutex<HashMap<Key, DefinitionSpec>>>,
    lookups: Arc<Mutex<u64>>,
}

impl Default for InMemoryResolver {
    fn default() -> Self {
        Self::new("default")
    }
}

impl InMemoryResolver {
    /// Create an empty resolver
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: default_namespace.into(),
            templates: Arc::new(Mutex::new(HashMap::new())),
            definitions: Arc::new(Mutex::new(HashMap::new())),
            lookups: Arc::new(Mutex::new(0)),
        }
    }

    /// Add (or replace) a template
    pub fn add_template(&self, reference: &TopologyResourceReference, template: FabricTemplate) {
        let key = self.key(reference);
        self.templates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, template);
    }

    /// Add (or replace) a definition
    pub fn add_definition(&self, reference: &TopologyResourceReference, definition: DefinitionSpec) {
        let key = self.key(reference);
        self.definitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, definition);
    }

    /// Number of lookups served so far, found or not
    #[must_use]
    pub fn lookups(&self) -> u64 {
        *self.lookups.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn key(&self, reference: &TopologyResourceReference) -> Key {
        (
            reference.namespace_or(&self.default_namespace).to_string(),
            reference.name.clone(),
        )
    }

    fn count_lookup(&self) {
        *self.lookups.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

#[async_trait::async_trait]
impl TemplateResolver for InMemoryResolver {
    async fn get_template(
        &self,
        reference: &TopologyResourceReference,
    ) -> Result<FabricTemplate, ResolveError> {
        self.count_lookup();
        let key = self.key(reference);
        self.templates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                kind: "Template",
                name: format!("{}/{}", key.0, key.1),
            })
    }

    async fn get_definition(
        &self,
        reference: &TopologyResourceReference,
    ) -> Result<DefinitionSpec, ResolveError> {
        self.count_lookup();
        let key = self.key(reference);
        self.definitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                kind: "Definition",
                name: format!("{}/{}", key.0, key.1),
            })
    }
}
