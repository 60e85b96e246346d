//! Kubernetes-backed template resolver.

use crds::{Definition, DefinitionSpec, FabricTemplate, Template, TopologyResourceReference};
use kube::{Api, Client};
use tracing::debug;

use crate::config::ResolverConfig;
use crate::resolver::{ResolveError, TemplateResolver};

/// Resolves references against `Template` and `Definition` objects in the cluster
#[derive(Clone)]
pub struct KubeTemplateResolver {
    client: Client,
    config: ResolverConfig,
}

impl std::fmt::Debug for KubeTemplateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeTemplateResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl KubeTemplateResolver {
    /// Create a resolver on top of an existing client
    #[must_use]
    pub fn new(client: Client, config: ResolverConfig) -> Self {
        Self { client, config }
    }

    fn namespace<'a>(&'a self, reference: &'a TopologyResourceReference) -> &'a str {
        reference.namespace_or(&self.config.default_namespace)
    }
}

#[async_trait::async_trait]
impl TemplateResolver for KubeTemplateResolver {
    async fn get_template(
        &self,
        reference: &TopologyResourceReference,
    ) -> Result<FabricTemplate, ResolveError> {
        let namespace = self.namespace(reference);
        debug!("Fetching Template {}/{}", namespace, reference.name);

        let api: Api<Template> = Api::namespaced(self.client.clone(), namespace);
        let template = api
            .get_opt(&reference.name)
            .await?
            .ok_or_else(|| ResolveError::NotFound {
                kind: "Template",
                name: format!("{}/{}", namespace, reference.name),
            })?;

        template.spec.fabric.ok_or_else(|| {
            ResolveError::Invalid(format!(
                "Template {}/{} has no fabric defined",
                namespace, reference.name
            ))
        })
    }

    async fn get_definition(
        &self,
        reference: &TopologyResourceReference,
    ) -> Result<DefinitionSpec, ResolveError> {
        let namespace = self.namespace(reference);
        debug!("Fetching Definition {}/{}", namespace, reference.name);

        let api: Api<Definition> = Api::namespaced(self.client.clone(), namespace);
        let definition = api
            .get_opt(&reference.name)
            .await?
            .ok_or_else(|| ResolveError::NotFound {
                kind: "Definition",
                name: format!("{}/{}", namespace, reference.name),
            })?;

        Ok(definition.spec)
    }
}
