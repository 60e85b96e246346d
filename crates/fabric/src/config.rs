//! Resolver configuration.

use tracing::debug;

/// Environment variable naming the namespace that unqualified references resolve in
pub const TOPOLOGY_NAMESPACE_ENV: &str = "TOPOLOGY_NAMESPACE";

/// Fallback environment variable, shared with the controllers watching this namespace
pub const WATCH_NAMESPACE_ENV: &str = "WATCH_NAMESPACE";

const DEFAULT_NAMESPACE: &str = "default";

/// Settings of the Kubernetes-backed resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Namespace used for references that do not name one
    pub default_namespace: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    ///
    /// `TOPOLOGY_NAMESPACE` wins over `WATCH_NAMESPACE`; empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_namespace = [TOPOLOGY_NAMESPACE_ENV, WATCH_NAMESPACE_ENV]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        debug!("Resolver default namespace: {}", default_namespace);
        Self { default_namespace }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ResolverConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.default_namespace, "default");
    }

    #[test]
    fn test_topology_namespace_wins() {
        let config = ResolverConfig::from_lookup(lookup(&[
            (TOPOLOGY_NAMESPACE_ENV, "fabric"),
            (WATCH_NAMESPACE_ENV, "ops"),
        ]));
        assert_eq!(config.default_namespace, "fabric");
    }

    #[test]
    fn test_watch_namespace_fallback_skips_empty() {
        let config = ResolverConfig::from_lookup(lookup(&[
            (TOPOLOGY_NAMESPACE_ENV, ""),
            (WATCH_NAMESPACE_ENV, "ops"),
        ]));
        assert_eq!(config.default_namespace, "ops");
    }
}
