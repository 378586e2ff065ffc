//! The environment-variable flag provider.

use envflag_types::{
    FallbackCause, FeatureProvider, FlagType, ProviderMetadata, ResolutionDetails,
};
use tracing::{debug, trace};

use crate::config::ProviderConfig;
use crate::mapper::map_to_namespace_key;
use crate::namespace::{Namespace, ProcessEnv};

/// Name reported in the provider's metadata.
pub const PROVIDER_NAME: &str = "EnvVarProvider";

/// Resolves flags from a `Namespace`, the process environment by default.
///
/// Holds no mutable state besides what the namespace itself exposes, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct EnvVarProvider<N = ProcessEnv> {
    config: ProviderConfig,
    namespace: N,
}

impl EnvVarProvider<ProcessEnv> {
    /// Creates a provider over the process environment with an optional
    /// prefix (empty for none).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::from_config(ProviderConfig::new(prefix))
    }

    #[must_use]
    pub fn from_config(config: ProviderConfig) -> Self {
        Self::with_namespace(config, ProcessEnv)
    }
}

impl<N: Namespace> EnvVarProvider<N> {
    /// Creates a provider over an explicit namespace.
    #[must_use]
    pub fn with_namespace(config: ProviderConfig, namespace: N) -> Self {
        Self { config, namespace }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    #[must_use]
    pub fn namespace(&self) -> &N {
        &self.namespace
    }

    /// The namespace key this provider reads for `flag_key`.
    #[must_use]
    pub fn namespace_key(&self, flag_key: &str) -> String {
        map_to_namespace_key(flag_key, self.config.prefix())
    }

    /// Resolves `flag_key` as a `T`.
    ///
    /// Returns the parsed namespace value tagged `env-var`/`TargetingMatch`,
    /// or `default` tagged `default-variant`/`Default` when the entry is
    /// missing, empty or does not parse. Structured types never consult the
    /// namespace.
    pub fn resolve<T: FlagType>(&self, flag_key: &str, default: T) -> ResolutionDetails<T> {
        if T::KIND.is_structured() {
            trace!(
                flag_key = %flag_key,
                kind = %T::KIND,
                "Structured flags are not read from the namespace"
            );
            return ResolutionDetails::fallback(default, FallbackCause::UnsupportedType);
        }

        let key = self.namespace_key(flag_key);
        let Some(raw) = self.namespace.lookup(&key).filter(|raw| !raw.is_empty()) else {
            trace!(flag_key = %flag_key, env_var = %key, "No value set, using default");
            return ResolutionDetails::fallback(default, FallbackCause::NamespaceMiss);
        };

        match T::from_raw(&raw) {
            Some(value) => ResolutionDetails::matched(value),
            None => {
                debug!(
                    flag_key = %flag_key,
                    env_var = %key,
                    kind = %T::KIND,
                    "Value does not parse as requested kind, using default"
                );
                ResolutionDetails::fallback(default, FallbackCause::CoercionFailure)
            }
        }
    }
}

impl<N: Namespace> FeatureProvider for EnvVarProvider<N> {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new(PROVIDER_NAME)
    }

    fn resolve_bool(&self, flag_key: &str, default: bool) -> ResolutionDetails<bool> {
        self.resolve(flag_key, default)
    }

    fn resolve_string(&self, flag_key: &str, default: String) -> ResolutionDetails<String> {
        self.resolve(flag_key, default)
    }

    fn resolve_float(&self, flag_key: &str, default: f64) -> ResolutionDetails<f64> {
        self.resolve(flag_key, default)
    }

    fn resolve_int(&self, flag_key: &str, default: i64) -> ResolutionDetails<i64> {
        self.resolve(flag_key, default)
    }

    fn resolve_object(
        &self,
        flag_key: &str,
        default: serde_json::Value,
    ) -> ResolutionDetails<serde_json::Value> {
        self.resolve(flag_key, default)
    }
}
