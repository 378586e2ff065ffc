//! Typed evaluation client.

use envflag_types::{FlagKey, FlagType, Hook, HookContext, ProviderMetadata};
use std::sync::Arc;

use crate::details::EvaluationDetails;
use crate::error::{EvaluationError, EvaluationResult};
use crate::registry::ProviderRegistry;

/// Metadata reported to hooks when no provider is bound.
const NO_PROVIDER: &str = "NoProvider";

/// Evaluates flags against whichever provider the registry binds to this
/// client's name.
#[derive(Clone)]
pub struct FlagClient {
    name: String,
    registry: Arc<ProviderRegistry>,
    hooks: Vec<Arc<dyn Hook>>,
}

impl FlagClient {
    pub(crate) fn new(name: &str, registry: Arc<ProviderRegistry>) -> Self {
        Self {
            name: name.to_string(),
            registry,
            hooks: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a hook that runs after the provider's own hooks.
    pub fn add_hook(&mut self, hook: Arc<dyn Hook>) {
        self.hooks.push(hook);
    }

    /// Metadata of the provider currently bound to this client.
    #[must_use]
    pub fn provider_metadata(&self) -> Option<ProviderMetadata> {
        self.registry
            .provider_for(&self.name)
            .map(|provider| provider.metadata())
    }

    /// Evaluates `flag_key` as a `T`.
    ///
    /// Fails only when the key is empty or no provider is registered; a
    /// missing or malformed flag is a successful evaluation that returns the
    /// default.
    pub fn evaluate<T: FlagType>(
        &self,
        flag_key: &str,
        default: T,
    ) -> EvaluationResult<EvaluationDetails<T>> {
        let key = FlagKey::parse(flag_key).map_err(|_| EvaluationError::InvalidFlagKey)?;
        let provider = self.registry.provider_for(&self.name);

        let mut hooks = provider
            .as_ref()
            .map(|provider| provider.hooks())
            .unwrap_or_default();
        hooks.extend(self.hooks.iter().cloned());

        let ctx = HookContext {
            flag_key: key,
            kind: T::KIND,
            default_value: default.clone().into_flag_value(),
            client_name: self.name.clone(),
            provider: provider
                .as_ref()
                .map_or_else(|| ProviderMetadata::new(NO_PROVIDER), |p| p.metadata()),
        };

        for hook in &hooks {
            hook.before(&ctx);
        }

        let outcome = match provider {
            Some(provider) => {
                let details = T::resolve_with(&*provider, flag_key, default);
                let value = details.value().clone().into_flag_value();
                for hook in &hooks {
                    hook.after(&ctx, &value, details.reason());
                }
                Ok(EvaluationDetails::from_resolution(flag_key, details))
            }
            None => {
                let err = EvaluationError::ProviderNotReady {
                    client: self.name.clone(),
                };
                let message = err.to_string();
                for hook in &hooks {
                    hook.error(&ctx, &message);
                }
                Err(err)
            }
        };

        for hook in &hooks {
            hook.finally(&ctx);
        }
        outcome
    }

    pub fn boolean_value(&self, flag_key: &str, default: bool) -> EvaluationResult<bool> {
        self.evaluate(flag_key, default).map(|d| d.value)
    }

    pub fn string_value(&self, flag_key: &str, default: &str) -> EvaluationResult<String> {
        self.evaluate(flag_key, default.to_string()).map(|d| d.value)
    }

    pub fn float_value(&self, flag_key: &str, default: f64) -> EvaluationResult<f64> {
        self.evaluate(flag_key, default).map(|d| d.value)
    }

    pub fn int_value(&self, flag_key: &str, default: i64) -> EvaluationResult<i64> {
        self.evaluate(flag_key, default).map(|d| d.value)
    }

    pub fn object_value(
        &self,
        flag_key: &str,
        default: serde_json::Value,
    ) -> EvaluationResult<serde_json::Value> {
        self.evaluate(flag_key, default).map(|d| d.value)
    }
}
