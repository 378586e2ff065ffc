use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{FlagKey, FlagKind, FlagValue, Reason, ResolutionDetails};

/// Static identity of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub name: String,
}

impl ProviderMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Source of flag values behind the evaluation client.
///
/// Every resolve method is total: a provider that cannot produce a value
/// returns the default, tagged accordingly, instead of failing.
pub trait FeatureProvider: Send + Sync {
    /// Identity of the provider.
    fn metadata(&self) -> ProviderMetadata;

    /// Called once when the provider is registered.
    /// Return `Err(message)` to reject the registration.
    fn initialize(&self) -> Result<(), String> {
        Ok(())
    }

    /// Hooks the provider wants run around each evaluation.
    fn hooks(&self) -> Vec<Arc<dyn Hook>> {
        Vec::new()
    }

    fn resolve_bool(&self, flag_key: &str, default: bool) -> ResolutionDetails<bool>;

    fn resolve_string(&self, flag_key: &str, default: String) -> ResolutionDetails<String>;

    fn resolve_float(&self, flag_key: &str, default: f64) -> ResolutionDetails<f64>;

    fn resolve_int(&self, flag_key: &str, default: i64) -> ResolutionDetails<i64>;

    fn resolve_object(
        &self,
        flag_key: &str,
        default: serde_json::Value,
    ) -> ResolutionDetails<serde_json::Value>;
}

/// What a hook can see about the evaluation in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct HookContext {
    pub flag_key: FlagKey,
    pub kind: FlagKind,
    pub default_value: FlagValue,
    pub client_name: String,
    pub provider: ProviderMetadata,
}

/// Observer of flag evaluations.
///
/// Hooks cannot change the outcome of an evaluation. All stages default to
/// no-ops.
pub trait Hook: Send + Sync {
    fn before(&self, ctx: &HookContext) {
        let _ = ctx;
    }

    /// Called after a successful evaluation.
    fn after(&self, ctx: &HookContext, value: &FlagValue, reason: Reason) {
        let _ = (ctx, value, reason);
    }

    /// Called when evaluation failed and the default is being substituted.
    fn error(&self, ctx: &HookContext, message: &str) {
        let _ = (ctx, message);
    }

    /// Called last, whatever the outcome.
    fn finally(&self, ctx: &HookContext) {
        let _ = ctx;
    }
}
