//! Shared test helpers for service tests.

#![allow(dead_code)]

use envflag_provider::{EnvVarProvider, MemoryNamespace, ProviderConfig};
use envflag_types::{
    FallbackCause, FeatureProvider, FlagValue, Hook, HookContext, ProviderMetadata, Reason,
    ResolutionDetails,
};
use std::sync::{Arc, Mutex};

/// Env provider over an in-memory namespace seeded with `entries`.
pub fn memory_provider(entries: &[(&str, &str)]) -> Arc<EnvVarProvider<MemoryNamespace>> {
    Arc::new(EnvVarProvider::with_namespace(
        ProviderConfig::default(),
        entries.iter().copied().collect(),
    ))
}

/// Provider whose initialization always fails.
pub struct BrokenProvider;

impl FeatureProvider for BrokenProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new("BrokenProvider")
    }

    fn initialize(&self) -> Result<(), String> {
        Err("backing store unavailable".to_string())
    }

    fn resolve_bool(&self, _: &str, default: bool) -> ResolutionDetails<bool> {
        ResolutionDetails::fallback(default, FallbackCause::NamespaceMiss)
    }

    fn resolve_string(&self, _: &str, default: String) -> ResolutionDetails<String> {
        ResolutionDetails::fallback(default, FallbackCause::NamespaceMiss)
    }

    fn resolve_float(&self, _: &str, default: f64) -> ResolutionDetails<f64> {
        ResolutionDetails::fallback(default, FallbackCause::NamespaceMiss)
    }

    fn resolve_int(&self, _: &str, default: i64) -> ResolutionDetails<i64> {
        ResolutionDetails::fallback(default, FallbackCause::NamespaceMiss)
    }

    fn resolve_object(
        &self,
        _: &str,
        default: serde_json::Value,
    ) -> ResolutionDetails<serde_json::Value> {
        ResolutionDetails::fallback(default, FallbackCause::UnsupportedType)
    }
}

/// Hook that records every stage it sees.
#[derive(Default)]
pub struct RecordingHook {
    pub label: &'static str,
    pub events: Arc<Mutex<Vec<String>>>,
}

impl RecordingHook {
    pub fn new(label: &'static str, events: Arc<Mutex<Vec<String>>>) -> Self {
        Self { label, events }
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Hook for RecordingHook {
    fn before(&self, ctx: &HookContext) {
        self.push(format!("{}:before:{}:{}", self.label, ctx.flag_key, ctx.provider.name));
    }

    fn after(&self, ctx: &HookContext, value: &FlagValue, reason: Reason) {
        self.push(format!("{}:after:{}:{}:{}", self.label, ctx.flag_key, value, reason));
    }

    fn error(&self, ctx: &HookContext, message: &str) {
        self.push(format!("{}:error:{}:{}", self.label, ctx.flag_key, message));
    }

    fn finally(&self, ctx: &HookContext) {
        self.push(format!("{}:finally:{}", self.label, ctx.flag_key));
    }
}

/// Provider that wraps another and contributes its own hook.
pub struct HookedProvider<P> {
    pub inner: P,
    pub hook: Arc<dyn Hook>,
}

impl<P: FeatureProvider> FeatureProvider for HookedProvider<P> {
    fn metadata(&self) -> ProviderMetadata {
        self.inner.metadata()
    }

    fn hooks(&self) -> Vec<Arc<dyn Hook>> {
        vec![Arc::clone(&self.hook)]
    }

    fn resolve_bool(&self, key: &str, default: bool) -> ResolutionDetails<bool> {
        self.inner.resolve_bool(key, default)
    }

    fn resolve_string(&self, key: &str, default: String) -> ResolutionDetails<String> {
        self.inner.resolve_string(key, default)
    }

    fn resolve_float(&self, key: &str, default: f64) -> ResolutionDetails<f64> {
        self.inner.resolve_float(key, default)
    }

    fn resolve_int(&self, key: &str, default: i64) -> ResolutionDetails<i64> {
        self.inner.resolve_int(key, default)
    }

    fn resolve_object(
        &self,
        key: &str,
        default: serde_json::Value,
    ) -> ResolutionDetails<serde_json::Value> {
        self.inner.resolve_object(key, default)
    }
}
