//! Core type definitions for envflag.
//!
//! This crate defines the provider-agnostic vocabulary shared by every
//! envflag crate:
//! - Flag keys and the value kinds a flag can be resolved as
//! - Resolution results (value, variant, reason, fallback diagnostics)
//! - The `FeatureProvider` and `Hook` contracts consumed by the evaluation layer
//!
//! Concrete providers (environment lookup, in-memory namespaces) live in
//! `envflag-provider`; the client facade lives in `envflag-service`.

mod key;
mod provider;
mod resolution;
mod value;

pub use key::FlagKey;
pub use provider::{FeatureProvider, Hook, HookContext, ProviderMetadata};
pub use resolution::{FallbackCause, Reason, ResolutionDetails, Variant};
pub use value::{FlagKind, FlagType, FlagValue, parse_bool, parse_float, parse_int};

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("flag key must not be empty")]
    EmptyFlagKey,

    #[error("unknown flag kind: {0}")]
    UnknownFlagKind(String),
}
