//! Environment-backed flag provider for envflag.
//!
//! This crate handles:
//! - Mapping flag keys to environment-style variable names
//! - Looking those names up in an injected `Namespace`
//! - Coercing the raw text to the requested kind, falling back to the
//!   caller's default when the entry is missing or malformed
//!
//! # Design Principles
//!
//! - **Total**: resolution never fails; every call returns a complete result
//! - **Live**: nothing is cached, each call re-reads the namespace
//! - **Injected source**: the process environment is one `Namespace` among
//!   others, so tests never need to touch real process state
//!
//! # Example
//!
//! ```
//! use envflag_provider::{EnvVarProvider, MemoryNamespace, ProviderConfig};
//! use envflag_types::Variant;
//!
//! let namespace = MemoryNamespace::from_iter([("APP_DARK_MODE", "true")]);
//! let provider = EnvVarProvider::with_namespace(ProviderConfig::new("APP"), namespace);
//!
//! let details = provider.resolve("dark-mode", false);
//! assert!(*details.value());
//! assert_eq!(details.variant(), Variant::EnvVar);
//! ```

mod config;
mod env_provider;
mod error;
mod mapper;
mod namespace;

pub use config::ProviderConfig;
pub use env_provider::{EnvVarProvider, PROVIDER_NAME};
pub use error::{ConfigError, ConfigResult};
pub use mapper::map_to_namespace_key;
pub use namespace::{MemoryNamespace, Namespace, ProcessEnv};
