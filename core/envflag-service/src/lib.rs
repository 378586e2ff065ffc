//! Flag evaluation client and logging facade for envflag.
//!
//! - `ProviderRegistry` binds providers to client names
//! - `FlagClient` evaluates typed flags and runs hooks around each evaluation
//! - `FeatureFlagService` wraps a client, logs every evaluation and turns
//!   evaluation errors into the caller's default
//!
//! ```
//! use envflag_provider::{EnvVarProvider, MemoryNamespace, ProviderConfig};
//! use envflag_service::FeatureFlagService;
//! use std::sync::Arc;
//!
//! let namespace = MemoryNamespace::from_iter([("CHECKOUT_V2", "true")]);
//! let provider = EnvVarProvider::with_namespace(ProviderConfig::default(), namespace);
//! let service = FeatureFlagService::new("frontend", Arc::new(provider)).unwrap();
//!
//! assert!(service.get_boolean_flag("checkout-v2", false));
//! assert_eq!(service.get_int_flag("page-size", 20), 20);
//! ```

mod client;
mod details;
mod error;
mod hooks;
mod registry;
mod service;

pub use client::FlagClient;
pub use details::EvaluationDetails;
pub use error::{EvaluationError, EvaluationResult, ServiceError, ServiceResult};
pub use hooks::LoggingHook;
pub use registry::ProviderRegistry;
pub use service::FeatureFlagService;
