//! Error types for the evaluation layer.

use thiserror::Error;

/// Errors raised while wiring up the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The provider rejected registration.
    #[error("provider {provider} failed to initialize: {message}")]
    ProviderInit { provider: String, message: String },

    /// Client names must be non-empty.
    #[error("client name must not be empty")]
    InvalidClientName,
}

/// Result type for service construction.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by a single flag evaluation.
///
/// Providers never fail; these come from the client around them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The flag key was empty.
    #[error("invalid flag key: must not be empty")]
    InvalidFlagKey,

    /// No provider is registered for the client.
    #[error("no provider registered for client {client}")]
    ProviderNotReady { client: String },
}

/// Result type for flag evaluation.
pub type EvaluationResult<T> = Result<T, EvaluationError>;
