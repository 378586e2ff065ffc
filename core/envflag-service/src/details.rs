use envflag_types::{FallbackCause, Reason, ResolutionDetails, Variant};
use serde::Serialize;

use crate::error::EvaluationError;

/// Result of one client-side evaluation.
///
/// Carries the provider's resolution tags, or `Reason::Error` and a message
/// when the evaluation failed and the caller's default was substituted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationDetails<T> {
    pub flag_key: String,
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    pub reason: Reason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackCause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> EvaluationDetails<T> {
    #[must_use]
    pub fn from_resolution(flag_key: impl Into<String>, details: ResolutionDetails<T>) -> Self {
        let variant = details.variant();
        let reason = details.reason();
        let fallback = details.fallback_cause();
        Self {
            flag_key: flag_key.into(),
            value: details.into_value(),
            variant: Some(variant),
            reason,
            fallback,
            error_message: None,
        }
    }

    #[must_use]
    pub fn from_error(flag_key: impl Into<String>, default: T, error: &EvaluationError) -> Self {
        Self {
            flag_key: flag_key.into(),
            value: default,
            variant: None,
            reason: Reason::Error,
            fallback: None,
            error_message: Some(error.to_string()),
        }
    }

    /// Returns true if the value did not come from the provider's namespace.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.variant != Some(Variant::EnvVar)
    }
}
