//! Resolution results.
//!
//! A `ResolutionDetails<T>` is what a provider hands back for one lookup: the
//! value plus tags describing which path produced it. Resolution never fails,
//! so there is no error variant here; a provider that could not use the
//! namespace value says so through `FallbackCause`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which resolution path produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// The value came from the namespace.
    #[serde(rename = "env-var")]
    EnvVar,
    /// The caller's default was used.
    #[serde(rename = "default-variant")]
    DefaultVariant,
}

impl Variant {
    /// Returns the wire label of the variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnvVar => "env-var",
            Self::DefaultVariant => "default-variant",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse category of why a value was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// A namespace entry matched and parsed.
    TargetingMatch,
    /// The default was returned.
    Default,
    /// Evaluation failed above the provider and the default was substituted.
    /// Providers never produce this.
    Error,
}

impl Reason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TargetingMatch => "TARGETING_MATCH",
            Self::Default => "DEFAULT",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic detail explaining a fallback to the default.
///
/// Callers that only look at `Reason`/`Variant` cannot tell these apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackCause {
    /// No entry, or an empty one.
    NamespaceMiss,
    /// An entry exists but does not parse as the requested kind.
    CoercionFailure,
    /// Structured values cannot be represented in the namespace.
    UnsupportedType,
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NamespaceMiss => "namespace miss",
            Self::CoercionFailure => "coercion failure",
            Self::UnsupportedType => "unsupported type",
        })
    }
}

/// Outcome of resolving one flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionDetails<T> {
    value: T,
    variant: Variant,
    reason: Reason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<FallbackCause>,
}

impl<T> ResolutionDetails<T> {
    /// A value read from the namespace.
    #[must_use]
    pub fn matched(value: T) -> Self {
        Self {
            value,
            variant: Variant::EnvVar,
            reason: Reason::TargetingMatch,
            fallback: None,
        }
    }

    /// The caller's default, tagged with why it was used.
    #[must_use]
    pub fn fallback(default: T, cause: FallbackCause) -> Self {
        Self {
            value: default,
            variant: Variant::DefaultVariant,
            reason: Reason::Default,
            fallback: Some(cause),
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the result, returning the resolved value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn reason(&self) -> Reason {
        self.reason
    }

    /// Why the default was used, if it was.
    #[must_use]
    pub const fn fallback_cause(&self) -> Option<FallbackCause> {
        self.fallback
    }

    /// Returns true if the caller's default was returned.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self.variant, Variant::DefaultVariant)
    }

    /// Transforms the value while keeping the resolution tags.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResolutionDetails<U> {
        ResolutionDetails {
            value: f(self.value),
            variant: self.variant,
            reason: self.reason,
            fallback: self.fallback,
        }
    }
}
