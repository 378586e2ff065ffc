//! Flag value kinds and their textual forms.
//!
//! A namespace only stores text, so every scalar kind has one canonical parse.
//! `FlagType` closes the set of kinds a flag can be requested as; the provider
//! is generic over it instead of carrying one method per kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, FeatureProvider, ResolutionDetails};

/// The kind of value a flag is requested as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Boolean,
    String,
    Float,
    Integer,
    Object,
}

impl FlagKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Object => "object",
        }
    }

    /// Structured kinds have no text form and always resolve to the default.
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Object)
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(Self::Boolean),
            "string" | "str" => Ok(Self::String),
            "float" | "f64" | "number" => Ok(Self::Float),
            "int" | "integer" | "i64" => Ok(Self::Integer),
            "object" | "json" => Ok(Self::Object),
            _ => Err(Error::UnknownFlagKind(s.to_string())),
        }
    }
}

/// A resolved value of any kind, used where the kind is only known at runtime
/// (hooks, logging, the command line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Object(serde_json::Value),
}

impl FlagValue {
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Bool(_) => FlagKind::Boolean,
            Self::Int(_) => FlagKind::Integer,
            Self::Float(_) => FlagKind::Float,
            Self::String(_) => FlagKind::String,
            Self::Object(_) => FlagKind::Object,
        }
    }

    /// Parses `raw` as a value of `kind`.
    ///
    /// Scalars use the same parse as namespace resolution; objects are read as
    /// JSON. Returns `None` when the text does not fit the kind.
    #[must_use]
    pub fn parse(kind: FlagKind, raw: &str) -> Option<Self> {
        match kind {
            FlagKind::Boolean => parse_bool(raw).map(Self::Bool),
            FlagKind::String => Some(Self::String(raw.to_string())),
            FlagKind::Float => parse_float(raw).map(Self::Float),
            FlagKind::Integer => parse_int(raw).map(Self::Int),
            FlagKind::Object => serde_json::from_str(raw).ok().map(Self::Object),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Object(v) => write!(f, "{v}"),
        }
    }
}

/// Parses the boolean token set: `1 t T TRUE true True` and
/// `0 f F FALSE false False`. Anything else, including surrounding
/// whitespace, is rejected.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parses a base-10 signed 64-bit integer with an optional leading sign.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Parses a 64-bit float in decimal or scientific notation.
///
/// `inf` and `infinity` (any case, optional sign) and an unsigned `nan` (any
/// case) are accepted. A signed `nan` is rejected. A finite literal too large
/// for `f64` is rejected rather than rounded to infinity.
#[must_use]
pub fn parse_float(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if value.is_nan() && raw.starts_with(['+', '-']) {
        return None;
    }
    if value.is_infinite() {
        let unsigned = raw.trim_start_matches(['+', '-']);
        if !unsigned.get(..3)?.eq_ignore_ascii_case("inf") {
            return None;
        }
    }
    Some(value)
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for String {}
    impl Sealed for f64 {}
    impl Sealed for i64 {}
    impl Sealed for serde_json::Value {}
}

/// A Rust type a flag can be resolved as.
///
/// Sealed: the set is `bool`, `String`, `f64`, `i64` and `serde_json::Value`.
pub trait FlagType: sealed::Sealed + Clone + fmt::Debug + Send + Sync + 'static {
    /// Kind tag for this type.
    const KIND: FlagKind;

    /// Parses the raw namespace text. Structured types return `None`.
    fn from_raw(raw: &str) -> Option<Self>;

    /// Erases the type for hooks and logging.
    fn into_flag_value(self) -> FlagValue;

    /// Dispatches to the matching typed method of a provider.
    fn resolve_with(
        provider: &dyn FeatureProvider,
        flag_key: &str,
        default: Self,
    ) -> ResolutionDetails<Self>;
}

impl FlagType for bool {
    const KIND: FlagKind = FlagKind::Boolean;

    fn from_raw(raw: &str) -> Option<Self> {
        parse_bool(raw)
    }

    fn into_flag_value(self) -> FlagValue {
        FlagValue::Bool(self)
    }

    fn resolve_with(
        provider: &dyn FeatureProvider,
        flag_key: &str,
        default: Self,
    ) -> ResolutionDetails<Self> {
        provider.resolve_bool(flag_key, default)
    }
}

impl FlagType for String {
    const KIND: FlagKind = FlagKind::String;

    fn from_raw(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn into_flag_value(self) -> FlagValue {
        FlagValue::String(self)
    }

    fn resolve_with(
        provider: &dyn FeatureProvider,
        flag_key: &str,
        default: Self,
    ) -> ResolutionDetails<Self> {
        provider.resolve_string(flag_key, default)
    }
}

impl FlagType for f64 {
    const KIND: FlagKind = FlagKind::Float;

    fn from_raw(raw: &str) -> Option<Self> {
        parse_float(raw)
    }

    fn into_flag_value(self) -> FlagValue {
        FlagValue::Float(self)
    }

    fn resolve_with(
        provider: &dyn FeatureProvider,
        flag_key: &str,
        default: Self,
    ) -> ResolutionDetails<Self> {
        provider.resolve_float(flag_key, default)
    }
}

impl FlagType for i64 {
    const KIND: FlagKind = FlagKind::Integer;

    fn from_raw(raw: &str) -> Option<Self> {
        parse_int(raw)
    }

    fn into_flag_value(self) -> FlagValue {
        FlagValue::Int(self)
    }

    fn resolve_with(
        provider: &dyn FeatureProvider,
        flag_key: &str,
        default: Self,
    ) -> ResolutionDetails<Self> {
        provider.resolve_int(flag_key, default)
    }
}

impl FlagType for serde_json::Value {
    const KIND: FlagKind = FlagKind::Object;

    fn from_raw(_raw: &str) -> Option<Self> {
        None
    }

    fn into_flag_value(self) -> FlagValue {
        FlagValue::Object(self)
    }

    fn resolve_with(
        provider: &dyn FeatureProvider,
        flag_key: &str,
        default: Self,
    ) -> ResolutionDetails<Self> {
        provider.resolve_object(flag_key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_overflow_is_rejected() {
        assert_eq!(parse_float("1e400"), None);
        assert_eq!(parse_float("-1e400"), None);
    }

    #[test]
    fn float_infinity_spellings_are_accepted() {
        assert_eq!(parse_float("inf"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("+INF"), Some(f64::INFINITY));
    }

    #[test]
    fn float_nan_is_accepted() {
        assert!(parse_float("NaN").is_some_and(f64::is_nan));
        assert!(parse_float("nan").is_some_and(f64::is_nan));
    }

    #[test]
    fn float_signed_nan_is_rejected() {
        assert_eq!(parse_float("+nan"), None);
        assert_eq!(parse_float("-NaN"), None);
    }
}
