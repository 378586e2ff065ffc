use envflag_types::{Error, FlagKey};
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn parse_accepts_non_empty_key() {
    let key = FlagKey::parse("new-checkout").unwrap();
    assert_eq!(key.as_str(), "new-checkout");
}

#[test]
fn parse_rejects_empty_key() {
    assert!(matches!(FlagKey::parse(""), Err(Error::EmptyFlagKey)));
}

#[test]
fn from_str_matches_parse() {
    let key = FlagKey::from_str("beta.banner").unwrap();
    assert_eq!(key, FlagKey::parse("beta.banner").unwrap());
    assert!(FlagKey::from_str("").is_err());
}

#[test]
fn display_is_the_raw_key() {
    let key = FlagKey::parse("Mixed-Case.key").unwrap();
    assert_eq!(key.to_string(), "Mixed-Case.key");
}

#[test]
fn keys_are_case_sensitive() {
    let mut set = HashSet::new();
    set.insert(FlagKey::parse("flag").unwrap());
    set.insert(FlagKey::parse("FLAG").unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn serializes_as_plain_string() {
    let key = FlagKey::parse("dark-mode").unwrap();
    assert_eq!(serde_json::to_string(&key).unwrap(), r#""dark-mode""#);
}

#[test]
fn deserialization_validates() {
    let key: FlagKey = serde_json::from_str(r#""dark-mode""#).unwrap();
    assert_eq!(key.as_str(), "dark-mode");
    assert!(serde_json::from_str::<FlagKey>(r#""""#).is_err());
}

#[test]
fn error_display_empty_key() {
    let err = FlagKey::parse("").unwrap_err();
    assert!(format!("{err}").contains("must not be empty"));
}
