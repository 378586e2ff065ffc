mod common;

use common::{BrokenProvider, RecordingHook, memory_provider};
use envflag_service::{
    EvaluationError, FeatureFlagService, LoggingHook, ProviderRegistry, ServiceError,
};
use envflag_types::{Reason, Variant};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::{Arc, Mutex};

#[test]
fn new_registers_provider_and_binds_client() {
    let service = FeatureFlagService::new("frontend", memory_provider(&[])).unwrap();
    assert_eq!(service.client().name(), "frontend");
    assert_eq!(
        service.client().provider_metadata().unwrap().name,
        "EnvVarProvider"
    );
}

#[test]
fn new_fails_when_provider_fails_to_initialize() {
    let result = FeatureFlagService::new("frontend", Arc::new(BrokenProvider));
    assert!(matches!(result, Err(ServiceError::ProviderInit { .. })));
}

#[test]
fn new_fails_with_empty_client_name() {
    let result = FeatureFlagService::new("", memory_provider(&[]));
    assert!(matches!(result, Err(ServiceError::InvalidClientName)));
}

#[test]
fn typed_getters_read_namespace() {
    let service = FeatureFlagService::new(
        "frontend",
        memory_provider(&[
            ("NEW_CHECKOUT", "true"),
            ("THEME", "dark"),
            ("SAMPLE_RATE", "0.1"),
            ("MAX_CART_ITEMS", "25"),
        ]),
    )
    .unwrap();

    assert!(service.get_boolean_flag("new-checkout", false));
    assert_eq!(service.get_string_flag("theme", "light"), "dark");
    assert_eq!(service.get_float_flag("sample.rate", 1.0), 0.1);
    assert_eq!(service.get_int_flag("max-cart-items", 10), 25);
}

#[test]
fn typed_getters_fall_back_to_defaults() {
    let service = FeatureFlagService::new(
        "frontend",
        memory_provider(&[("MAX_CART_ITEMS", "lots"), ("THEME", "")]),
    )
    .unwrap();

    assert!(service.get_boolean_flag("new-checkout", true));
    assert_eq!(service.get_string_flag("theme", "light"), "light");
    assert_eq!(service.get_int_flag("max-cart-items", 10), 10);
    assert_eq!(
        service.get_object_flag("layout", json!({"cols": 2})),
        json!({"cols": 2})
    );
}

#[test]
fn evaluation_errors_become_defaults() {
    let registry = Arc::new(ProviderRegistry::new());
    let service = FeatureFlagService::with_registry(&registry, "frontend").unwrap();

    assert!(service.get_boolean_flag("new-checkout", true));
    assert_eq!(service.get_int_flag("limit", 4), 4);
    assert_eq!(service.get_string_flag("", "x"), "x");
}

#[test]
fn details_on_error_carry_reason_and_message() {
    let registry = Arc::new(ProviderRegistry::new());
    let service = FeatureFlagService::with_registry(&registry, "frontend").unwrap();

    let details = service.get_flag_details("limit", 4_i64);
    assert_eq!(details.value, 4);
    assert_eq!(details.reason, Reason::Error);
    assert_eq!(details.variant, None);
    assert_eq!(
        details.error_message,
        Some(
            EvaluationError::ProviderNotReady {
                client: "frontend".to_string()
            }
            .to_string()
        )
    );
}

#[test]
fn details_on_success_carry_variant() {
    let service = FeatureFlagService::new("frontend", memory_provider(&[("ON", "t")])).unwrap();
    let details = service.get_flag_details("on", false);
    assert!(details.value);
    assert_eq!(details.variant, Some(Variant::EnvVar));
    assert_eq!(details.reason, Reason::TargetingMatch);
}

#[test]
fn details_serialize_without_empty_fields() {
    let service = FeatureFlagService::new("frontend", memory_provider(&[("ON", "t")])).unwrap();
    let json = serde_json::to_value(service.get_flag_details("on", false)).unwrap();
    assert_eq!(
        json,
        json!({
            "flag_key": "on",
            "value": true,
            "variant": "env-var",
            "reason": "TARGETING_MATCH",
        })
    );
}

#[test]
fn service_sees_provider_set_on_shared_registry() {
    let registry = Arc::new(ProviderRegistry::new());
    let service = FeatureFlagService::with_registry(&registry, "frontend").unwrap();
    assert_eq!(service.get_int_flag("limit", 1), 1);

    registry.set_provider(memory_provider(&[("LIMIT", "50")])).unwrap();
    assert_eq!(service.get_int_flag("limit", 1), 50);
}

#[test]
fn client_hooks_run_through_service() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut service = FeatureFlagService::new("frontend", memory_provider(&[])).unwrap();
    service
        .client_mut()
        .add_hook(Arc::new(RecordingHook::new("svc", Arc::clone(&events))));
    service.client_mut().add_hook(Arc::new(LoggingHook));

    assert!(!service.get_boolean_flag("dark-mode", false));
    assert_eq!(events.lock().unwrap().len(), 3);
}
