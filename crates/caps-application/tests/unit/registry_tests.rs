//! Registry lifecycle tests

use caps_application::{CapabilityRegistry, RegistryState};
use caps_domain::CapabilityError;
use caps_domain::ports::{Logger, Persistence};
use caps_providers::{InMemoryPersistence, NullLogger, RecordingLogger};
use std::sync::Arc;

#[test]
fn test_duplicate_name_is_rejected_and_first_binding_kept() {
    let mut registry = CapabilityRegistry::new();
    let first: Arc<dyn Logger> = Arc::new(NullLogger::new());
    registry.register("Logger", Arc::clone(&first)).unwrap();

    let second: Arc<dyn Logger> = Arc::new(RecordingLogger::new());
    let err = registry.register("Logger", second).unwrap_err();
    assert_eq!(
        err,
        CapabilityError::DuplicateCapability {
            name: "Logger".to_string()
        }
    );

    let set = registry.freeze();
    let resolved = set.resolve::<dyn Logger>("Logger").unwrap();
    assert!(Arc::ptr_eq(&first, &resolved));
    assert_eq!(resolved.provider_name(), "null");
}

#[test]
fn test_register_after_freeze_is_rejected() {
    let mut registry = CapabilityRegistry::new();
    let set = registry.freeze();
    assert!(set.is_empty());

    let logger: Arc<dyn Logger> = Arc::new(NullLogger::new());
    let err = registry.register("Logger", logger).unwrap_err();
    assert!(matches!(err, CapabilityError::RegistryFrozen { ref name } if name == "Logger"));
    assert_eq!(registry.state(), RegistryState::Frozen);
    assert!(!registry.freeze().contains("Logger"));
}

#[test]
fn test_frozen_wins_over_duplicate() {
    let mut registry = CapabilityRegistry::new();
    let logger: Arc<dyn Logger> = Arc::new(NullLogger::new());
    registry.register("Logger", Arc::clone(&logger)).unwrap();
    registry.freeze();

    let err = registry.register("Logger", logger).unwrap_err();
    assert!(matches!(err, CapabilityError::RegistryFrozen { .. }));
}

#[test]
fn test_resolve_returns_registered_instance() {
    let persistence: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
    let mut registry = CapabilityRegistry::new();
    registry
        .register_capability::<dyn Persistence>(Arc::clone(&persistence))
        .unwrap();
    let set = registry.freeze();

    let first = set.resolve_capability::<dyn Persistence>().unwrap();
    let second = set.resolve::<dyn Persistence>("Persistence").unwrap();
    assert!(Arc::ptr_eq(&persistence, &first));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_missing_capability_names_the_key() {
    let set = CapabilityRegistry::new().freeze();
    let err = set.resolve::<dyn Logger>("Logger").err().unwrap();
    assert_eq!(err, CapabilityError::missing("Logger"));
    assert_eq!(err.capability_name(), "Logger");
}

#[test]
fn test_names_are_sorted() {
    let mut registry = CapabilityRegistry::new();
    let logger: Arc<dyn Logger> = Arc::new(NullLogger::new());
    registry
        .register_capability::<dyn Persistence>(Arc::new(InMemoryPersistence::new()))
        .unwrap();
    registry.register_capability::<dyn Logger>(logger).unwrap();
    let set = registry.freeze();

    assert_eq!(set.names(), vec!["Logger", "Persistence"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_custom_names_can_bind_the_same_interface_twice() {
    let mut registry = CapabilityRegistry::new();
    let audit: Arc<dyn Logger> = Arc::new(RecordingLogger::new());
    let main: Arc<dyn Logger> = Arc::new(NullLogger::new());
    registry.register("AuditLogger", audit).unwrap();
    registry.register("Logger", main).unwrap();
    let set = registry.freeze();

    assert_eq!(
        set.resolve::<dyn Logger>("AuditLogger")
            .unwrap()
            .provider_name(),
        "recording"
    );
    assert_eq!(
        set.resolve_capability::<dyn Logger>()
            .unwrap()
            .provider_name(),
        "null"
    );
}
