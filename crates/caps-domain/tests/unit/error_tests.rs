//! Unit tests for domain error types

use caps_domain::{CapabilityError, Error};

#[test]
fn test_duplicate_capability_error() {
    let error = CapabilityError::duplicate("Persistence");
    match &error {
        CapabilityError::DuplicateCapability { name } => assert_eq!(name, "Persistence"),
        _ => panic!("Expected DuplicateCapability error"),
    }
    assert_eq!(
        error.to_string(),
        "Capability 'Persistence' is already registered"
    );
}

#[test]
fn test_frozen_and_missing_errors() {
    let frozen = CapabilityError::frozen("Logger");
    assert!(matches!(frozen, CapabilityError::RegistryFrozen { .. }));
    assert!(frozen.to_string().contains("registry is frozen"));

    let missing = CapabilityError::missing("Clock");
    assert!(matches!(missing, CapabilityError::MissingCapability { .. }));
    assert_eq!(missing.capability_name(), "Clock");
}

#[test]
fn test_type_mismatch_display() {
    let error = CapabilityError::CapabilityTypeMismatch {
        name: "Logger".to_string(),
        expected: "dyn Logger",
        actual: "dyn Persistence",
    };
    let display = error.to_string();
    assert!(display.contains("dyn Persistence"));
    assert!(display.contains("expected dyn Logger"));
}

#[test]
fn test_unknown_provider_lists_available() {
    let error = CapabilityError::UnknownProvider {
        capability: "Persistence".to_string(),
        provider: "postgres".to_string(),
        available: vec!["memory".to_string(), "fixed".to_string()],
    };
    assert_eq!(error.capability_name(), "Persistence");
    assert!(error.to_string().contains("\"memory\""));
}

#[test]
fn test_capability_error_converts_into_error() {
    let error: Error = CapabilityError::missing("Logger").into();
    match error {
        Error::Capability(inner) => assert_eq!(inner.capability_name(), "Logger"),
        _ => panic!("Expected Capability error"),
    }
}

#[test]
fn test_persistence_error() {
    let error = Error::persistence("connection refused");
    match error {
        Error::Persistence { message } => assert_eq!(message, "connection refused"),
        _ => panic!("Expected Persistence error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to read config", io);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to read config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}
