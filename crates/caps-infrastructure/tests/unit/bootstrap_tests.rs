//! Bootstrap tests: configuration to frozen capability set

use caps_application::providers::CapabilityProviderConfig;
use caps_application::Cap;
use caps_domain::ports::{Logger, PasswordHasher, Persistence};
use caps_domain::{CapabilityError, Error, UserId};
use caps_infrastructure::config::{CapabilitiesConfig, ConfigBuilder};
use caps_infrastructure::{build_capability_set, init_app};

#[test]
fn test_default_providers_are_bound() {
    let set = build_capability_set(&CapabilitiesConfig::default()).unwrap();

    assert_eq!(set.names(), vec!["Logger", "PasswordHasher", "Persistence"]);
    assert_eq!(
        set.resolve_capability::<dyn Persistence>()
            .unwrap()
            .provider_name(),
        "memory"
    );
    assert_eq!(
        set.resolve_capability::<dyn Logger>()
            .unwrap()
            .provider_name(),
        "tracing"
    );
    assert_eq!(
        set.resolve_capability::<dyn PasswordHasher>()
            .unwrap()
            .provider_name(),
        "argon2"
    );
}

#[test]
fn test_unknown_provider_aborts_start_up() {
    let config = ConfigBuilder::new()
        .with_persistence(CapabilityProviderConfig::new("postgres"))
        .build();

    let err = init_app(config).unwrap_err();
    assert!(matches!(
        err,
        Error::Capability(CapabilityError::UnknownProvider { ref provider, .. }) if provider == "postgres"
    ));
}

#[test]
fn test_provider_init_failure_aborts_start_up() {
    let config = CapabilitiesConfig {
        persistence: CapabilityProviderConfig::new("fixed"),
        ..Default::default()
    };

    let err = build_capability_set(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::Capability(CapabilityError::ProviderInit { .. })
    ));
}

#[tokio::test]
async fn test_app_context_dispatches_against_configured_providers() {
    let config = ConfigBuilder::new()
        .with_persistence(CapabilityProviderConfig::new("fixed").with_extra("user_id", "42"))
        .with_logger(CapabilityProviderConfig::new("null"))
        .with_password_hasher(CapabilityProviderConfig::new("plaintext"))
        .build();

    let app = init_app(config).unwrap();
    assert_eq!(app.capabilities().len(), 3);
    assert_eq!(app.config.capabilities.logger.provider, "null");

    let ctx = app.dispatcher().context("POST", "/users", "");
    let id = app
        .dispatcher()
        .dispatch(&ctx, |p: Cap<dyn Persistence>| async move {
            p.create_user("a", "plain$b")
                .await
                .map_err(|e| e.to_string())
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(id, UserId::new(42));
}
