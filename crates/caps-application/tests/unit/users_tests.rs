//! User domain functions run through the dispatcher

use crate::test_utils::{FailingPersistence, wire};
use caps_application::use_cases::{UserError, create_user, get_user, list_users};
use caps_application::{Cap, DomainResult, RequestContext, dispatch};
use caps_domain::ports::{LogLevel, Logger, PasswordHasher, Persistence};
use caps_domain::{User, UserId};
use caps_providers::{FixedIdPersistence, InMemoryPersistence};
use std::sync::Arc;

type CreateCaps = (Cap<dyn Persistence>, Cap<dyn Logger>, Cap<dyn PasswordHasher>);

async fn run_create(ctx: &RequestContext) -> DomainResult<User, UserError> {
    dispatch(ctx, |(p, l, h): CreateCaps| create_user(p, l, h, ctx.body()))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_user_with_fixed_id() {
    let wiring = wire(Arc::new(FixedIdPersistence::new(UserId::new(42))));
    let ctx = wiring.context("POST", "/users", r#"{"username":"a","password":"b"}"#);

    let user = run_create(&ctx).await.unwrap();

    assert_eq!(user, User::new(UserId::new(42), "a"));
    assert_eq!(
        serde_json::to_value(&user).unwrap(),
        serde_json::json!({"userId": 42, "userName": "a"})
    );
}

#[tokio::test]
async fn test_empty_body_is_a_domain_error() {
    let wiring = wire(Arc::new(FixedIdPersistence::new(UserId::new(42))));
    let ctx = wiring.context("POST", "/users", "{}");

    let err = run_create(&ctx).await.unwrap_err();

    assert!(matches!(err, UserError::MalformedBody(_)));
    assert!(!wiring.logger.messages_at(LogLevel::Warn).is_empty());
}

#[tokio::test]
async fn test_swapping_persistence_changes_outcome() {
    let body = r#"{"username":"dave","password":"pw"}"#;
    let fixed = wire(Arc::new(FixedIdPersistence::new(UserId::new(42))));
    let memory = wire(Arc::new(InMemoryPersistence::new()));

    let from_fixed = run_create(&fixed.context("POST", "/users", body))
        .await
        .unwrap();
    let from_memory = run_create(&memory.context("POST", "/users", body))
        .await
        .unwrap();

    assert_eq!(from_fixed, User::new(UserId::new(42), "dave"));
    assert_eq!(from_memory, User::new(UserId::new(1), "dave"));
    assert_eq!(fixed.logger.messages_at(LogLevel::Info), vec!["Created user 42 (dave)"]);
    assert_eq!(memory.logger.messages_at(LogLevel::Info), vec!["Created user 1 (dave)"]);
}

#[tokio::test]
async fn test_recording_logger_observes_created_user() {
    let wiring = wire(Arc::new(InMemoryPersistence::new()));
    let ctx = wiring.context("POST", "/users", r#"{"username":"carol","password":"pw"}"#);

    let user = run_create(&ctx).await.unwrap();

    assert_eq!(user.user_id, UserId::new(1));
    let infos = wiring.logger.messages_at(LogLevel::Info);
    assert_eq!(infos, vec!["Created user 1 (carol)".to_string()]);
}

#[tokio::test]
async fn test_password_is_hashed_before_persistence() {
    let store = Arc::new(InMemoryPersistence::new());
    let persistence: Arc<dyn Persistence> = store.clone();
    let wiring = wire(persistence);
    let ctx = wiring.context("POST", "/users", r#"{"username":"a","password":"b"}"#);

    let user = run_create(&ctx).await.unwrap();

    assert_eq!(store.password_hash(user.user_id).as_deref(), Some("plain$b"));
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let wiring = wire(Arc::new(InMemoryPersistence::new()));
    let body = r#"{"username":"a","password":"b"}"#;

    run_create(&wiring.context("POST", "/users", body)).await.unwrap();
    let err = run_create(&wiring.context("POST", "/users", body))
        .await
        .unwrap_err();

    assert_eq!(err, UserError::Conflict("a".to_string()));
}

#[tokio::test]
async fn test_persistence_failure_is_reported_as_data() {
    let failing = Arc::new(FailingPersistence::default());
    let persistence: Arc<dyn Persistence> = failing.clone();
    let wiring = wire(persistence);
    let ctx = wiring.context("POST", "/users", r#"{"username":"a","password":"b"}"#);

    let err = run_create(&ctx).await.unwrap_err();

    assert!(matches!(err, UserError::Persistence(ref msg) if msg.contains("disk full")));
    assert_eq!(failing.calls(), 1);
    assert!(wiring.logger.contains("Failed to store user 'a'"));
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_persistence() {
    let failing = Arc::new(FailingPersistence::default());
    let persistence: Arc<dyn Persistence> = failing.clone();
    let wiring = wire(persistence);
    let ctx = wiring.context("POST", "/users", r#"{"username":"","password":"b"}"#);

    let err = run_create(&ctx).await.unwrap_err();

    assert_eq!(err.kind(), "validation");
    assert_eq!(failing.calls(), 0);
}

#[tokio::test]
async fn test_get_and_list_users() {
    let wiring = wire(Arc::new(InMemoryPersistence::new()));
    for name in ["a", "b"] {
        let body = format!(r#"{{"username":"{name}","password":"pw"}}"#);
        run_create(&wiring.context("POST", "/users", &body)).await.unwrap();
    }
    let ctx = wiring.context("GET", "/users/2", "");

    let found = dispatch(&ctx, |(p, l): (Cap<dyn Persistence>, Cap<dyn Logger>)| {
        get_user(p, l, "2")
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(found, User::new(UserId::new(2), "b"));

    let missing = dispatch(&ctx, |(p, l): (Cap<dyn Persistence>, Cap<dyn Logger>)| {
        get_user(p, l, "9")
    })
    .await
    .unwrap();
    assert_eq!(missing, Err(UserError::NotFound(UserId::new(9))));

    let invalid = dispatch(&ctx, |(p, l): (Cap<dyn Persistence>, Cap<dyn Logger>)| {
        get_user(p, l, "abc")
    })
    .await
    .unwrap();
    assert!(matches!(invalid, Err(UserError::Validation(_))));

    let all = dispatch(&ctx, |p: Cap<dyn Persistence>| list_users(p))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(all.len(), 2);
}
