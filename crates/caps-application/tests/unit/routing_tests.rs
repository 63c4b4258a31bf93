//! Request routing tests

use crate::test_utils::wire;
use caps_application::{CapabilityRegistry, RequestContext, RouteError, route_request};
use caps_domain::CapabilityError;
use caps_domain::ports::Persistence;
use caps_providers::{FixedIdPersistence, InMemoryPersistence};
use caps_domain::UserId;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_post_users_creates_with_201() {
    let wiring = wire(Arc::new(FixedIdPersistence::new(UserId::new(42))));
    let ctx = wiring.context("POST", "/users", r#"{"username":"a","password":"b"}"#);

    let response = route_request(&ctx).await.unwrap().unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body, json!({"userId": 42, "userName": "a"}));
}

#[tokio::test]
async fn test_malformed_body_maps_to_400() {
    let wiring = wire(Arc::new(FixedIdPersistence::new(UserId::new(42))));
    let ctx = wiring.context("POST", "/users", "{}");

    let err = route_request(&ctx).await.unwrap().unwrap_err();

    assert_eq!(err.status(), 400);
    assert_eq!(err.kind(), "malformed_body");
}

#[tokio::test]
async fn test_get_routes() {
    let wiring = wire(Arc::new(InMemoryPersistence::new()));
    route_request(&wiring.context("POST", "/users", r#"{"username":"x","password":"y"}"#))
        .await
        .unwrap()
        .unwrap();

    let listed = route_request(&wiring.context("GET", "/users", ""))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(listed.status, 200);
    assert_eq!(listed.body, json!([{"userId": 1, "userName": "x"}]));

    let single = route_request(&wiring.context("get", "/users/1/", ""))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(single.body["userName"], "x");

    let missing = route_request(&wiring.context("GET", "/users/5", ""))
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(missing.status(), 404);
    assert_eq!(missing.kind(), "not_found");
}

#[tokio::test]
async fn test_unknown_route_and_method() {
    let wiring = wire(Arc::new(InMemoryPersistence::new()));

    let unknown = route_request(&wiring.context("GET", "/nope", ""))
        .await
        .unwrap()
        .unwrap_err();
    assert!(matches!(unknown, RouteError::NotFound { .. }));

    let wrong_method = route_request(&wiring.context("DELETE", "/users/1", ""))
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(wrong_method.status(), 405);
}

#[tokio::test]
async fn test_missing_capability_is_outer_error() {
    let mut registry = CapabilityRegistry::new();
    registry
        .register_capability::<dyn Persistence>(Arc::new(InMemoryPersistence::new()))
        .unwrap();
    let ctx = RequestContext::new(registry.freeze(), "POST", "/users", "{}");

    let err = route_request(&ctx).await.unwrap_err();
    assert_eq!(err, CapabilityError::missing("Logger"));
}
