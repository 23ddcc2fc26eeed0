use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::api::{AppState, api_routes};
use crate::models::NewUser;
use crate::store::Store;
use crate::tests::create_test_store;

async fn app_with_known_user() -> (Router, String) {
    let store = create_test_store().await;
    store
        .create_user(NewUser {
            name: "Known User".to_string(),
            email: "known@x.com".to_string(),
            password: "correctpw".to_string(),
        })
        .await
        .unwrap();
    let state = Arc::new(AppState::new(store, "test-secret"));
    let token = state.auth.login("known@x.com", "correctpw").await.unwrap();
    (api_routes(state), token)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let (app, _token) = app_with_known_user().await;

    for uri in ["/users", "/products"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} without token", uri);
    }
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let (app, _token) = app_with_known_user().await;

    let response = app
        .clone()
        .oneshot(get_with_token("/users", "not-a-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A non-Bearer Authorization header is rejected before validation.
    let request = Request::builder()
        .uri("/users")
        .header(header::AUTHORIZATION, "Basic abc123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_issued_token_grants_access() {
    let (app, token) = app_with_known_user().await;

    let response = app.clone().oneshot(get_with_token("/users", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_with_token("/products", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_and_login_stay_open() {
    let store = create_test_store().await;
    let app = api_routes(Arc::new(AppState::new(store, "test-secret")));

    let response = app
        .clone()
        .oneshot(post_json(
            "/users",
            json!({"name": "New User", "email": "newuser@example.com", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/login", json!({"email": "newuser@example.com", "password": "pw"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let (app, token) = app_with_known_user().await;

    let response = app
        .oneshot(get_with_token("/users/invalid-uuid", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
