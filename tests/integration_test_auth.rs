mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::TestApp;
use tower::ServiceExt;
use serde_json::{json, Value};

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_sets_cookie_and_returns_profile() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "Ana Silva",
        "emailOrPhone": "ana@example.com",
        "password": "segredo123"
    });

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response.headers()
        .get(header::SET_COOKIE)
        .expect("No Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();

    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));

    let body = parse_body(response).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["name"], "Ana Silva");
    assert_eq!(body["user"]["email"], "ana@example.com");
    assert_eq!(body["user"]["phone"], "");

    // The credential hash stays server-side
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_with_phone_identity() {
    let app = TestApp::new().await;

    // No '@' means the identifier lands in the phone field
    let session = app.register("Bruno", "11987654321", "segredo123").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/auth/me")
            .header(header::COOKIE, format!("auth-token={}", session.token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["phone"], "11987654321");
    assert_eq!(body["email"], "");

    // And logging in with the phone number works
    let relogin = app.login("11987654321", "segredo123").await;
    assert_eq!(relogin.user_id, session.user_id);
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let app = TestApp::new().await;

    // Missing name
    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json!({
                "emailOrPhone": "ana@example.com",
                "password": "segredo123"
            })).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "All fields are required");

    // Password below the minimum length
    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json!({
                "name": "Ana",
                "emailOrPhone": "ana@example.com",
                "password": "curta"
            })).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "Password must be at least 6 characters");

    // Duplicate identity
    app.register("Ana", "ana@example.com", "segredo123").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json!({
                "name": "Outra Ana",
                "emailOrPhone": "ana@example.com",
                "password": "segredo456"
            })).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "Email or phone already registered");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("Ana", "ana@example.com", "segredo123").await;

    // Wrong password
    let wrong_password = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json!({
                "emailOrPhone": "ana@example.com",
                "password": "errada99"
            })).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert!(wrong_password.headers().get(header::SET_COOKIE).is_none());
    let wrong_password_body = parse_body(wrong_password).await;

    // Identity that was never registered
    let unknown_identity = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json!({
                "emailOrPhone": "ninguem@example.com",
                "password": "tanto-faz"
            })).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(unknown_identity.status(), StatusCode::UNAUTHORIZED);
    assert!(unknown_identity.headers().get(header::SET_COOKIE).is_none());
    let unknown_identity_body = parse_body(unknown_identity).await;

    // Same body either way, so responses do not leak which accounts exist
    assert_eq!(wrong_password_body, unknown_identity_body);
    assert_eq!(wrong_password_body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json!({ "emailOrPhone": "ana@example.com" })).unwrap()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "Email/phone and password are required");
}

#[tokio::test]
async fn test_me_accepts_cookie_and_bearer_token() {
    let app = TestApp::new().await;
    let session = app.register("Ana", "ana@example.com", "segredo123").await;

    // Via cookie
    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/auth/me")
            .header(header::COOKIE, format!("auth-token={}", session.token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["id"].as_str().unwrap(), session.user_id);

    // Via Authorization header
    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/auth/me")
            .header(header::AUTHORIZATION, format!("Bearer {}", session.token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["id"].as_str().unwrap(), session.user_id);

    // No credentials at all
    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/auth/me")
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A token that never came from us
    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/auth/me")
            .header(header::AUTHORIZATION, "Bearer nem.um.jwt")
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_expires_the_cookie() {
    let app = TestApp::new().await;
    let session = app.register("Ana", "ana@example.com", "segredo123").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/logout")
            .header(header::COOKIE, format!("auth-token={}", session.token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response.headers()
        .get(header::SET_COOKIE)
        .expect("No Set-Cookie header")
        .to_str()
        .unwrap();

    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("Max-Age=0"));
}
