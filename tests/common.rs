use ecoenergy_backend::{
    api::router::create_router,
    config::Config,
    infra::{factory::state_with_store, store::FlatStore},
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config {
            data_dir: "./data".to_string(),
            port: 0,
            auth_secret: "test-secret".to_string(),
            auth_issuer: "test-issuer".to_string(),
        };

        // Every test gets its own in-memory store, so suites never see each
        // other's collections.
        let state = Arc::new(state_with_store(&config, Arc::new(FlatStore::in_memory())));
        let router = create_router(state.clone());

        Self { router, state }
    }

    pub async fn register(&self, name: &str, email_or_phone: &str, password: &str) -> AuthSession {
        let payload = serde_json::json!({
            "name": name,
            "emailOrPhone": email_or_phone,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }

        session_from(response).await
    }

    #[allow(dead_code)]
    pub async fn login(&self, email_or_phone: &str, password: &str) -> AuthSession {
        let payload = serde_json::json!({
            "emailOrPhone": email_or_phone,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        session_from(response).await
    }
}

/// Pulls the session token out of the auth cookie and the user id out of the
/// body, the way a browser client would.
async fn session_from(response: axum::response::Response) -> AuthSession {
    let cookies: Vec<String> = response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|h| h.to_str().unwrap().to_string())
        .collect();

    let auth_cookie = cookies.iter()
        .find(|c| c.contains("auth-token="))
        .expect("No auth-token cookie returned");

    let start = auth_cookie.find("auth-token=").unwrap() + 11;
    let end = auth_cookie[start..].find(';').unwrap_or(auth_cookie.len() - start);
    let token = auth_cookie[start..start + end].to_string();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(
        body_json["token"].as_str(),
        Some(token.as_str()),
        "cookie token and body token differ"
    );

    let user_id = body_json["user"]["id"].as_str().expect("No user id in body").to_string();

    AuthSession { token, user_id }
}
