use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::extractors::auth::{AuthUser, AUTH_COOKIE};
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::models::user::User;
use crate::domain::services::auth_service::TOKEN_TTL_DAYS;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use time::Duration;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2, PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.unwrap_or_default();
    let email_or_phone = payload.email_or_phone.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    if name.trim().is_empty() || email_or_phone.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    if password.len() < 6 {
        return Err(AppError::Validation("Password must be at least 6 characters".into()));
    }

    if state.user_repo.find_by_email_or_phone(&email_or_phone).await?.is_some() {
        return Err(AppError::Validation("Email or phone already registered".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    // An '@' decides which identity column the signup key lands in; the
    // other one stays blank.
    let is_email = email_or_phone.contains('@');
    let (email, phone) = if is_email {
        (email_or_phone, String::new())
    } else {
        (String::new(), email_or_phone)
    };

    let user = User::new(name, email, phone, password_hash);
    let created = state.user_repo.create(&user).await?;

    let token = state.auth_service.issue_token(&created.id)?;
    set_auth_cookie(&cookies, &token);

    info!("User registered: {}", created.id);

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&created),
    }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email_or_phone = payload.email_or_phone.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    if email_or_phone.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Email/phone and password are required".into()));
    }

    // Unknown identity and wrong password collapse into the same 401, so
    // login never reveals whether an account exists.
    let user = state
        .user_repo
        .find_by_email_or_phone(&email_or_phone)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let token = state.auth_service.issue_token(&user.id)?;
    set_auth_cookie(&cookies, &token);

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build((AUTH_COOKIE, "")).path("/").into());

    info!("User logged out");

    StatusCode::OK
}

pub async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(UserProfile::from(&user))
}

fn set_auth_cookie(cookies: &Cookies, token: &str) {
    let mut cookie = Cookie::new(AUTH_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(Duration::days(TOKEN_TTL_DAYS));
    cookies.add(cookie);
}
