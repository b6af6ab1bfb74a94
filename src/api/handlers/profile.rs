use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::{ChangePasswordRequest, UpdateProfileRequest};
use crate::api::dtos::responses::ProfileResponse;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2, PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::info;

pub async fn get_profile(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(ProfileResponse::from(&user))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(mut user): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    // A name that is sent must not be blank; an omitted one is left as is.
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be blank".into()));
        }
    }

    if let Some(val) = payload.name { user.name = val; }
    if let Some(val) = payload.email { user.email = val; }
    if let Some(val) = payload.phone { user.phone = val; }
    if let Some(val) = payload.photo_url { user.photo_url = Some(val); }

    let updated = state.user_repo.update(&user).await?;

    info!("Updated profile for user {}", updated.id);
    Ok(Json(ProfileResponse::from(&updated)))
}

pub async fn update_password(
    State(state): State<Arc<AppState>>,
    AuthUser(mut user): AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let current_password = payload.current_password.unwrap_or_default();
    let new_password = payload.new_password.unwrap_or_default();

    if current_password.is_empty() || new_password.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default()
        .verify_password(current_password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Validation("Current password is incorrect".into()))?;

    if new_password.len() < 6 {
        return Err(AppError::Validation("New password must be at least 6 characters".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(new_password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    user.password_hash = password_hash;
    state.user_repo.update(&user).await?;

    info!("Password changed for user {}", user.id);
    Ok(Json(serde_json::json!({"status": "updated"})))
}
