use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::UpdateSettingsRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::settings::UserSettings;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Returns the stored settings, or the default tariff without persisting a
/// row. A user who never saved a tariff keeps getting the default until
/// they do.
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let settings = state
        .settings_repo
        .find_by_user(&user.id)
        .await?
        .unwrap_or_else(|| UserSettings::default_for(user.id.clone()));

    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tariff = match payload.tariff {
        Some(t) if t >= 0.0 => t,
        _ => return Err(AppError::Validation("Invalid tariff".into())),
    };

    let settings = state
        .settings_repo
        .upsert(&UserSettings { user_id: user.id, tariff })
        .await?;

    info!("Updated tariff to {} for user {}", settings.tariff, settings.user_id);
    Ok(Json(settings))
}
