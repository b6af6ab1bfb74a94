use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateApplianceRequest, UpdateApplianceRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::appliance::Appliance;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_appliances(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let appliances = state.appliance_repo.list_by_user(&user.id).await?;
    Ok(Json(appliances))
}

pub async fn create_appliance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateApplianceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.unwrap_or_default();
    // A 0 W rating counts as missing here.
    let power_watts = payload.power_watts.unwrap_or(0.0);

    if name.trim().is_empty() || power_watts == 0.0 {
        return Err(AppError::Validation("Name and power rating are required".into()));
    }

    let appliance = Appliance::new(user.id, name, power_watts);
    let created = state.appliance_repo.create(&appliance).await?;

    info!("Created appliance: {} ({} W)", created.id, created.power_watts);
    Ok(Json(created))
}

pub async fn update_appliance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateApplianceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut appliance = state
        .appliance_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Appliance not found".into()))?;

    // Someone else's appliance looks exactly like a missing one.
    if appliance.user_id != user.id {
        return Err(AppError::NotFound("Appliance not found".into()));
    }

    if let Some(val) = payload.name { appliance.name = val; }
    if let Some(val) = payload.power_watts { appliance.power_watts = val; }

    let updated = state.appliance_repo.update(&appliance).await?;
    info!("Updated appliance {}", id);
    Ok(Json(updated))
}

pub async fn delete_appliance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let appliance = state
        .appliance_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Appliance not found".into()))?;

    if appliance.user_id != user.id {
        return Err(AppError::NotFound("Appliance not found".into()));
    }

    // Daily records referencing this appliance are left in place; reports
    // treat them as 0 W contributions.
    state.appliance_repo.delete(&id).await?;

    info!("Deleted appliance {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
