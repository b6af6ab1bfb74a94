use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateRecordRequest, UpdateRecordRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::record::DailyRecord;
use crate::error::AppError;
use crate::state::AppState;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

pub async fn list_records(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    // The range filter only applies when both bounds are present.
    let records = match (params.get("startDate"), params.get("endDate")) {
        (Some(start), Some(end)) => {
            let start = parse_date(start)?;
            let end = parse_date(end)?;
            state.record_repo.list_by_user_in_range(&user.id, start, end).await?
        }
        _ => state.record_repo.list_by_user(&user.id).await?,
    };

    Ok(Json(records))
}

pub async fn create_record(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let appliance_id = payload.appliance_id.unwrap_or_default();
    let date = payload.date.unwrap_or_default();

    // hoursUsed: 0 is a valid entry (appliance registered but unused), so
    // only a missing field is rejected.
    if appliance_id.trim().is_empty() || date.trim().is_empty() || payload.hours_used.is_none() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    let date = parse_date(&date)?;
    let hours_used = payload.hours_used.unwrap_or(0.0);

    let record = DailyRecord::new(user.id, appliance_id, date, hours_used);
    let created = state.record_repo.create(&record).await?;

    info!("Created record {} ({} h on {})", created.id, created.hours_used, created.date);
    Ok(Json(created))
}

pub async fn update_record(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRecordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut record = state
        .record_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Record not found".into()))?;

    if record.user_id != user.id {
        return Err(AppError::NotFound("Record not found".into()));
    }

    if let Some(val) = payload.appliance_id { record.appliance_id = val; }
    if let Some(val) = payload.date { record.date = parse_date(&val)?; }
    if let Some(val) = payload.hours_used { record.hours_used = val; }

    let updated = state.record_repo.update(&record).await?;
    info!("Updated record {}", id);
    Ok(Json(updated))
}

pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .record_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Record not found".into()))?;

    if record.user_id != user.id {
        return Err(AppError::NotFound("Record not found".into()));
    }

    state.record_repo.delete(&id).await?;

    info!("Deleted record {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format, expected YYYY-MM-DD".into()))
}
