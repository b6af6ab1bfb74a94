use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::responses::MonthBreakdownResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::report::{ReportPeriod, UsageSample};
use crate::domain::models::settings::DEFAULT_TARIFF;
use crate::domain::services::report;
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Datelike, Utc};
use std::collections::HashMap;
use std::sync::Arc;

pub async fn get_monthly_reports(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let year = parse_year(&params)?;

    let samples = usage_samples(&state, &user.id).await?;
    let tariff = tariff_for(&state, &user.id).await?;

    Ok(Json(report::monthly_overview(&samples, tariff, year)))
}

pub async fn get_month_breakdown(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(month): Path<u32>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation("Month must be between 1 and 12".into()));
    }

    let year = parse_year(&params)?;
    let period = parse_period(&params)?;

    let samples = usage_samples(&state, &user.id).await?;
    let tariff = tariff_for(&state, &user.id).await?;
    let groups = report::month_breakdown(&samples, tariff, year, month, period);

    Ok(Json(MonthBreakdownResponse {
        month: report::MONTH_NAMES[month as usize - 1].to_string(),
        month_number: month,
        year,
        period,
        groups,
    }))
}

pub async fn get_usage_summary(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let period = parse_period(&params)?;

    let samples = usage_samples(&state, &user.id).await?;
    let tariff = tariff_for(&state, &user.id).await?;

    let summary = report::usage_summary(&samples, tariff, period, Utc::now().date_naive());
    Ok(Json(summary))
}

/// Joins the caller's records with their appliances' power ratings. A record
/// whose appliance was deleted still shows up, rated at 0 W, so counts stay
/// honest even when the energy term is gone.
async fn usage_samples(state: &AppState, user_id: &str) -> Result<Vec<UsageSample>, AppError> {
    let appliances = state.appliance_repo.list_by_user(user_id).await?;
    let power_by_id: HashMap<String, f64> = appliances
        .into_iter()
        .map(|a| (a.id, a.power_watts))
        .collect();

    let records = state.record_repo.list_by_user(user_id).await?;
    Ok(records
        .into_iter()
        .map(|r| UsageSample {
            power_watts: power_by_id.get(&r.appliance_id).copied().unwrap_or(0.0),
            hours: r.hours_used,
            date: r.date,
        })
        .collect())
}

async fn tariff_for(state: &AppState, user_id: &str) -> Result<f64, AppError> {
    Ok(state
        .settings_repo
        .find_by_user(user_id)
        .await?
        .map(|s| s.tariff)
        .unwrap_or(DEFAULT_TARIFF))
}

fn parse_year(params: &HashMap<String, String>) -> Result<i32, AppError> {
    match params.get("year") {
        Some(raw) => raw.parse().map_err(|_| AppError::Validation("Invalid year".into())),
        None => Ok(Utc::now().year()),
    }
}

fn parse_period(params: &HashMap<String, String>) -> Result<ReportPeriod, AppError> {
    match params.get("period") {
        Some(raw) => ReportPeriod::parse(raw)
            .ok_or_else(|| AppError::Validation("Period must be daily, weekly or monthly".into())),
        None => Ok(ReportPeriod::Monthly),
    }
}
