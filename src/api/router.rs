use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{appliance, auth, health, profile, record, report, settings};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))

        // Appliances
        .route("/api/v1/appliances", get(appliance::list_appliances).post(appliance::create_appliance))
        .route("/api/v1/appliances/{id}", put(appliance::update_appliance).delete(appliance::delete_appliance))

        // Daily usage records
        .route("/api/v1/records", get(record::list_records).post(record::create_record))
        .route("/api/v1/records/{id}", put(record::update_record).delete(record::delete_record))

        // Settings
        .route("/api/v1/settings", get(settings::get_settings).put(settings::update_settings))

        // Profile
        .route("/api/v1/user/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/api/v1/user/password", put(profile::update_password))

        // Reports
        .route("/api/v1/reports/monthly", get(report::get_monthly_reports))
        .route("/api/v1/reports/monthly/{month}", get(report::get_month_breakdown))
        .route("/api/v1/reports/summary", get(report::get_usage_summary))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
