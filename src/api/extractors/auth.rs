use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

/// Name of the session cookie. The same token is also accepted as a bearer
/// header, so API clients do not need a cookie jar.
pub const AUTH_COOKIE: &str = "auth-token";

/// The authenticated account behind the request. Verifies the session token
/// and resolves it to the stored user, so a token whose account has vanished
/// is rejected just like a forged one.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(parts) {
            Some(token) => token,
            None => {
                let cookies = parts.extensions.get::<Cookies>().ok_or(AppError::Internal)?;
                cookies
                    .get(AUTH_COOKIE)
                    .ok_or(AppError::Unauthorized)?
                    .value()
                    .to_string()
            }
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify_token(&token)?;

        let user = app_state
            .user_repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", &user.id);

        Ok(AuthUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let auth = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    auth.strip_prefix("Bearer ").map(|token| token.to_string())
}
