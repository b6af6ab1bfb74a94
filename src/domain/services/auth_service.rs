use crate::config::Config;
use crate::domain::models::auth::Claims;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Session lifetime. The auth cookie's max-age mirrors this.
pub const TOKEN_TTL_DAYS: i64 = 7;

pub struct AuthService {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            issuer: config.auth_issuer.clone(),
            encoding_key: EncodingKey::from_secret(config.auth_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.auth_secret.as_bytes()),
        }
    }

    /// Issues the opaque session token for a user: HMAC-signed claims with an
    /// explicit expiry of [`TOKEN_TTL_DAYS`] from now.
    pub fn issue_token(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Token encoding failed: {}", e);
            AppError::Internal
        })
    }

    /// Checks signature, expiry and issuer. Every failure mode collapses into
    /// `Unauthorized`, so callers cannot tell a forged token from a stale one.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}
