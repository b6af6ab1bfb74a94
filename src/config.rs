use std::env;

#[derive(Clone)]
pub struct Config {
    pub data_dir: String,
    pub port: u16,
    pub auth_secret: String, // HMAC key for session tokens
    pub auth_issuer: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            auth_secret: env::var("AUTH_SECRET").expect("AUTH_SECRET must be set (HMAC signing key)"),
            auth_issuer: env::var("AUTH_ISSUER").unwrap_or_else(|_| "https://api.ecoenergy.local".to_string()),
        }
    }
}
