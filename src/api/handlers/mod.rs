pub mod appliance;
pub mod auth;
pub mod health;
pub mod profile;
pub mod record;
pub mod report;
pub mod settings;
