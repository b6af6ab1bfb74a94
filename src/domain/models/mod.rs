pub mod appliance;
pub mod auth;
pub mod record;
pub mod report;
pub mod settings;
pub mod user;
