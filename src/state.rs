use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    ApplianceRepository, RecordRepository, SettingsRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub appliance_repo: Arc<dyn ApplianceRepository>,
    pub record_repo: Arc<dyn RecordRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub auth_service: Arc<AuthService>,
}
