use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    json_appliance_repo::JsonApplianceRepo, json_record_repo::JsonRecordRepo,
    json_settings_repo::JsonSettingsRepo, json_user_repo::JsonUserRepo,
};
use crate::infra::store::FlatStore;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let store = match FlatStore::open(&config.data_dir).await {
        Ok(store) => {
            info!("Initializing flat-file store at {}...", config.data_dir);
            Arc::new(store)
        }
        Err(err) => {
            warn!(
                "Data directory {} is unusable ({}), falling back to in-memory storage",
                config.data_dir, err
            );
            Arc::new(FlatStore::in_memory())
        }
    };

    state_with_store(config, store)
}

/// Wires every repository onto one shared store. Tests call this directly
/// with [`FlatStore::in_memory`] so each test owns its own data.
pub fn state_with_store(config: &Config, store: Arc<FlatStore>) -> AppState {
    AppState {
        config: config.clone(),
        user_repo: Arc::new(JsonUserRepo::new(store.clone())),
        appliance_repo: Arc::new(JsonApplianceRepo::new(store.clone())),
        record_repo: Arc::new(JsonRecordRepo::new(store.clone())),
        settings_repo: Arc::new(JsonSettingsRepo::new(store)),
        auth_service: Arc::new(AuthService::new(config)),
    }
}
