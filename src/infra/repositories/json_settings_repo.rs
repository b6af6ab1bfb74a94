use std::sync::Arc;

use crate::domain::{models::settings::UserSettings, ports::SettingsRepository};
use crate::error::AppError;
use crate::infra::store::FlatStore;
use async_trait::async_trait;

const COLLECTION: &str = "settings";

pub struct JsonSettingsRepo {
    store: Arc<FlatStore>,
}

impl JsonSettingsRepo {
    pub fn new(store: Arc<FlatStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepo {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<UserSettings>, AppError> {
        let settings: Vec<UserSettings> = self.store.read_all(COLLECTION).await?;
        Ok(settings.into_iter().find(|s| s.user_id == user_id))
    }

    async fn upsert(&self, settings: &UserSettings) -> Result<UserSettings, AppError> {
        let mut rows: Vec<UserSettings> = self.store.read_all(COLLECTION).await?;
        if let Some(slot) = rows.iter_mut().find(|s| s.user_id == settings.user_id) {
            *slot = settings.clone();
        } else {
            rows.push(settings.clone());
        }
        self.store.write_all(COLLECTION, &rows).await?;
        Ok(settings.clone())
    }
}
