//! Repository ports implemented by the storage layer.
//!
//! Repositories take entities with caller-supplied ids and do not enforce id
//! uniqueness; `update` replaces the first record with a matching id and
//! `delete` removes exactly one, returning `false` when the id is unknown.

use crate::domain::models::{
    appliance::Appliance, record::DailyRecord, settings::UserSettings, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email_or_phone(&self, email_or_phone: &str) -> Result<Option<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

#[async_trait]
pub trait ApplianceRepository: Send + Sync {
    async fn create(&self, appliance: &Appliance) -> Result<Appliance, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Appliance>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Appliance>, AppError>;
    async fn update(&self, appliance: &Appliance) -> Result<Appliance, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn create(&self, record: &DailyRecord) -> Result<DailyRecord, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<DailyRecord>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<DailyRecord>, AppError>;
    async fn list_by_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, AppError>;
    async fn update(&self, record: &DailyRecord) -> Result<DailyRecord, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<UserSettings>, AppError>;
    /// Exactly one row per user: inserts when absent, otherwise replaces the
    /// whole row.
    async fn upsert(&self, settings: &UserSettings) -> Result<UserSettings, AppError>;
}
