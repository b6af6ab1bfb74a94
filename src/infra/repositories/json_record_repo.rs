use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{models::record::DailyRecord, ports::RecordRepository};
use crate::error::AppError;
use crate::infra::store::FlatStore;
use async_trait::async_trait;

const COLLECTION: &str = "records";

pub struct JsonRecordRepo {
    store: Arc<FlatStore>,
}

impl JsonRecordRepo {
    pub fn new(store: Arc<FlatStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecordRepository for JsonRecordRepo {
    async fn create(&self, record: &DailyRecord) -> Result<DailyRecord, AppError> {
        let mut records: Vec<DailyRecord> = self.store.read_all(COLLECTION).await?;
        records.push(record.clone());
        self.store.write_all(COLLECTION, &records).await?;
        Ok(record.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<DailyRecord>, AppError> {
        let records: Vec<DailyRecord> = self.store.read_all(COLLECTION).await?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<DailyRecord>, AppError> {
        let records: Vec<DailyRecord> = self.store.read_all(COLLECTION).await?;
        Ok(records.into_iter().filter(|r| r.user_id == user_id).collect())
    }

    async fn list_by_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, AppError> {
        let records: Vec<DailyRecord> = self.store.read_all(COLLECTION).await?;
        Ok(records
            .into_iter()
            .filter(|r| r.user_id == user_id && r.date >= start && r.date <= end)
            .collect())
    }

    async fn update(&self, record: &DailyRecord) -> Result<DailyRecord, AppError> {
        let mut records: Vec<DailyRecord> = self.store.read_all(COLLECTION).await?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(AppError::NotFound("Record not found".to_string()))?;
        *slot = record.clone();
        self.store.write_all(COLLECTION, &records).await?;
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut records: Vec<DailyRecord> = self.store.read_all(COLLECTION).await?;
        let Some(pos) = records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        records.remove(pos);
        self.store.write_all(COLLECTION, &records).await?;
        Ok(true)
    }
}
