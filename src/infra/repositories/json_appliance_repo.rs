use std::sync::Arc;

use crate::domain::{models::appliance::Appliance, ports::ApplianceRepository};
use crate::error::AppError;
use crate::infra::store::FlatStore;
use async_trait::async_trait;

const COLLECTION: &str = "appliances";

pub struct JsonApplianceRepo {
    store: Arc<FlatStore>,
}

impl JsonApplianceRepo {
    pub fn new(store: Arc<FlatStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ApplianceRepository for JsonApplianceRepo {
    async fn create(&self, appliance: &Appliance) -> Result<Appliance, AppError> {
        let mut appliances: Vec<Appliance> = self.store.read_all(COLLECTION).await?;
        appliances.push(appliance.clone());
        self.store.write_all(COLLECTION, &appliances).await?;
        Ok(appliance.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appliance>, AppError> {
        let appliances: Vec<Appliance> = self.store.read_all(COLLECTION).await?;
        Ok(appliances.into_iter().find(|a| a.id == id))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Appliance>, AppError> {
        let appliances: Vec<Appliance> = self.store.read_all(COLLECTION).await?;
        Ok(appliances.into_iter().filter(|a| a.user_id == user_id).collect())
    }

    async fn update(&self, appliance: &Appliance) -> Result<Appliance, AppError> {
        let mut appliances: Vec<Appliance> = self.store.read_all(COLLECTION).await?;
        let slot = appliances
            .iter_mut()
            .find(|a| a.id == appliance.id)
            .ok_or(AppError::NotFound("Appliance not found".to_string()))?;
        *slot = appliance.clone();
        self.store.write_all(COLLECTION, &appliances).await?;
        Ok(appliance.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut appliances: Vec<Appliance> = self.store.read_all(COLLECTION).await?;
        let Some(pos) = appliances.iter().position(|a| a.id == id) else {
            return Ok(false);
        };
        appliances.remove(pos);
        self.store.write_all(COLLECTION, &appliances).await?;
        Ok(true)
    }
}
