use std::sync::Arc;

use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use crate::infra::store::FlatStore;
use async_trait::async_trait;

const COLLECTION: &str = "users";

pub struct JsonUserRepo {
    store: Arc<FlatStore>,
}

impl JsonUserRepo {
    pub fn new(store: Arc<FlatStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for JsonUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let mut users: Vec<User> = self.store.read_all(COLLECTION).await?;
        users.push(user.clone());
        self.store.write_all(COLLECTION, &users).await?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users: Vec<User> = self.store.read_all(COLLECTION).await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn find_by_email_or_phone(&self, email_or_phone: &str) -> Result<Option<User>, AppError> {
        let users: Vec<User> = self.store.read_all(COLLECTION).await?;
        Ok(users
            .into_iter()
            .find(|u| u.email == email_or_phone || u.phone == email_or_phone))
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let mut users: Vec<User> = self.store.read_all(COLLECTION).await?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AppError::NotFound("User not found".to_string()))?;
        *slot = user.clone();
        self.store.write_all(COLLECTION, &users).await?;
        Ok(user.clone())
    }
}
