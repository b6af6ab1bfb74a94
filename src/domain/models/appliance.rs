use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub power_watts: f64,
    pub created_at: DateTime<Utc>,
}

impl Appliance {
    pub fn new(user_id: String, name: String, power_watts: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            power_watts,
            created_at: Utc::now(),
        }
    }
}
