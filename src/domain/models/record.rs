use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged interval of appliance operation on a calendar day.
///
/// `appliance_id` is a soft reference: deleting the appliance does not
/// cascade here, so a record may outlive the appliance it points at.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: String,
    pub user_id: String,
    pub appliance_id: String,
    pub date: NaiveDate,
    pub hours_used: f64,
    pub created_at: DateTime<Utc>,
}

impl DailyRecord {
    pub fn new(user_id: String, appliance_id: String, date: NaiveDate, hours_used: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            appliance_id,
            date,
            hours_used,
            created_at: Utc::now(),
        }
    }
}
