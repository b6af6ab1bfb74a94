use serde::{Deserialize, Serialize};

/// Tariff applied when a user has never saved settings, in currency per kWh.
pub const DEFAULT_TARIFF: f64 = 0.85;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub user_id: String,
    pub tariff: f64,
}

impl UserSettings {
    /// Settings handed out when no row is stored. Not persisted until the
    /// user saves a tariff of their own.
    pub fn default_for(user_id: String) -> Self {
        Self {
            user_id,
            tariff: DEFAULT_TARIFF,
        }
    }
}
