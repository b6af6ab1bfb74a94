use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::report::{PeriodGroup, ReportPeriod};
use crate::domain::models::user::User;

/// Full account view for the profile page. Unlike [`UserProfile`] it carries
/// the registration timestamp; the password hash never leaves the server.
///
/// [`UserProfile`]: crate::domain::models::auth::UserProfile
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            photo_url: user.photo_url.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBreakdownResponse {
    pub month: String,
    pub month_number: u32,
    pub year: i32,
    pub period: ReportPeriod,
    pub groups: Vec<PeriodGroup>,
}
