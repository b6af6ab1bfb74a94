use chrono::NaiveDate;
use serde::Serialize;

/// A daily record joined with its appliance's power rating, the unit the
/// aggregation engine works on. Records whose appliance was deleted carry
/// `power_watts: 0.0` so they still count without contributing energy.
#[derive(Debug, Clone)]
pub struct UsageSample {
    pub power_watts: f64,
    pub hours: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Consumption and cost totals for one calendar month. Derived, never
/// persisted; months without records still get a report with zeroed totals.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    pub month: String,
    pub month_number: u32,
    pub year: i32,
    pub total_consumption: f64,
    pub total_cost: f64,
    pub records_count: usize,
}

/// One bucket of a month breakdown: a single day, a "Semana N" slice, or the
/// whole month, depending on the requested period.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodGroup {
    pub label: String,
    pub total_consumption: f64,
    pub total_cost: f64,
    pub records_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsumptionLevel {
    NoUsage,
    Low,
    Moderate,
    High,
    Critical,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub period: ReportPeriod,
    pub total_consumption: f64,
    pub total_cost: f64,
    pub records_count: usize,
    pub level: ConsumptionLevel,
}
