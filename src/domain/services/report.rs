use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::models::report::{
    ConsumptionLevel, MonthReport, PeriodGroup, ReportPeriod, UsageSample, UsageSummary,
};

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Energy drawn by one usage interval, in kWh. Inputs are summed as given;
/// zero or negative power/hours pass straight through into the totals.
pub fn kwh(power_watts: f64, hours: f64) -> f64 {
    power_watts * hours / 1000.0
}

/// Twelve reports, one per month of `year`, in calendar order. Months with
/// no matching records still appear, with zeroed totals and count.
pub fn monthly_overview(samples: &[UsageSample], tariff: f64, year: i32) -> Vec<MonthReport> {
    (1..=12u32)
        .map(|month| {
            let mut total = 0.0;
            let mut count = 0;
            for sample in samples {
                if sample.date.year() == year && sample.date.month() == month {
                    total += kwh(sample.power_watts, sample.hours);
                    count += 1;
                }
            }
            MonthReport {
                month: MONTH_NAMES[month as usize - 1].to_string(),
                month_number: month,
                year,
                total_consumption: total,
                total_cost: total * tariff,
                records_count: count,
            }
        })
        .collect()
}

/// Seven-day bucket counted from the 1st of the month: days 1-7 are week 1,
/// 8-14 week 2, and so on. Not ISO weeks: week 5 holds at most three days.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Buckets one month's records by the requested period: per calendar day,
/// per "Semana N" slice, or the whole month as a single "Mês Completo"
/// group. Groups come back sorted by label, so days are chronological and
/// weeks run Semana 1 through Semana 5.
pub fn month_breakdown(
    samples: &[UsageSample],
    tariff: f64,
    year: i32,
    month: u32,
    period: ReportPeriod,
) -> Vec<PeriodGroup> {
    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for sample in samples {
        if sample.date.year() != year || sample.date.month() != month {
            continue;
        }
        let label = match period {
            ReportPeriod::Daily => sample.date.to_string(),
            ReportPeriod::Weekly => format!("Semana {}", week_of_month(sample.date)),
            ReportPeriod::Monthly => "Mês Completo".to_string(),
        };
        let entry = groups.entry(label).or_insert((0.0, 0));
        entry.0 += kwh(sample.power_watts, sample.hours);
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, (total, count))| PeriodGroup {
            label,
            total_consumption: total,
            total_cost: total * tariff,
            records_count: count,
        })
        .collect()
}

/// Rolling dashboard totals: today's records, the last seven days, or every
/// record, plus the advice tier those totals land in. `today` is passed in
/// so the whole engine stays a pure function of its inputs.
pub fn usage_summary(
    samples: &[UsageSample],
    tariff: f64,
    period: ReportPeriod,
    today: NaiveDate,
) -> UsageSummary {
    let week_ago = today - Duration::days(7);
    let mut total = 0.0;
    let mut count = 0;

    for sample in samples {
        let in_window = match period {
            ReportPeriod::Daily => sample.date == today,
            ReportPeriod::Weekly => sample.date >= week_ago && sample.date <= today,
            ReportPeriod::Monthly => true,
        };
        if in_window {
            total += kwh(sample.power_watts, sample.hours);
            count += 1;
        }
    }

    UsageSummary {
        period,
        total_consumption: total,
        total_cost: total * tariff,
        records_count: count,
        level: consumption_level(total),
    }
}

/// Advice tier for a consumption total (kWh over the selected window).
pub fn consumption_level(total_kwh: f64) -> ConsumptionLevel {
    if total_kwh == 0.0 {
        ConsumptionLevel::NoUsage
    } else if total_kwh < 50.0 {
        ConsumptionLevel::Low
    } else if total_kwh < 150.0 {
        ConsumptionLevel::Moderate
    } else if total_kwh < 300.0 {
        ConsumptionLevel::High
    } else {
        ConsumptionLevel::Critical
    }
}
