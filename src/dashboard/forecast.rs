//! Linear projection of the period-end balance.

use std::ops::RangeInclusive;

use serde::Serialize;
use time::Date;

/// A projection of how the current period is likely to end, extrapolated
/// from the period's daily averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    /// Whole days left in the period; always positive when a forecast
    /// exists.
    pub days_remaining: i64,

    /// Income expected over the remaining days at the daily average.
    pub expected_income: f64,

    /// Expenses expected over the remaining days at the daily average.
    pub expected_expense: f64,

    /// expected_income - expected_expense.
    pub projected_balance: f64,
}

/// Project the period's end balance from its daily averages.
///
/// Returns `None` unless `today` lies strictly inside the period with at
/// least one day remaining: a period that has not started yet, ends today,
/// or has already ended has no forecast rather than a zero-valued one.
pub fn project_period_end(
    period: &RangeInclusive<Date>,
    today: Date,
    avg_income_per_day: f64,
    avg_expense_per_day: f64,
) -> Option<Forecast> {
    if today <= *period.start() || today >= *period.end() {
        return None;
    }

    let days_remaining = (*period.end() - today).whole_days();
    if days_remaining <= 0 {
        return None;
    }

    let expected_income = avg_income_per_day * days_remaining as f64;
    let expected_expense = avg_expense_per_day * days_remaining as f64;

    Some(Forecast {
        days_remaining,
        expected_income,
        expected_expense,
        projected_balance: expected_income - expected_expense,
    })
}

/// The number of days a period spans, inclusive of both endpoints.
///
/// Daily averages divide by the full period length so the projection
/// describes the same window the summary aggregated.
pub fn period_length_days(period: &RangeInclusive<Date>) -> i64 {
    (*period.end() - *period.start()).whole_days() + 1
}
