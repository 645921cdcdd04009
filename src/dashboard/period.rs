//! Reporting period resolution.
//!
//! Turns a named or custom period filter into a concrete inclusive date
//! range, and computes the preceding range of identical length for
//! period-over-period comparisons. The engine aggregates by occurrence
//! date, so ranges are date-granular and one tick is one day.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::Error;

/// Selects the reporting period for the dashboard's period-scoped cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "period", rename_all = "snake_case")]
pub enum PeriodFilter {
    /// The calendar month containing today.
    CurrentMonth,
    /// The calendar month before the one containing today.
    LastMonth,
    /// The calendar year containing today.
    CurrentYear,
    /// An explicit date range chosen by the user.
    Custom {
        /// The first day of the period.
        start: Date,
        /// The last day of the period (inclusive).
        end: Date,
    },
}

impl Default for PeriodFilter {
    fn default() -> Self {
        Self::CurrentMonth
    }
}

impl PeriodFilter {
    /// Resolve the filter into an inclusive date range.
    ///
    /// Named periods resolve to calendar boundaries relative to `today`:
    /// the first day of the period through its last day.
    ///
    /// # Errors
    /// Returns [Error::InvalidDateRange] for a custom range whose end is
    /// before its start.
    pub fn resolve(&self, today: Date) -> Result<RangeInclusive<Date>, Error> {
        match *self {
            PeriodFilter::CurrentMonth => Ok(month_bounds(today)),
            PeriodFilter::LastMonth => {
                let end_of_last_month = today.replace_day(1).unwrap() - Duration::days(1);
                Ok(month_bounds(end_of_last_month))
            }
            PeriodFilter::CurrentYear => {
                let start = Date::from_calendar_date(today.year(), Month::January, 1).unwrap();
                let end = Date::from_calendar_date(today.year(), Month::December, 31).unwrap();
                Ok(start..=end)
            }
            PeriodFilter::Custom { start, end } => {
                if end < start {
                    Err(Error::InvalidDateRange { start, end })
                } else {
                    Ok(start..=end)
                }
            }
        }
    }
}

/// The calendar month containing `date`, as an inclusive range.
fn month_bounds(date: Date) -> RangeInclusive<Date> {
    let start = date.replace_day(1).unwrap();

    let next_month = match start.month().next() {
        Month::January => Date::from_calendar_date(start.year() + 1, Month::January, 1),
        month => Date::from_calendar_date(start.year(), month, 1),
    }
    .unwrap();

    start..=next_month - Duration::days(1)
}

/// Compute the period of identical length immediately before `range`.
///
/// The previous period ends the day before `range` starts and spans the
/// same number of days. This holds for irregular custom lengths too, so the
/// "previous month" of a 31-day month is the 31 days before it rather than
/// a calendar month.
pub fn previous_period(range: &RangeInclusive<Date>) -> RangeInclusive<Date> {
    let length = *range.end() - *range.start();
    let previous_end = *range.start() - Duration::days(1);
    let previous_start = previous_end - length;

    previous_start..=previous_end
}
