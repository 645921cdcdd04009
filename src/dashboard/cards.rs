//! Typed dashboard cards and their builders.
//!
//! Each card is a read-only view model built from fresh store reads and
//! discarded with the response. The full dashboard build constructs every
//! card independently: a primary store failure in one card substitutes that
//! card's documented `empty()` value instead of blanking the others.

use std::ops::RangeInclusive;

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::{
    AnalyticsConfig, Error,
    models::{FamilyId, TransactionType},
    stores::{BudgetStore, CategoryStore, TransactionStore},
    timezone::local_now,
};

use super::{
    UNCATEGORIZED_LABEL,
    activity::{RecentActivityCard, build_recent_activity},
    aggregation::{PeriodTotals, aggregate_period, compare_periods},
    budgets::{BudgetOverviewCard, build_budget_overview},
    forecast::{Forecast, period_length_days, project_period_end},
    insights::{CategoryInsight, rank_categories},
    period::{PeriodFilter, previous_period},
};

/// The period summary card: totals, net, and period-over-period changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The first day of the summarised period.
    pub period_start: Date,

    /// The last day of the summarised period (inclusive).
    pub period_end: Date,

    /// Sum of all income in the period.
    pub total_income: f64,

    /// Sum of all expenses in the period.
    pub total_expense: f64,

    /// total_income - total_expense.
    pub net: f64,

    /// Number of transactions in the period.
    pub transaction_count: usize,

    /// Income change from the previous period as a percentage; 0 when no
    /// previous data exists.
    pub income_change: f64,

    /// Expense change from the previous period as a percentage; 0 when no
    /// previous data exists.
    pub expense_change: f64,

    /// Whether a previous period with data existed.
    pub has_previous_data: bool,
}

impl MonthlySummary {
    /// The documented default shown when the summary cannot be built.
    pub fn empty(period: &RangeInclusive<Date>) -> Self {
        Self {
            period_start: *period.start(),
            period_end: *period.end(),
            total_income: 0.0,
            total_expense: 0.0,
            net: 0.0,
            transaction_count: 0,
            income_change: 0.0,
            expense_change: 0.0,
            has_previous_data: false,
        }
    }
}

/// Build the period summary card for a family.
///
/// # Errors
/// Returns [Error::InvalidDateRange] for an invalid custom filter and
/// propagates the store error when the current period's range query fails.
/// A failed previous-period query degrades to "no previous data" instead of
/// failing the card.
pub fn build_monthly_summary(
    transactions: &dyn TransactionStore,
    family_id: FamilyId,
    filter: &PeriodFilter,
    today: Date,
    config: &AnalyticsConfig,
) -> Result<MonthlySummary, Error> {
    let period = filter.resolve(today)?;

    let current = aggregate_period(
        transactions,
        family_id,
        period.clone(),
        config.transaction_query_limit,
    )
    .inspect_err(|error| tracing::error!("could not aggregate the current period: {error}"))?;

    let previous = match aggregate_period(
        transactions,
        family_id,
        previous_period(&period),
        config.transaction_query_limit,
    ) {
        Ok(previous) => Some(previous),
        Err(error) => {
            tracing::warn!("could not aggregate the previous period, comparing without it: {error}");
            None
        }
    };

    let comparison = compare_periods(&current, previous.as_ref());

    Ok(MonthlySummary {
        period_start: *period.start(),
        period_end: *period.end(),
        total_income: current.income,
        total_expense: current.expense,
        net: current.net(),
        transaction_count: current.transaction_count,
        income_change: comparison.income_change,
        expense_change: comparison.expense_change,
        has_previous_data: comparison.has_previous_data,
    })
}

/// Ranked income and expense category breakdowns for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsightsCard {
    /// The first day of the ranked period.
    pub period_start: Date,

    /// The last day of the ranked period (inclusive).
    pub period_end: Date,

    /// Top categories by income received.
    pub income: Vec<CategoryInsight>,

    /// Top categories by amount spent.
    pub expense: Vec<CategoryInsight>,
}

impl CategoryInsightsCard {
    /// The documented default shown when the insights cannot be built.
    pub fn empty(period: &RangeInclusive<Date>) -> Self {
        Self {
            period_start: *period.start(),
            period_end: *period.end(),
            income: Vec::new(),
            expense: Vec::new(),
        }
    }
}

/// Build the category insights card for a family.
///
/// # Errors
/// Returns [Error::InvalidDateRange] for an invalid custom filter and
/// propagates the store error when the range query fails. Failed category
/// lookups fall back per item.
pub fn build_category_insights(
    transactions: &dyn TransactionStore,
    categories: &dyn CategoryStore,
    family_id: FamilyId,
    filter: &PeriodFilter,
    today: Date,
    config: &AnalyticsConfig,
) -> Result<CategoryInsightsCard, Error> {
    let period = filter.resolve(today)?;

    let totals = aggregate_period(
        transactions,
        family_id,
        period.clone(),
        config.transaction_query_limit,
    )
    .inspect_err(|error| tracing::error!("could not aggregate category totals: {error}"))?;

    Ok(CategoryInsightsCard {
        period_start: *period.start(),
        period_end: *period.end(),
        income: insight_list(&totals, TransactionType::Income, categories, config),
        expense: insight_list(&totals, TransactionType::Expense, categories, config),
    })
}

/// Rank one type's categories and resolve their display details.
fn insight_list(
    totals: &PeriodTotals,
    kind: TransactionType,
    categories: &dyn CategoryStore,
    config: &AnalyticsConfig,
) -> Vec<CategoryInsight> {
    rank_categories(
        &totals.by_category,
        totals.for_type(kind),
        kind,
        config.max_category_insights,
    )
    .into_iter()
    .map(|share| {
        let (name, color, icon) = match categories.get(share.category_id) {
            Ok(category) => (category.name, category.color, category.icon),
            Err(error) => {
                tracing::warn!("could not resolve category {}: {error}", share.category_id);
                (UNCATEGORIZED_LABEL.to_owned(), String::new(), String::new())
            }
        };

        CategoryInsight {
            category_id: share.category_id,
            name,
            color,
            icon,
            amount: share.amount,
            percentage: share.percentage,
            transaction_count: share.transaction_count,
        }
    })
    .collect()
}

/// Daily averages, savings rate, and the optional period-end forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedStatsCard {
    /// Average daily income over the full period.
    pub avg_income_per_day: f64,

    /// Average daily expenses over the full period.
    pub avg_expense_per_day: f64,

    /// net / income x 100, or 0 when the period had no income.
    pub savings_rate: f64,

    /// Present only while the period is still in progress with at least one
    /// day remaining.
    pub forecast: Option<Forecast>,
}

impl EnhancedStatsCard {
    /// The documented default shown when the stats cannot be built.
    pub fn empty() -> Self {
        Self {
            avg_income_per_day: 0.0,
            avg_expense_per_day: 0.0,
            savings_rate: 0.0,
            forecast: None,
        }
    }
}

/// Build the enhanced statistics card from an already-built summary.
///
/// Reuses the summary's totals so the averages describe exactly the window
/// the summary aggregated: the divisor is the full period length, not the
/// days elapsed so far.
///
/// # Errors
/// Returns [Error::InvalidDateRange] for an invalid custom filter.
pub fn build_enhanced_stats(
    filter: &PeriodFilter,
    summary: &MonthlySummary,
    today: Date,
) -> Result<EnhancedStatsCard, Error> {
    let period = filter.resolve(today)?;
    let length = period_length_days(&period) as f64;

    let avg_income_per_day = summary.total_income / length;
    let avg_expense_per_day = summary.total_expense / length;

    let savings_rate = if summary.total_income > 0.0 {
        summary.net / summary.total_income * 100.0
    } else {
        0.0
    };

    Ok(EnhancedStatsCard {
        avg_income_per_day,
        avg_expense_per_day,
        savings_rate,
        forecast: project_period_end(&period, today, avg_income_per_day, avg_expense_per_day),
    })
}

/// The full dashboard view model: five independently-built cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// The period summary card.
    pub summary: MonthlySummary,

    /// The budget overview card.
    pub budgets: BudgetOverviewCard,

    /// The category insights card.
    pub insights: CategoryInsightsCard,

    /// The recent activity card.
    pub activity: RecentActivityCard,

    /// The enhanced statistics card.
    pub stats: EnhancedStatsCard,
}

/// Build the whole dashboard for a family.
///
/// "Now" is resolved once from the configured timezone and shared by every
/// card, so the build is a pure function of the stores and the clock value.
///
/// # Errors
/// Returns [Error::InvalidTimezone] for a non-canonical timezone name and
/// [Error::InvalidDateRange] for an invalid custom filter; every
/// period-scoped card would otherwise be built against an invalid range.
/// Store failures do not surface here: see [build_dashboard_at].
pub fn build_dashboard(
    transactions: &dyn TransactionStore,
    categories: &dyn CategoryStore,
    budgets: &dyn BudgetStore,
    family_id: FamilyId,
    filter: &PeriodFilter,
    local_timezone: &str,
    config: &AnalyticsConfig,
) -> Result<DashboardView, Error> {
    let now = local_now(local_timezone)?;

    build_dashboard_at(
        transactions,
        categories,
        budgets,
        family_id,
        filter,
        now,
        config,
    )
}

/// [build_dashboard] with an explicit clock value, for callers that manage
/// their own timezone handling.
///
/// Cards are built independently: a store failure while building one card
/// logs the error and substitutes that card's `empty()` value rather than
/// failing the dashboard.
///
/// # Errors
/// Returns [Error::InvalidDateRange] for an invalid custom filter.
pub fn build_dashboard_at(
    transactions: &dyn TransactionStore,
    categories: &dyn CategoryStore,
    budgets: &dyn BudgetStore,
    family_id: FamilyId,
    filter: &PeriodFilter,
    now: OffsetDateTime,
    config: &AnalyticsConfig,
) -> Result<DashboardView, Error> {
    let today = now.date();

    // Validate the filter up front: an invalid custom range aborts the
    // whole build instead of rendering every card against a default period.
    let period = filter.resolve(today)?;

    let summary = build_monthly_summary(transactions, family_id, filter, today, config)
        .unwrap_or_else(|error| {
            tracing::error!("could not build the summary card: {error}");
            MonthlySummary::empty(&period)
        });

    let budget_overview = build_budget_overview(budgets, categories, family_id, today, config)
        .unwrap_or_else(|error| {
            tracing::error!("could not build the budget overview card: {error}");
            BudgetOverviewCard::empty()
        });

    let insights = build_category_insights(transactions, categories, family_id, filter, today, config)
        .unwrap_or_else(|error| {
            tracing::error!("could not build the category insights card: {error}");
            CategoryInsightsCard::empty(&period)
        });

    let activity = build_recent_activity(transactions, categories, family_id, now, config)
        .unwrap_or_else(|error| {
            tracing::error!("could not build the recent activity card: {error}");
            RecentActivityCard::empty()
        });

    let stats = build_enhanced_stats(filter, &summary, today).unwrap_or_else(|error| {
        tracing::error!("could not build the enhanced stats card: {error}");
        EnhancedStatsCard::empty()
    });

    Ok(DashboardView {
        summary,
        budgets: budget_overview,
        insights,
        activity,
        stats,
    })
}
