//! Dashboard analytics.
//!
//! Reduces a family's transactions and budgets into the read-only view
//! models behind the dashboard: the period summary, budget alerts, category
//! insights, recent activity, and the period-end forecast. Every build runs
//! once per request over fresh store reads; nothing is cached or shared
//! between requests.

mod activity;
mod aggregation;
mod budgets;
mod cards;
mod forecast;
mod insights;
mod period;

pub use activity::{RecentActivityCard, RecentActivityItem, build_recent_activity};
pub use aggregation::{
    CategoryTotals, PeriodComparison, PeriodTotals, aggregate_period, compare_periods,
};
pub use budgets::{
    AlertTier, BudgetOverviewCard, BudgetProgress, Severity, build_budget_overview, classify_budget,
};
pub use cards::{
    CategoryInsightsCard, DashboardView, EnhancedStatsCard, MonthlySummary,
    build_category_insights, build_dashboard, build_dashboard_at, build_enhanced_stats,
    build_monthly_summary,
};
pub use forecast::{Forecast, period_length_days, project_period_end};
pub use insights::{CategoryInsight, CategoryShare, rank_categories};
pub use period::{PeriodFilter, previous_period};

/// The label shown when a category lookup fails for a list item.
pub(crate) const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The label for budgets that cover the whole family rather than one
/// category.
pub(crate) const GENERAL_BUDGET_LABEL: &str = "General budget";
