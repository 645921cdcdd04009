//! Configuration for the analytics engine.
//!
//! Every threshold and list cap the dashboard calculations use lives here,
//! so the alert tier ordering and truncation limits can be audited in one
//! place instead of being scattered through the modules that apply them.

use time::Duration;

/// The thresholds and list caps used by the dashboard builders.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Spend percentage at or above which a budget counts as exceeded.
    pub exceeded_threshold: f64,

    /// Spend percentage at or above which a budget counts as critical.
    pub critical_threshold: f64,

    /// Spend percentage at or above which a budget is nearing its limit.
    pub warning_threshold: f64,

    /// Maximum number of budgets shown in the overview card.
    pub top_budget_count: usize,

    /// Maximum number of categories in each insight ranking.
    pub max_category_insights: usize,

    /// Maximum number of transactions shown in the recent activity card.
    pub recent_activity_count: usize,

    /// Upper bound on rows fetched by a single period query.
    ///
    /// Large enough to cover realistic per-period volume for one family
    /// while bounding the memory a single request can use.
    pub transaction_query_limit: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            exceeded_threshold: 100.0,
            critical_threshold: 90.0,
            warning_threshold: 80.0,
            top_budget_count: 5,
            max_category_insights: 5,
            recent_activity_count: 8,
            transaction_query_limit: 10_000,
        }
    }
}

/// Upper bound of the "just now" bucket for relative timestamps.
///
/// The buckets below are evaluated in ascending order; the first one an age
/// falls under wins.
pub(crate) const JUST_NOW_LIMIT: Duration = Duration::minutes(1);

/// Upper bound of the "N minutes ago" bucket.
pub(crate) const MINUTES_LIMIT: Duration = Duration::hours(1);

/// Upper bound of the "N hours ago" bucket.
pub(crate) const HOURS_LIMIT: Duration = Duration::hours(24);

/// Upper bound of the "N days ago" bucket.
pub(crate) const DAYS_LIMIT: Duration = Duration::days(7);

/// Upper bound of the "N weeks ago" bucket; anything older shows its
/// calendar date instead of a relative phrase.
pub(crate) const WEEKS_LIMIT: Duration = Duration::days(30);
