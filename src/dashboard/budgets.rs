//! Budget progress classification and the budget overview card.

use serde::Serialize;
use time::Date;

use crate::{
    AnalyticsConfig, Error,
    models::{Budget, BudgetId, FamilyId},
    stores::{BudgetStore, CategoryStore},
};

use super::{GENERAL_BUDGET_LABEL, UNCATEGORIZED_LABEL};

/// How urgently a budget's tier should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing needs attention.
    Info,
    /// Worth a look soon.
    Warning,
    /// Needs attention now.
    Danger,
}

/// The alert tier of a budget, derived from its spend percentage.
///
/// Tiers are mutually exclusive and exhaustive: every budget lands in
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    /// Spending is comfortably within the budget.
    Healthy,
    /// Spending is nearing the budget's limit.
    Warning,
    /// Spending is close enough to the limit to act on.
    Critical,
    /// The budget has been blown through.
    Exceeded,
}

impl AlertTier {
    /// The presentation severity for the tier.
    pub fn severity(&self) -> Severity {
        match self {
            AlertTier::Exceeded | AlertTier::Critical => Severity::Danger,
            AlertTier::Warning => Severity::Warning,
            AlertTier::Healthy => Severity::Info,
        }
    }
}

/// The progress of a single budget within its period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    /// The budget the row describes.
    pub budget_id: BudgetId,

    /// The budget's display name.
    pub name: String,

    /// The display label of the budget's category, or a fallback when the
    /// budget covers the whole family or the lookup failed.
    pub category_label: String,

    /// The allotted amount.
    pub amount: f64,

    /// The amount spent so far.
    pub spent: f64,

    /// spent / amount x 100, or 0 when the allotted amount is not positive.
    pub percentage: f64,

    /// amount - spent; negative once the budget is exceeded.
    pub remaining: f64,

    /// Whole days until the budget period ends, never negative.
    pub days_remaining: i64,

    /// The alert tier the percentage falls in.
    pub tier: AlertTier,
}

impl BudgetProgress {
    /// Whether the budget has been exceeded.
    pub fn is_over_budget(&self) -> bool {
        self.tier == AlertTier::Exceeded
    }

    /// Whether the budget is nearing its limit but not yet critical.
    pub fn is_near_limit(&self) -> bool {
        self.tier == AlertTier::Warning
    }
}

/// Classify one budget's progress as of `today`.
///
/// A budget with a zero allotted amount reads as 0% spent and healthy
/// regardless of its spend; the zero denominator is defined to yield 0
/// rather than treated as an error.
pub fn classify_budget(
    budget: &Budget,
    category_label: String,
    today: Date,
    config: &AnalyticsConfig,
) -> BudgetProgress {
    let percentage = if budget.amount > 0.0 {
        budget.spent / budget.amount * 100.0
    } else {
        0.0
    };

    // Evaluated in descending order; the first threshold met wins.
    let tier = if percentage >= config.exceeded_threshold {
        AlertTier::Exceeded
    } else if percentage >= config.critical_threshold {
        AlertTier::Critical
    } else if percentage >= config.warning_threshold {
        AlertTier::Warning
    } else {
        AlertTier::Healthy
    };

    let days_remaining = (budget.end_date - today).whole_days().max(0);

    BudgetProgress {
        budget_id: budget.id,
        name: budget.name.clone(),
        category_label,
        amount: budget.amount,
        spent: budget.spent,
        percentage,
        remaining: budget.amount - budget.spent,
        days_remaining,
        tier,
    }
}

/// The dashboard's budget overview card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverviewCard {
    /// Number of active budgets the family has.
    pub total_budgets: usize,

    /// Number of active budgets whose period contains today.
    pub running_budgets: usize,

    /// Number of budgets in the exceeded tier.
    pub over_budget: usize,

    /// Number of budgets nearing their limit (warning tier).
    pub near_limit: usize,

    /// The highest-percentage budgets, capped at
    /// [AnalyticsConfig::top_budget_count].
    pub top_budgets: Vec<BudgetProgress>,
}

impl BudgetOverviewCard {
    /// The documented default shown when the overview cannot be built.
    pub fn empty() -> Self {
        Self {
            total_budgets: 0,
            running_budgets: 0,
            over_budget: 0,
            near_limit: 0,
            top_budgets: Vec::new(),
        }
    }
}

/// Build the budget overview card for a family.
///
/// # Errors
/// Propagates the store error when the active-budget query fails. A failed
/// category lookup for a single budget falls back to a fixed label and
/// never aborts the card.
pub fn build_budget_overview(
    budgets: &dyn BudgetStore,
    categories: &dyn CategoryStore,
    family_id: FamilyId,
    today: Date,
    config: &AnalyticsConfig,
) -> Result<BudgetOverviewCard, Error> {
    let active = budgets
        .get_active(family_id, today)
        .inspect_err(|error| tracing::error!("could not get active budgets: {error}"))?;

    let mut progress: Vec<BudgetProgress> = active
        .iter()
        .map(|budget| {
            let label = budget_category_label(budget, categories);
            classify_budget(budget, label, today, config)
        })
        .collect();

    let total_budgets = progress.len();
    let running_budgets = active
        .iter()
        .filter(|budget| (budget.start_date..=budget.end_date).contains(&today))
        .count();
    let over_budget = progress.iter().filter(|p| p.is_over_budget()).count();
    let near_limit = progress.iter().filter(|p| p.is_near_limit()).count();

    // Stable sort: budgets with equal percentages keep their stored order.
    progress.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    progress.truncate(config.top_budget_count);

    Ok(BudgetOverviewCard {
        total_budgets,
        running_budgets,
        over_budget,
        near_limit,
        top_budgets: progress,
    })
}

/// Resolve a budget's display label from its category.
fn budget_category_label(budget: &Budget, categories: &dyn CategoryStore) -> String {
    let Some(category_id) = budget.category_id else {
        return GENERAL_BUDGET_LABEL.to_owned();
    };

    match categories.get(category_id) {
        Ok(category) => category.name,
        Err(error) => {
            tracing::warn!(
                "could not resolve category {category_id} for budget {}: {error}",
                budget.id
            );
            UNCATEGORIZED_LABEL.to_owned()
        }
    }
}
