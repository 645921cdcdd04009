//! The budget model.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::{BudgetId, CategoryId, FamilyId};

/// How often a budget resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Resets every week.
    Weekly,
    /// Resets every calendar month.
    Monthly,
    /// Resets every calendar year.
    Yearly,
    /// An explicit start/end window chosen by the user.
    Custom,
}

/// A spending limit over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget.
    pub id: BudgetId,

    /// The display name.
    pub name: String,

    /// The allotted amount.
    ///
    /// Expected to be positive, but the engine tolerates zero: such budgets
    /// classify as 0% spent.
    pub amount: f64,

    /// The cumulative amount spent against the budget so far.
    pub spent: f64,

    /// How often the budget resets.
    pub period: BudgetPeriod,

    /// The category the budget applies to.
    ///
    /// `None` means the budget covers the whole family's spending.
    pub category_id: Option<CategoryId>,

    /// The family that owns the budget.
    pub family_id: FamilyId,

    /// The first day of the budget's current period.
    pub start_date: Date,

    /// The last day of the budget's current period (inclusive).
    pub end_date: Date,

    /// Whether the budget is currently enabled.
    pub is_active: bool,
}
