//! Single-pass reduction of raw transactions into period totals.
//!
//! One range query feeds the summary, the category insights, and the
//! forecast averages; per-category sub-totals are accumulated in the same
//! pass as the overall totals to avoid a second query.

use std::{collections::HashMap, ops::RangeInclusive};

use time::Date;

use crate::{
    Error,
    models::{CategoryId, FamilyId, TransactionType},
    stores::{TransactionQuery, TransactionStore},
};

/// Income and expense sub-totals for one category within a period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    /// Sum of income amounts filed under the category.
    pub income: f64,

    /// Sum of expense amounts filed under the category.
    pub expense: f64,

    /// Number of transactions filed under the category.
    pub transaction_count: usize,
}

impl CategoryTotals {
    /// The sub-total for the requested transaction type.
    pub fn for_type(&self, kind: TransactionType) -> f64 {
        match kind {
            TransactionType::Income => self.income,
            TransactionType::Expense => self.expense,
        }
    }
}

/// The reduction of one period's transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodTotals {
    /// Sum of all income amounts in the period.
    pub income: f64,

    /// Sum of all expense amounts in the period.
    pub expense: f64,

    /// Number of transactions in the period.
    pub transaction_count: usize,

    /// Per-category sub-totals, accumulated in the same pass as the totals.
    pub by_category: HashMap<CategoryId, CategoryTotals>,
}

impl PeriodTotals {
    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    /// The period total for the requested transaction type.
    pub fn for_type(&self, kind: TransactionType) -> f64 {
        match kind {
            TransactionType::Income => self.income,
            TransactionType::Expense => self.expense,
        }
    }
}

/// Fetch and reduce one period's transactions for a family.
///
/// Issues a single range query bounded by `limit` and partitions amounts
/// strictly by transaction type, so each transaction lands in exactly one
/// bucket.
///
/// # Errors
/// Propagates the store error when the range query fails. Totals are the
/// primary deliverable of every period-scoped card, so there is no
/// fallback here.
pub fn aggregate_period(
    store: &dyn TransactionStore,
    family_id: FamilyId,
    date_range: RangeInclusive<Date>,
    limit: u64,
) -> Result<PeriodTotals, Error> {
    let query = TransactionQuery {
        family_id,
        date_range: Some(date_range),
        limit: Some(limit),
        sort_created: None,
    };

    let transactions = store.get_query(&query)?;

    let mut totals = PeriodTotals::default();

    for transaction in &transactions {
        totals.transaction_count += 1;

        let category = totals
            .by_category
            .entry(transaction.category_id)
            .or_default();
        category.transaction_count += 1;

        match transaction.transaction_type {
            TransactionType::Income => {
                totals.income += transaction.amount;
                category.income += transaction.amount;
            }
            TransactionType::Expense => {
                totals.expense += transaction.amount;
                category.expense += transaction.amount;
            }
        }
    }

    Ok(totals)
}

/// Period-over-period change percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodComparison {
    /// Income change from the previous period, as a percentage.
    pub income_change: f64,

    /// Expense change from the previous period, as a percentage.
    pub expense_change: f64,

    /// Whether a previous period with data existed at all.
    ///
    /// Recorded as a fact rather than inferred from a zero sum: an empty or
    /// failed previous-period query forces both changes to 0, never -100%.
    pub has_previous_data: bool,
}

impl PeriodComparison {
    /// The comparison used when no previous period data exists.
    pub fn none() -> Self {
        Self {
            income_change: 0.0,
            expense_change: 0.0,
            has_previous_data: false,
        }
    }
}

/// Compare the current period's totals against the previous period's.
///
/// A `previous` of `None` or one holding zero transactions records "no
/// previous data". Otherwise each change percentage is guarded against a
/// zero previous value independently: a previous period with data but zero
/// income reports an income change of 0 regardless of current income, even
/// though the expense change is still computed.
pub fn compare_periods(current: &PeriodTotals, previous: Option<&PeriodTotals>) -> PeriodComparison {
    let previous = match previous {
        Some(previous) if previous.transaction_count > 0 => previous,
        _ => return PeriodComparison::none(),
    };

    PeriodComparison {
        income_change: percentage_change(current.income, previous.income),
        expense_change: percentage_change(current.expense, previous.expense),
        has_previous_data: true,
    }
}

fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}
