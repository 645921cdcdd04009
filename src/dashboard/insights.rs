//! Ranked category breakdowns of a period's income and spending.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{CategoryId, TransactionType};

use super::aggregation::CategoryTotals;

/// One category's share of a period total, before display enrichment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    /// The category the share belongs to.
    pub category_id: CategoryId,

    /// The category's sub-total of the ranked type.
    pub amount: f64,

    /// The sub-total as a share of the period total, 0 when the period
    /// total is not positive.
    pub percentage: f64,

    /// Number of transactions filed under the category in the period.
    pub transaction_count: usize,
}

/// One row of the category insights card, with display details resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsight {
    /// The category the row describes.
    pub category_id: CategoryId,

    /// The category's display name, or a fallback when the lookup failed.
    pub name: String,

    /// The category's display colour.
    pub color: String,

    /// The category's icon identifier.
    pub icon: String,

    /// The category's sub-total of the ranked type.
    pub amount: f64,

    /// The sub-total as a share of the period total.
    pub percentage: f64,

    /// Number of transactions filed under the category in the period.
    pub transaction_count: usize,
}

/// Rank categories by their sub-total of the requested type.
///
/// Categories without a positive sub-total of that type are excluded, so an
/// expense-only category never appears in the income ranking. The result is
/// stably sorted descending by amount and truncated to `max_results`. The
/// income and expense rankings of a period are built independently from the
/// same per-category map.
pub fn rank_categories(
    by_category: &HashMap<CategoryId, CategoryTotals>,
    total_for_type: f64,
    kind: TransactionType,
    max_results: usize,
) -> Vec<CategoryShare> {
    let mut ranked: Vec<CategoryShare> = by_category
        .iter()
        .filter_map(|(&category_id, totals)| {
            let amount = totals.for_type(kind);

            if amount <= 0.0 {
                return None;
            }

            let percentage = if total_for_type > 0.0 {
                amount / total_for_type * 100.0
            } else {
                0.0
            };

            Some(CategoryShare {
                category_id,
                amount,
                percentage,
                transaction_count: totals.transaction_count,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    ranked.truncate(max_results);

    ranked
}
