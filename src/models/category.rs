//! The category model.

use serde::{Deserialize, Serialize};

use crate::models::{CategoryId, TransactionType};

/// A transaction category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,

    /// The display name.
    pub name: String,

    /// The display colour as a hex string, e.g. "#2563eb".
    pub color: String,

    /// The icon identifier used by the presentation layer.
    pub icon: String,

    /// Whether the category groups income or expense transactions.
    pub category_type: TransactionType,

    /// The parent category, used for hierarchical display only.
    ///
    /// The engine does not roll child sums up into parent categories.
    pub parent_id: Option<CategoryId>,
}
