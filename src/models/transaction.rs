//! The transaction model and its income/expense partition.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::models::{CategoryId, FamilyId, TransactionId};

/// Whether a transaction adds to or subtracts from the family's balance.
///
/// During aggregation every transaction contributes to exactly one of the
/// income or expense buckets, decided solely by this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into the family's accounts.
    Income,
    /// Money leaving the family's accounts.
    Expense,
}

/// A single income or expense record.
///
/// Amounts are stored non-negative; the direction comes from
/// [Transaction::transaction_type]. Immutable once fetched by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,

    /// The monetary amount, always non-negative.
    pub amount: f64,

    /// Whether this is income or an expense.
    pub transaction_type: TransactionType,

    /// The category the transaction was filed under.
    pub category_id: CategoryId,

    /// The family that owns the transaction.
    pub family_id: FamilyId,

    /// The date the transaction occurred.
    pub date: Date,

    /// When the record was created.
    pub created_at: OffsetDateTime,

    /// Free-form labels attached by the user.
    pub tags: Vec<String>,
}
