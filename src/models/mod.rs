//! The domain models the analytics engine reads.
//!
//! These mirror the application's persisted records. The engine treats all
//! of them as read-only inputs: it never creates, mutates, or writes them.

mod budget;
mod category;
mod transaction;

pub use budget::{Budget, BudgetPeriod};
pub use category::Category;
pub use transaction::{Transaction, TransactionType};

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The ID of a transaction.
pub type TransactionId = DatabaseId;

/// The ID of a category.
pub type CategoryId = DatabaseId;

/// The ID of a budget.
pub type BudgetId = DatabaseId;

/// The ID of the family that owns a dataset.
///
/// Every query the engine issues is scoped to a single family; the engine
/// performs no authorization of its own.
pub type FamilyId = DatabaseId;
