//! Defines the budget store trait.

use time::Date;

use crate::{
    Error,
    models::{Budget, FamilyId},
};

/// Retrieves the budgets the engine reports on.
pub trait BudgetStore {
    /// Get a family's active budgets as of the given date.
    ///
    /// # Errors
    /// Returns [Error::Store] when the underlying query fails.
    fn get_active(&self, family_id: FamilyId, as_of: Date) -> Result<Vec<Budget>, Error>;
}
