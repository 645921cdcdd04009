//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryId},
};

/// Retrieves transaction categories.
pub trait CategoryStore {
    /// Get a category by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no category has the given ID, or
    /// [Error::Store] when the underlying query fails.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;
}
