//! Defines the engine level error type.

use time::Date;

/// The errors that may occur while building analytics view models.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A custom reporting period was supplied with its end before its start.
    ///
    /// Callers should surface this to the user as a validation failure. The
    /// range is never silently replaced with a default period.
    #[error("invalid custom period: {end} is before {start}")]
    InvalidDateRange {
        /// The first day of the requested period.
        start: Date,
        /// The last day of the requested period.
        end: Date,
    },

    /// The requested resource could not be found.
    ///
    /// Internally, this error may occur when a store lookup returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unexpected failure in one of the backing stores.
    ///
    /// Store implementations should pass a short description of the
    /// underlying failure for the server logs.
    #[error("a store query failed: {0}")]
    Store(String),

    /// An error occurred while getting the local time from a canonical
    /// timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}
