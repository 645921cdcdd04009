//! Hearthbook is a web app for tracking a household's budget and personal
//! finances.
//!
//! This crate is the financial analytics engine behind Hearthbook's
//! dashboard and budget-alerting views. It reads transactions, categories,
//! and budgets through the store traits in [stores] and reduces them into
//! the typed, request-scoped view models in [dashboard]; it keeps no state
//! between calls and persists nothing.
//!
//! The HTTP layer, templates, auth, and the stores' backing implementations
//! live in the host application.

#![warn(missing_docs)]

mod config;
mod currency;
pub mod dashboard;
mod error;
pub mod models;
pub mod stores;
mod timezone;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::AnalyticsConfig;
pub use currency::format_currency;
pub use error::Error;
pub use timezone::local_now;
