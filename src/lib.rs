//! Listing search and stay-date selection for a property marketplace.
//!
//! - [`search`]: filter/sort/limit over listing snapshots.
//! - [`calendar`]: check-in/check-out picker over bookable dates.
//! - [`sources`]: where listings and availability come from.

pub mod calendar;
pub mod error;
pub mod models;
pub mod search;
pub mod settings;
pub mod sources;

pub use error::FinderError;
pub use models::{Category, ListingsResponse, PropertyRecord};
