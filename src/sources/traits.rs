use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can hand over the current set of listings
/// (static seed data, the marketplace API, ...).
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

/// Bookable dates per listing, as `yyyy-MM-dd` strings.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    async fn available_dates(&self, property_id: &str) -> Result<Vec<String>>;
}
