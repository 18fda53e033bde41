pub mod api;
pub mod mock;
pub mod traits;

pub use api::ApiListingSource;
pub use mock::{seed_listings, MockListingSource};
pub use traits::{AvailabilitySource, ListingSource};
