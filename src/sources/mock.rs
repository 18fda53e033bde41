use crate::calendar::AvailableDates;
use crate::models::{Category, PropertyRecord};
use crate::sources::traits::{AvailabilitySource, ListingSource};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, info};

/// How far ahead the mock calendar opens bookings.
const BOOKING_WINDOW_DAYS: i64 = 90;

/// In-memory listings for demos and tests.
pub struct MockListingSource {
    listings: Vec<PropertyRecord>,
    today: NaiveDate,
}

impl MockListingSource {
    /// Seeded listings; availability windows start at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_listings(seed_listings(), today)
    }

    pub fn with_listings(listings: Vec<PropertyRecord>, today: NaiveDate) -> Self {
        Self { listings, today }
    }

    /// Bookable days for a listing: the next 90 days, minus every listing's
    /// "blocked" weekday so calendars have gaps to render.
    fn availability_for(&self, listing: &PropertyRecord) -> AvailableDates {
        if !listing.available {
            return AvailableDates::default();
        }
        let blocked = listing.id.bytes().map(u32::from).sum::<u32>() % 7;
        let end = self.today + Duration::days(BOOKING_WINDOW_DAYS);
        AvailableDates::between(self.today, end)
            .iter()
            .filter(|d| (*d - self.today).num_days() % 7 != i64::from(blocked))
            .collect()
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn fetch_listings(&self) -> Result<Vec<PropertyRecord>> {
        info!("📋 Serving {} mock listings", self.listings.len());
        Ok(self.listings.clone())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl AvailabilitySource for MockListingSource {
    async fn available_dates(&self, property_id: &str) -> Result<Vec<String>> {
        let dates = self
            .listings
            .iter()
            .find(|p| p.id == property_id)
            .map(|p| self.availability_for(p))
            .unwrap_or_default();
        debug!("{} bookable days for {}", dates.len(), property_id);
        Ok(dates.to_iso_strings())
    }
}

fn created(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Typical marketplace listings across the three categories.
pub fn seed_listings() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            property_type: "Apartment".to_string(),
            title: "Serviced 3-bedroom apartment in Lekki".to_string(),
            description: "Fully serviced flat with 24/7 power, gym and pool. Close to the Lekki toll gate.".to_string(),
            location: "Lekki Phase 1".to_string(),
            city: "Lagos".to_string(),
            state: "Lagos".to_string(),
            price: 4_500_000.0,
            bedrooms: 3,
            bathrooms: 3,
            max_guests: 6,
            rating: 4.6,
            view_count: 1_240,
            amenities: tags(&["WiFi", "Parking", "Pool", "Gym", "Generator"]),
            images: tags(&["lekki-apartment/1.jpg", "lekki-apartment/2.jpg"]),
            featured: true,
            verified: true,
            created_at: created(2024, 3, 14),
            ..PropertyRecord::new("lekki-apartment", Category::Rent)
        },
        PropertyRecord {
            property_type: "Duplex".to_string(),
            title: "5-bedroom detached duplex".to_string(),
            description: "Newly built duplex with BQ, fitted kitchen and a large compound.".to_string(),
            location: "Maitama".to_string(),
            city: "Abuja".to_string(),
            state: "FCT".to_string(),
            price: 350_000_000.0,
            bedrooms: 5,
            bathrooms: 6,
            rating: 4.8,
            view_count: 3_410,
            amenities: tags(&["Parking", "Security", "Garden", "Generator"]),
            images: tags(&["maitama-duplex/1.jpg"]),
            featured: true,
            verified: true,
            created_at: created(2024, 2, 2),
            ..PropertyRecord::new("maitama-duplex", Category::Buy)
        },
        PropertyRecord {
            property_type: "Studio".to_string(),
            title: "Cosy studio by the beach".to_string(),
            description: "Short stay studio a few minutes from Eko Atlantic. Netflix, WiFi and fast check-in.".to_string(),
            location: "Victoria Island".to_string(),
            city: "Lagos".to_string(),
            state: "Lagos".to_string(),
            price: 45_000.0,
            bedrooms: 1,
            bathrooms: 1,
            max_guests: 2,
            rating: 4.3,
            view_count: 860,
            amenities: tags(&["WiFi", "Air Conditioning", "Netflix"]),
            images: tags(&["vi-studio/1.jpg", "vi-studio/2.jpg", "vi-studio/3.jpg"]),
            verified: true,
            created_at: created(2024, 4, 1),
            ..PropertyRecord::new("vi-studio", Category::Shortlet)
        },
        PropertyRecord {
            property_type: "Apartment".to_string(),
            title: "2-bedroom flat in Yaba".to_string(),
            description: "Tiled flat in a quiet close, walking distance to UNILAG.".to_string(),
            location: "Yaba".to_string(),
            city: "Lagos".to_string(),
            state: "Lagos".to_string(),
            price: 1_800_000.0,
            bedrooms: 2,
            bathrooms: 2,
            max_guests: 4,
            rating: 3.9,
            view_count: 540,
            amenities: tags(&["Parking", "Water Supply"]),
            images: tags(&["yaba-flat/1.jpg"]),
            created_at: created(2024, 1, 20),
            ..PropertyRecord::new("yaba-flat", Category::Rent)
        },
        PropertyRecord {
            property_type: "Villa".to_string(),
            title: "Beachfront villa with private pool".to_string(),
            description: "Four-bedroom villa for weekend getaways, chef on request.".to_string(),
            location: "Eleko Beach, Ibeju-Lekki".to_string(),
            city: "Lagos".to_string(),
            state: "Lagos".to_string(),
            price: 250_000.0,
            bedrooms: 4,
            bathrooms: 4,
            max_guests: 8,
            rating: 4.9,
            view_count: 2_050,
            amenities: tags(&["WiFi", "Pool", "Parking", "Air Conditioning", "Security"]),
            images: tags(&["eleko-villa/1.jpg", "eleko-villa/2.jpg"]),
            featured: true,
            verified: true,
            created_at: created(2024, 3, 30),
            ..PropertyRecord::new("eleko-villa", Category::Shortlet)
        },
        PropertyRecord {
            property_type: "Land".to_string(),
            title: "600sqm dry land with C of O".to_string(),
            description: "Fenced plot in a gated estate, good road network.".to_string(),
            location: "Ajah".to_string(),
            city: "Lagos".to_string(),
            state: "Lagos".to_string(),
            price: 25_000_000.0,
            rating: 4.0,
            view_count: 720,
            amenities: tags(&["Security"]),
            created_at: created(2023, 11, 8),
            ..PropertyRecord::new("ajah-land", Category::Buy)
        },
        PropertyRecord {
            property_type: "Apartment".to_string(),
            title: "Mini flat near the university".to_string(),
            description: "Self-contained unit with prepaid meter.".to_string(),
            location: "Bodija".to_string(),
            city: "Ibadan".to_string(),
            state: "Oyo".to_string(),
            price: 450_000.0,
            bedrooms: 1,
            bathrooms: 1,
            max_guests: 2,
            rating: 3.6,
            view_count: 190,
            amenities: tags(&["Water Supply"]),
            available: false,
            created_at: created(2023, 12, 5),
            ..PropertyRecord::new("bodija-miniflat", Category::Rent)
        },
        PropertyRecord {
            property_type: "Apartment".to_string(),
            title: "Executive 2-bedroom shortlet".to_string(),
            description: "Business travellers' favourite, with workspace and fibre internet.".to_string(),
            location: "Wuse 2".to_string(),
            city: "Abuja".to_string(),
            state: "FCT".to_string(),
            price: 85_000.0,
            bedrooms: 2,
            bathrooms: 2,
            max_guests: 4,
            rating: 4.6,
            view_count: 1_730,
            amenities: tags(&["WiFi", "Air Conditioning", "Workspace", "Parking"]),
            images: tags(&["wuse-shortlet/1.jpg"]),
            verified: true,
            created_at: created(2024, 2, 25),
            ..PropertyRecord::new("wuse-shortlet", Category::Shortlet)
        },
    ]
}
