mod lenient;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Listing category. Decodes through [`FromStr`], so any case and `sale` are accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Buy,
    Rent,
    Shortlet,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Buy, Category::Rent, Category::Shortlet];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Buy => "buy",
            Category::Rent => "rent",
            Category::Shortlet => "shortlet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "sale" => Ok(Category::Buy),
            "rent" => Ok(Category::Rent),
            "shortlet" => Ok(Category::Shortlet),
            _ => Err(FinderError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = FinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Read-only snapshot of one listing.
///
/// Numeric fields decode leniently: a number, a numeric string, or anything
/// else (which becomes 0). `price` is clamped to be non-negative and
/// `rating` to `0.0..=5.0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub category: Category,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, deserialize_with = "lenient::price")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub max_guests: u32,
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient::views")]
    pub view_count: u64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default = "lenient::available")]
    pub available: bool,
    #[serde(default = "lenient::epoch", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl PropertyRecord {
    /// Blank listing with the given identity; everything else zeroed.
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
            property_type: String::new(),
            title: String::new(),
            description: String::new(),
            location: String::new(),
            city: String::new(),
            state: String::new(),
            price: 0.0,
            bedrooms: 0,
            bathrooms: 0,
            max_guests: 0,
            rating: 0.0,
            view_count: 0,
            amenities: Vec::new(),
            images: Vec::new(),
            featured: false,
            verified: false,
            available: true,
            created_at: lenient::epoch(),
        }
    }

    /// Case-insensitive amenity membership.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.trim().eq_ignore_ascii_case(amenity.trim()))
    }
}

/// Response shape of the listings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub count: usize,
}
