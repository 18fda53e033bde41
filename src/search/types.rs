use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Category;

/// Result ordering for a search. Decoding goes through [`SortKey::parse_lenient`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortKey {
    /// Most recently created first. Also what "relevance" means here.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    #[serde(rename = "rating")]
    RatingDesc,
    #[serde(rename = "views")]
    ViewsDesc,
    #[serde(rename = "featured")]
    FeaturedFirst,
}

impl SortKey {
    /// Parse a wire/UI sort name. Unknown names fall back to `Newest`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" | "relevance" => SortKey::Newest,
            "price_asc" | "price-asc" => SortKey::PriceAsc,
            "price_desc" | "price-desc" => SortKey::PriceDesc,
            "rating" | "rating_desc" => SortKey::RatingDesc,
            "views" | "view_count" | "popular" => SortKey::ViewsDesc,
            "featured" => SortKey::FeaturedFirst,
            other => {
                debug!("Unknown sort key '{}', using newest", other);
                SortKey::Newest
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::RatingDesc => "rating",
            SortKey::ViewsDesc => "views",
            SortKey::FeaturedFirst => "featured",
        }
    }
}

impl From<String> for SortKey {
    fn from(raw: String) -> Self {
        SortKey::parse_lenient(&raw)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search/filter request.
///
/// Every `None` / empty field means "no constraint". An absent `sort`
/// keeps the input order; `limit <= 0` means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// Free text matched against title, description and location
    pub query: Option<String>,
    pub category: Option<Category>,
    /// Substring of location, city or state
    pub location: Option<String>,
    /// Inclusive lower price bound
    pub price_min: Option<f64>,
    /// Inclusive upper price bound
    pub price_max: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub min_guests: Option<u32>,
    pub property_type: Option<String>,
    /// Every amenity listed here must be present on a record
    pub amenities: Vec<String>,
    pub featured_only: bool,
    pub verified_only: bool,
    pub sort: Option<SortKey>,
    pub limit: Option<i64>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..self
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }

    pub fn with_price_range(self, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            price_min: min,
            price_max: max,
            ..self
        }
    }

    pub fn with_min_bedrooms(self, bedrooms: u32) -> Self {
        Self {
            min_bedrooms: Some(bedrooms),
            ..self
        }
    }

    pub fn with_min_bathrooms(self, bathrooms: u32) -> Self {
        Self {
            min_bathrooms: Some(bathrooms),
            ..self
        }
    }

    pub fn with_min_guests(self, guests: u32) -> Self {
        Self {
            min_guests: Some(guests),
            ..self
        }
    }

    pub fn with_property_type(self, property_type: impl Into<String>) -> Self {
        Self {
            property_type: Some(property_type.into()),
            ..self
        }
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.push(amenity.into());
        self
    }

    pub fn featured_only(self) -> Self {
        Self {
            featured_only: true,
            ..self
        }
    }

    pub fn verified_only(self) -> Self {
        Self {
            verified_only: true,
            ..self
        }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self {
            sort: Some(sort),
            ..self
        }
    }

    pub fn with_limit(self, limit: i64) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    /// True when both price bounds are set and cannot be satisfied together.
    pub fn has_inverted_price_range(&self) -> bool {
        matches!((self.price_min, self.price_max), (Some(min), Some(max)) if min > max)
    }
}

/// Raw control state as submitted by a search form or query string.
///
/// Everything is a string; [`FilterSpec::from`] does the coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub guests: Option<String>,
    pub property_type: Option<String>,
    pub amenities: Vec<String>,
    pub featured: Option<String>,
    pub verified: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_price(raw: Option<String>) -> Option<f64> {
    non_blank(raw)
        .and_then(|s| s.replace(',', "").parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn parse_at_least(raw: Option<String>) -> Option<u32> {
    // "3+" is how the bedroom pickers label their options
    non_blank(raw)
        .and_then(|s| s.trim_end_matches('+').parse::<u32>().ok())
        .filter(|n| *n > 0)
}

fn parse_flag(raw: Option<String>) -> bool {
    matches!(
        non_blank(raw).map(|s| s.to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

impl From<FilterParams> for FilterSpec {
    fn from(params: FilterParams) -> Self {
        let category = non_blank(params.category)
            .filter(|c| !c.eq_ignore_ascii_case("all"))
            .and_then(|c| match c.parse::<Category>() {
                Ok(category) => Some(category),
                Err(err) => {
                    debug!("Ignoring category filter: {}", err);
                    None
                }
            });

        let property_type =
            non_blank(params.property_type).filter(|t| !t.eq_ignore_ascii_case("all"));

        FilterSpec {
            query: non_blank(params.query),
            category,
            location: non_blank(params.location),
            price_min: parse_price(params.min_price),
            price_max: parse_price(params.max_price),
            min_bedrooms: parse_at_least(params.bedrooms),
            min_bathrooms: parse_at_least(params.bathrooms),
            min_guests: parse_at_least(params.guests),
            property_type,
            amenities: params
                .amenities
                .into_iter()
                .filter_map(|a| non_blank(Some(a)))
                .collect(),
            featured_only: parse_flag(params.featured),
            verified_only: parse_flag(params.verified),
            sort: non_blank(params.sort).map(|s| SortKey::parse_lenient(&s)),
            limit: non_blank(params.limit).and_then(|s| s.parse::<i64>().ok()),
        }
    }
}
