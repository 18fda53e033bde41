use tracing::debug;

use crate::models::PropertyRecord;
use crate::search::types::FilterSpec;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercased, trimmed, and `None` when blank.
fn needle(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Narrow `records` by every constraint present in `spec`.
///
/// Records are borrowed, never copied or modified, and the relative order
/// of survivors is the input order.
pub fn apply_filters<'a>(records: &'a [PropertyRecord], spec: &FilterSpec) -> Vec<&'a PropertyRecord> {
    if spec.has_inverted_price_range() {
        debug!(
            "price_min {:?} > price_max {:?}, returning no listings",
            spec.price_min, spec.price_max
        );
        return Vec::new();
    }

    let query = needle(&spec.query);
    let location = needle(&spec.location);
    let property_type = needle(&spec.property_type);
    let amenities: Vec<&str> = spec
        .amenities
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();

    let mut matches: Vec<&PropertyRecord> = records.iter().collect();

    if let Some(q) = &query {
        matches.retain(|p| {
            contains_ci(&p.title, q) || contains_ci(&p.description, q) || contains_ci(&p.location, q)
        });
    }

    if let Some(category) = spec.category {
        matches.retain(|p| p.category == category);
    }

    if let Some(loc) = &location {
        matches.retain(|p| {
            contains_ci(&p.location, loc) || contains_ci(&p.city, loc) || contains_ci(&p.state, loc)
        });
    }

    if let Some(min) = spec.price_min {
        matches.retain(|p| p.price >= min);
    }

    if let Some(max) = spec.price_max {
        matches.retain(|p| p.price <= max);
    }

    if let Some(beds) = spec.min_bedrooms {
        matches.retain(|p| p.bedrooms >= beds);
    }

    if let Some(baths) = spec.min_bathrooms {
        matches.retain(|p| p.bathrooms >= baths);
    }

    if let Some(guests) = spec.min_guests {
        matches.retain(|p| p.max_guests >= guests);
    }

    if let Some(kind) = &property_type {
        matches.retain(|p| p.property_type.trim().to_lowercase() == *kind);
    }

    if !amenities.is_empty() {
        matches.retain(|p| amenities.iter().all(|a| p.has_amenity(a)));
    }

    if spec.featured_only {
        matches.retain(|p| p.featured);
    }

    if spec.verified_only {
        matches.retain(|p| p.verified);
    }

    debug!("Filtered {} listings down to {}", records.len(), matches.len());
    matches
}
