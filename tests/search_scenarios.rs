//! End-to-end search behaviour over the seeded listings and hand-built records.

use property_finder::search::{apply_filters, apply_limit, apply_sort, search, FilterParams, FilterSpec, SortKey};
use property_finder::sources::{seed_listings, ListingSource, MockListingSource};
use property_finder::{Category, ListingsResponse, PropertyRecord};
use serde_json::json;

fn listing(price: f64, category: Category) -> PropertyRecord {
    let mut p = PropertyRecord::new(format!("{category}-{price}"), category);
    p.price = price;
    p
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn rent_listings_sorted_by_price() {
    let records = vec![
        listing(100.0, Category::Rent),
        listing(50.0, Category::Buy),
        listing(200.0, Category::Rent),
    ];
    let spec = FilterSpec::from(FilterParams {
        category: Some("rent".into()),
        sort: Some("price_asc".into()),
        ..Default::default()
    });

    let found = search(&records, &spec);
    let prices: Vec<f64> = found.iter().map(|p| p.price).collect();
    assert_eq!(prices, [100.0, 200.0]);
    assert!(found.iter().all(|p| p.category == Category::Rent));
}

#[test]
fn api_payload_flows_through_search() {
    let payload = json!({
        "properties": [
            {"id": "a", "category": "shortlet", "price": "95", "maxGuests": 2, "title": "Studio"},
            {"id": "b", "category": "shortlet", "price": 180, "maxGuests": 6, "title": "Villa"},
            {"id": "c", "category": "rent", "price": "n/a", "title": "Flat"}
        ],
        "count": 3
    });
    let response: ListingsResponse = serde_json::from_value(payload).unwrap();
    let spec = FilterSpec::new()
        .with_category(Category::Shortlet)
        .with_min_guests(4);

    let ids: Vec<&str> = search(&response.properties, &spec).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b"]);
    assert_eq!(response.properties[2].price, 0.0);
}

// ---------------------------------------------------------------------------
// Properties over the seeded listings
// ---------------------------------------------------------------------------

#[test]
fn empty_spec_returns_input_unchanged() {
    let records = seed_listings();
    let found: Vec<PropertyRecord> = search(&records, &FilterSpec::default()).into_iter().cloned().collect();
    assert_eq!(found, records);
}

#[test]
fn category_filter_and_complement_cover_everything() {
    let records = seed_listings();
    for category in Category::ALL {
        let matched = apply_filters(&records, &FilterSpec::new().with_category(category));
        assert!(matched.iter().all(|p| p.category == category));
        let complement = records.iter().filter(|p| p.category != category).count();
        assert_eq!(matched.len() + complement, records.len());
    }
}

#[test]
fn price_bounds_hold_for_every_match() {
    let records = seed_listings();
    let (min, max) = (50_000.0, 5_000_000.0);
    let found = search(&records, &FilterSpec::new().with_price_range(Some(min), Some(max)));
    assert!(!found.is_empty());
    assert!(found.iter().all(|p| min <= p.price && p.price <= max));
}

#[test]
fn inverted_price_bounds_match_nothing() {
    let records = seed_listings();
    let spec = FilterSpec::from(FilterParams {
        min_price: Some("5000000".into()),
        max_price: Some("50000".into()),
        ..Default::default()
    });
    assert!(search(&records, &spec).is_empty());
}

#[test]
fn price_desc_is_price_asc_reversed_up_to_ties() {
    let records = seed_listings();
    let mut asc: Vec<f64> = apply_sort(records.iter().collect(), SortKey::PriceAsc)
        .iter()
        .map(|p| p.price)
        .collect();
    asc.reverse();
    let desc: Vec<f64> = apply_sort(records.iter().collect(), SortKey::PriceDesc)
        .iter()
        .map(|p| p.price)
        .collect();
    assert_eq!(asc, desc);
}

#[test]
fn limit_never_exceeds_request() {
    let records = seed_listings();
    for limit in [1, 3, 100] {
        let limited = apply_limit(records.iter().collect::<Vec<_>>(), Some(limit));
        assert!(limited.len() <= limit as usize);
    }
    for limit in [None, Some(0), Some(-1)] {
        assert_eq!(apply_limit(records.iter().collect::<Vec<_>>(), limit).len(), records.len());
    }
}

#[test]
fn each_absent_field_is_no_constraint() {
    let records = seed_listings();
    let blank = FilterSpec {
        query: Some(String::new()),
        location: Some("  ".into()),
        property_type: Some(String::new()),
        amenities: vec![" ".into()],
        ..Default::default()
    };
    assert_eq!(search(&records, &blank).len(), records.len());
}

#[tokio::test]
async fn mock_source_supports_a_typical_shortlet_search() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let listings = MockListingSource::new(today).fetch_listings().await.unwrap();

    let spec = FilterSpec::from(FilterParams {
        category: Some("shortlet".into()),
        location: Some("lagos".into()),
        amenities: vec!["WiFi".into()],
        sort: Some("rating".into()),
        ..Default::default()
    });
    let ids: Vec<&str> = search(&listings, &spec).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["eleko-villa", "vi-studio"]);
}
