//! Listing search: filter, sort and limit over an in-memory set of records.
//!
//! Every listing view goes through [`search`] instead of hand-rolling its own
//! comparators. Nothing here mutates its input or fails; odd requests (an
//! inverted price range, garbage numbers) just narrow the result.

pub mod filter;
pub mod sort;
pub mod summary;
pub mod types;

pub use filter::apply_filters;
pub use sort::{apply_limit, apply_sort};
pub use summary::{summarize, ListingSummary};
pub use types::{FilterParams, FilterSpec, SortKey};

use crate::models::PropertyRecord;

/// Filter, then sort (only if the spec names a sort key), then limit.
///
/// With `FilterSpec::default()` the output is the input, same order.
pub fn search<'a>(records: &'a [PropertyRecord], spec: &FilterSpec) -> Vec<&'a PropertyRecord> {
    let filtered = apply_filters(records, spec);
    let ordered = match spec.sort {
        Some(key) => apply_sort(filtered, key),
        None => filtered,
    };
    apply_limit(ordered, spec.limit)
}

/// Featured listings for the landing page, newest first.
pub fn featured(records: &[PropertyRecord], limit: i64) -> Vec<&PropertyRecord> {
    let spec = FilterSpec::new()
        .featured_only()
        .with_sort(SortKey::Newest)
        .with_limit(limit);
    search(records, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{TimeZone, Utc};

    fn listing(id: &str, category: Category, price: f64) -> PropertyRecord {
        let mut p = PropertyRecord::new(id, category);
        p.price = price;
        p
    }

    #[test]
    fn default_spec_is_identity() {
        let records = vec![
            listing("x", Category::Buy, 10.0),
            listing("y", Category::Rent, 5.0),
            listing("z", Category::Shortlet, 7.0),
        ];
        let found = search(&records, &FilterSpec::default());
        let expected: Vec<&PropertyRecord> = records.iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn rent_sorted_by_price() {
        let records = vec![
            listing("1", Category::Rent, 100.0),
            listing("2", Category::Buy, 50.0),
            listing("3", Category::Rent, 200.0),
        ];
        let spec = FilterSpec::new()
            .with_category(Category::Rent)
            .with_sort(SortKey::PriceAsc);
        let prices: Vec<f64> = search(&records, &spec).iter().map(|p| p.price).collect();
        assert_eq!(prices, [100.0, 200.0]);
    }

    #[test]
    fn limit_applies_after_sort() {
        let records = vec![
            listing("1", Category::Rent, 300.0),
            listing("2", Category::Rent, 100.0),
            listing("3", Category::Rent, 200.0),
        ];
        let spec = FilterSpec::new().with_sort(SortKey::PriceAsc).with_limit(2);
        let ids: Vec<&str> = search(&records, &spec).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn featured_picks_newest_featured() {
        let mut records = Vec::new();
        for (i, featured) in [true, false, true, true].into_iter().enumerate() {
            let mut p = listing(&format!("f{i}"), Category::Shortlet, 80.0);
            p.featured = featured;
            p.created_at = Utc.with_ymd_and_hms(2024, 1, 1 + i as u32, 0, 0, 0).unwrap();
            records.push(p);
        }
        let ids: Vec<&str> = featured(&records, 2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["f3", "f2"]);
    }
}
