use std::cmp::Ordering;

use crate::models::PropertyRecord;
use crate::search::types::SortKey;

fn compare(a: &PropertyRecord, b: &PropertyRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::RatingDesc => b
            .rating
            .total_cmp(&a.rating)
            .then_with(|| b.view_count.cmp(&a.view_count)),
        SortKey::ViewsDesc => b.view_count.cmp(&a.view_count),
        SortKey::FeaturedFirst => b.featured.cmp(&a.featured),
    }
}

/// Order `records` by `key`. The sort is stable: ties keep their incoming order.
pub fn apply_sort(mut records: Vec<&PropertyRecord>, key: SortKey) -> Vec<&PropertyRecord> {
    records.sort_by(|a, b| compare(a, b, key));
    records
}

/// Keep the first `limit` entries. `None` or a non-positive limit keeps all.
pub fn apply_limit<T>(mut records: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(n) = limit.filter(|n| *n > 0) {
        records.truncate(usize::try_from(n).unwrap_or(usize::MAX));
    }
    records
}
