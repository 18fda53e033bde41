use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{Category, PropertyRecord};

/// What a filter panel needs to draw its controls for a set of listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingSummary {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_types: Vec<String>,
    pub amenities: Vec<String>,
}

pub fn summarize<'a, I>(records: I) -> ListingSummary
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let mut summary = ListingSummary::default();
    let mut types = BTreeSet::new();
    let mut amenities = BTreeSet::new();

    for p in records {
        summary.total += 1;
        *summary.by_category.entry(p.category).or_insert(0) += 1;
        summary.min_price = Some(summary.min_price.map_or(p.price, |m| m.min(p.price)));
        summary.max_price = Some(summary.max_price.map_or(p.price, |m| m.max(p.price)));

        let kind = p.property_type.trim();
        if !kind.is_empty() {
            types.insert(kind.to_string());
        }
        for a in &p.amenities {
            let a = a.trim();
            if !a.is_empty() {
                amenities.insert(a.to_string());
            }
        }
    }

    summary.property_types = types.into_iter().collect();
    summary.amenities = amenities.into_iter().collect();
    summary
}
