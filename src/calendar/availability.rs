use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::FinderError;

pub const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, FinderError> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE).map_err(|_| FinderError::InvalidDate(raw.to_string()))
}

/// Bookable nights for one listing. Anything not in the set is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableDates(BTreeSet<NaiveDate>);

impl AvailableDates {
    /// Build from `yyyy-MM-dd` strings, skipping entries that do not parse.
    pub fn from_iso_strings<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for raw in dates {
            match parse_iso_date(raw.as_ref()) {
                Ok(date) => {
                    set.insert(date);
                }
                Err(err) => warn!("Skipping availability entry: {}", err),
            }
        }
        Self(set)
    }

    /// Every day from `start` to `end`, both included.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        start.iter_days().take_while(|d| *d <= end).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }

    pub fn to_iso_strings(&self) -> Vec<String> {
        self.iter().map(|d| d.format(ISO_DATE).to_string()).collect()
    }
}

impl FromIterator<NaiveDate> for AvailableDates {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
