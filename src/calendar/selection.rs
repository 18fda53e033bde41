use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which end of the stay a click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    CheckIn,
    CheckOut,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::CheckIn => "checkin",
            Endpoint::CheckOut => "checkout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    Empty,
    CheckInSet,
    RangeComplete,
}

/// Check-in / check-out pair owned by whoever embeds the calendar.
///
/// The calendar reads it and reports clicks; the owner applies them with
/// [`DateRangeSelection::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeSelection {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl DateRangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from dates held elsewhere. A check-out without a check-in is dropped.
    pub fn from_dates(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self {
            check_in,
            check_out: check_in.and(check_out),
        }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.check_in, self.check_out) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::CheckInSet,
            (Some(_), Some(_)) => SelectionPhase::RangeComplete,
        }
    }

    /// The endpoint the next accepted click will set.
    pub fn selecting_endpoint(&self) -> Endpoint {
        match self.phase() {
            SelectionPhase::CheckInSet => Endpoint::CheckOut,
            SelectionPhase::Empty | SelectionPhase::RangeComplete => Endpoint::CheckIn,
        }
    }

    /// Record a selection event. A new check-in always clears the check-out.
    pub fn apply(&mut self, date: NaiveDate, endpoint: Endpoint) {
        match endpoint {
            Endpoint::CheckIn => {
                self.check_in = Some(date);
                self.check_out = None;
            }
            Endpoint::CheckOut => {
                if self.check_in.is_some() {
                    self.check_out = Some(date);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Length of the stay once both ends are chosen.
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Strictly between check-in and check-out.
    pub fn is_inside(&self, date: NaiveDate) -> bool {
        matches!((self.check_in, self.check_out), (Some(start), Some(end)) if start < date && date < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn starts_empty_and_selects_check_in() {
        let selection = DateRangeSelection::new();
        assert_eq!(selection.phase(), SelectionPhase::Empty);
        assert_eq!(selection.selecting_endpoint(), Endpoint::CheckIn);
    }

    #[test]
    fn phases_follow_applied_events() {
        let mut selection = DateRangeSelection::new();
        selection.apply(day(10), Endpoint::CheckIn);
        assert_eq!(selection.phase(), SelectionPhase::CheckInSet);
        assert_eq!(selection.selecting_endpoint(), Endpoint::CheckOut);

        selection.apply(day(13), Endpoint::CheckOut);
        assert_eq!(selection.phase(), SelectionPhase::RangeComplete);
        assert_eq!(selection.nights(), Some(3));
        assert_eq!(selection.selecting_endpoint(), Endpoint::CheckIn);
    }

    #[test]
    fn new_check_in_clears_check_out() {
        let mut selection = DateRangeSelection::from_dates(Some(day(10)), Some(day(12)));
        selection.apply(day(15), Endpoint::CheckIn);
        assert_eq!(selection.check_in(), Some(day(15)));
        assert_eq!(selection.check_out(), None);
    }

    #[test]
    fn check_out_without_check_in_is_dropped() {
        let mut selection = DateRangeSelection::new();
        selection.apply(day(12), Endpoint::CheckOut);
        assert_eq!(selection.phase(), SelectionPhase::Empty);
        assert_eq!(DateRangeSelection::from_dates(None, Some(day(3))).check_out(), None);
    }

    #[test]
    fn clear_from_any_phase() {
        let mut selection = DateRangeSelection::from_dates(Some(day(1)), Some(day(4)));
        selection.clear();
        assert_eq!(selection, DateRangeSelection::new());
    }

    #[test]
    fn inside_excludes_endpoints() {
        let selection = DateRangeSelection::from_dates(Some(day(10)), Some(day(13)));
        assert!(!selection.is_inside(day(10)));
        assert!(selection.is_inside(day(11)));
        assert!(selection.is_inside(day(12)));
        assert!(!selection.is_inside(day(13)));
    }

    #[test]
    fn endpoint_wire_names() {
        assert_eq!(serde_json::to_string(&Endpoint::CheckIn).unwrap(), "\"checkin\"");
        assert_eq!(serde_json::to_string(&Endpoint::CheckOut).unwrap(), "\"checkout\"");
    }
}
