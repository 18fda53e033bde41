use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use super::availability::AvailableDates;
use super::month::{grid_dates, DayCell, DayMarker, MonthView, YearMonth};
use super::selection::{DateRangeSelection, Endpoint, SelectionPhase};

pub const DEFAULT_MIN_NIGHTS: u32 = 1;

/// Why a click was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    InPast,
    Unavailable,
    /// Would produce a stay shorter than the minimum (or zero nights)
    TooShort,
}

/// What a click did, from the calendar's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SelectOutcome {
    CheckInSet { check_in: NaiveDate },
    RangeComplete { check_in: NaiveDate, check_out: NaiveDate },
    Ignored { reason: IgnoreReason },
}

/// How an accepted click changes the selection.
#[derive(Debug, Clone, Copy)]
enum Step {
    CheckIn(NaiveDate),
    CheckOut { check_in: NaiveDate, check_out: NaiveDate },
    Swap { check_in: NaiveDate, check_out: NaiveDate },
}

/// Check-in/check-out picker over a set of bookable dates.
///
/// Selection state belongs to the caller: pass the current
/// [`DateRangeSelection`] in, get `(date, endpoint)` events out. The only
/// thing the calendar keeps is which month is on screen.
#[derive(Debug, Clone)]
pub struct AvailabilityCalendar {
    available: AvailableDates,
    min_nights: u32,
    today: NaiveDate,
    week_start: Weekday,
    month: YearMonth,
}

impl AvailabilityCalendar {
    pub fn new(available: AvailableDates, today: NaiveDate) -> Self {
        Self {
            available,
            min_nights: DEFAULT_MIN_NIGHTS,
            today,
            week_start: Weekday::Sun,
            month: YearMonth::containing(today),
        }
    }

    /// At least one night is always required.
    pub fn with_min_nights(self, min_nights: u32) -> Self {
        Self {
            min_nights: min_nights.max(1),
            ..self
        }
    }

    pub fn with_week_start(self, week_start: Weekday) -> Self {
        Self { week_start, ..self }
    }

    pub fn min_nights(&self) -> u32 {
        self.min_nights
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn available(&self) -> &AvailableDates {
        &self.available
    }

    /// Available and not in the past, ignoring the current selection.
    pub fn is_bookable(&self, date: NaiveDate) -> bool {
        date >= self.today && self.available.contains(date)
    }

    pub fn is_selectable(&self, selection: &DateRangeSelection, date: NaiveDate) -> bool {
        self.plan(selection, date).is_ok()
    }

    fn long_enough(&self, start: NaiveDate, end: NaiveDate) -> bool {
        (end - start).num_days() >= i64::from(self.min_nights)
    }

    fn plan(&self, selection: &DateRangeSelection, date: NaiveDate) -> Result<Step, IgnoreReason> {
        if date < self.today {
            return Err(IgnoreReason::InPast);
        }
        if !self.available.contains(date) {
            return Err(IgnoreReason::Unavailable);
        }

        let check_in = match (selection.phase(), selection.check_in()) {
            (SelectionPhase::CheckInSet, Some(check_in)) => check_in,
            _ => return Ok(Step::CheckIn(date)),
        };

        if date < check_in {
            // reversed click: the ends trade places
            if self.long_enough(date, check_in) {
                Ok(Step::Swap {
                    check_in: date,
                    check_out: check_in,
                })
            } else {
                Err(IgnoreReason::TooShort)
            }
        } else if self.long_enough(check_in, date) {
            Ok(Step::CheckOut {
                check_in,
                check_out: date,
            })
        } else {
            Err(IgnoreReason::TooShort)
        }
    }

    /// Handle a click on `date`.
    ///
    /// Accepted clicks call `on_date_select` once per endpoint that changes
    /// (twice when a reversed click swaps the ends: check-in first). Rejected
    /// clicks call nothing.
    pub fn select<F>(&self, selection: &DateRangeSelection, date: NaiveDate, mut on_date_select: F) -> SelectOutcome
    where
        F: FnMut(NaiveDate, Endpoint),
    {
        let step = match self.plan(selection, date) {
            Ok(step) => step,
            Err(reason) => {
                debug!("Ignoring click on {}: {:?}", date, reason);
                return SelectOutcome::Ignored { reason };
            }
        };

        match step {
            Step::CheckIn(check_in) => {
                on_date_select(check_in, Endpoint::CheckIn);
                SelectOutcome::CheckInSet { check_in }
            }
            Step::CheckOut { check_in, check_out } => {
                on_date_select(check_out, Endpoint::CheckOut);
                SelectOutcome::RangeComplete { check_in, check_out }
            }
            Step::Swap { check_in, check_out } => {
                on_date_select(check_in, Endpoint::CheckIn);
                on_date_select(check_out, Endpoint::CheckOut);
                SelectOutcome::RangeComplete { check_in, check_out }
            }
        }
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.month
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    /// Stops at the month containing today.
    pub fn prev_month(&mut self) {
        if self.can_go_back() {
            self.month = self.month.prev();
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.month > YearMonth::containing(self.today)
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.month = YearMonth::containing(date);
    }

    fn marker(selection: &DateRangeSelection, date: NaiveDate) -> DayMarker {
        if selection.check_in() == Some(date) {
            DayMarker::CheckIn
        } else if selection.check_out() == Some(date) {
            DayMarker::CheckOut
        } else if selection.is_inside(date) {
            DayMarker::InRange
        } else {
            DayMarker::None
        }
    }

    /// The displayed month as week rows, with every day's state resolved
    /// against `selection`.
    pub fn month_view(&self, selection: &DateRangeSelection) -> MonthView {
        let weeks = grid_dates(self.month, self.week_start)
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|date| DayCell {
                        date,
                        in_month: self.month.contains(date),
                        available: self.is_bookable(date),
                        selectable: self.is_selectable(selection, date),
                        marker: Self::marker(selection, date),
                    })
                    .collect()
            })
            .collect();

        MonthView {
            month: self.month,
            week_start: self.week_start,
            weeks,
        }
    }
}
