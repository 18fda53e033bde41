use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::Serialize;

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self(date - Duration::days(i64::from(date.day0())))
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Following month; stays put at the end of chrono's range.
    pub fn next(self) -> Self {
        self.0.checked_add_months(Months::new(1)).map(Self).unwrap_or(self)
    }

    pub fn prev(self) -> Self {
        self.0.checked_sub_months(Months::new(1)).map(Self).unwrap_or(self)
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %Y"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMarker {
    None,
    CheckIn,
    CheckOut,
    InRange,
}

/// One square of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_month: bool,
    /// In the availability set and not in the past
    pub available: bool,
    /// A click here would be accepted right now
    pub selectable: bool,
    pub marker: DayMarker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: YearMonth,
    pub week_start: Weekday,
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthView {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|c| c.date == date)
    }
}

/// Dates shown for `month`, padded to whole weeks starting on `week_start`.
pub(super) fn grid_dates(month: YearMonth, week_start: Weekday) -> Vec<Vec<NaiveDate>> {
    let first = month.first_day();
    let lead = (first.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    let start = first - Duration::days(i64::from(lead));
    let cells = lead as usize + month.days().count();
    let rows = cells.div_ceil(7);

    let dates: Vec<NaiveDate> = start.iter_days().take(rows * 7).collect();
    dates.chunks(7).map(|week| week.to_vec()).collect()
}

impl fmt::Display for MonthView {
    /// Plain-text grid. `[d]` check-in/out, `(d)` selectable, `-d-` inside the
    /// range, `d` otherwise; days outside the month are blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:^35}", self.month.to_string())?;
        let mut day = self.week_start;
        for _ in 0..7 {
            write!(f, "{:^5}", &day.to_string()[..2])?;
            day = day.succ();
        }
        writeln!(f)?;
        for week in &self.weeks {
            for cell in week {
                if !cell.in_month {
                    write!(f, "{:5}", "")?;
                    continue;
                }
                let d = cell.date.day();
                let text = match cell.marker {
                    DayMarker::CheckIn | DayMarker::CheckOut => format!("[{d}]"),
                    DayMarker::InRange => format!("-{d}-"),
                    DayMarker::None if cell.selectable => format!("({d})"),
                    DayMarker::None => d.to_string(),
                };
                write!(f, "{text:^5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
