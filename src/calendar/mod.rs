//! Check-in/check-out date picker for bookable listings.
//!
//! Flow: `Empty` → (pick) → `CheckInSet` → (pick later date) → `RangeComplete`
//! → (pick) → `CheckInSet` again. `DateRangeSelection::clear` resets from anywhere.

pub mod availability;
pub mod month;
pub mod picker;
pub mod selection;

pub use availability::{parse_iso_date, AvailableDates};
pub use month::{DayCell, DayMarker, MonthView, YearMonth};
pub use picker::{AvailabilityCalendar, IgnoreReason, SelectOutcome, DEFAULT_MIN_NIGHTS};
pub use selection::{DateRangeSelection, Endpoint, SelectionPhase};
