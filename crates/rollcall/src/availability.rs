//! Group availability calendar.
//!
//! An [`AvailabilityTable`] maps days to the users available on them. An
//! [`AvailabilitySession`] adds a user roster and a displayed month on top
//! and answers which days of that month suit the most people.

mod month;
mod session;
mod table;

pub use month::YearMonth;
pub use session::{AvailabilitySession, DayCell};
pub use table::{AvailabilityTable, MaxAttendance, Toggle};
