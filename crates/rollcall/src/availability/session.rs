//! The "when can everyone meet" calendar.

use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

use crate::{
    availability::{AvailabilityTable, MaxAttendance, Toggle, YearMonth},
    error::InvalidInput,
    user::{Roster, UserId},
};

/// One day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub attendees: Vec<UserId>,
    pub highlighted: bool,
}

/// Availability for a roster of users, viewed one month at a time.
///
/// Navigating between months never discards availability.
#[derive(Debug, Clone)]
pub struct AvailabilitySession {
    table: AvailabilityTable,
    displayed: YearMonth,
    roster: Roster,
}

impl AvailabilitySession {
    pub fn new(roster: Roster, displayed: YearMonth) -> Self {
        info!(users = roster.len(), month:% = displayed; "Availability session started");
        Self {
            table: AvailabilityTable::new(),
            displayed,
            roster,
        }
    }

    /// Flips `user`'s availability on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::UnknownUser`] for a user outside the roster,
    /// leaving the table untouched.
    pub fn toggle(&mut self, date: NaiveDate, user: UserId) -> Result<Toggle, InvalidInput> {
        if !self.roster.contains(user) {
            return Err(InvalidInput::UnknownUser(user));
        }
        Ok(self.table.toggle(date, user))
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn show_month(&mut self, month: YearMonth) {
        debug!(month:% = month; "Showing month");
        self.displayed = month;
    }

    /// Moves to the next month. Returns false at the end of the calendar.
    pub fn next_month(&mut self) -> bool {
        match self.displayed.next() {
            Some(month) => {
                self.show_month(month);
                true
            }
            None => false,
        }
    }

    /// Moves to the previous month. Returns false at the start of the calendar.
    pub fn previous_month(&mut self) -> bool {
        match self.displayed.previous() {
            Some(month) => {
                self.show_month(month);
                true
            }
            None => false,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn table(&self) -> &AvailabilityTable {
        &self.table
    }

    pub fn attendees(&self, date: NaiveDate) -> Vec<UserId> {
        self.table.attendees(date).collect()
    }

    pub fn max_attendance(&self, month: YearMonth) -> MaxAttendance {
        self.table.max_attendance(month)
    }

    /// Maximum attendance of the displayed month.
    pub fn best_days(&self) -> MaxAttendance {
        self.max_attendance(self.displayed)
    }

    /// Every day of the displayed month, highlighting the best days.
    pub fn month_grid(&self) -> Vec<DayCell> {
        let best = self.best_days();
        self.displayed
            .days()
            .map(|date| DayCell {
                date,
                attendees: self.attendees(date),
                highlighted: best.is_maximal(date),
            })
            .collect()
    }
}
