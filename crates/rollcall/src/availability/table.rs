//! Per-day availability sets and the maximum-attendance query.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::{availability::YearMonth, user::UserId};

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Highest attendance in a month and the days reaching it.
///
/// Days nobody can attend never count, so a month without availability has
/// `max == 0` and no dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaxAttendance {
    pub max: usize,
    pub dates: BTreeSet<NaiveDate>,
}

impl MaxAttendance {
    pub fn is_maximal(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Mapping from date to the users available that day.
///
/// Entries are created on first toggle and never pruned; an empty entry
/// behaves exactly like a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityTable {
    entries: BTreeMap<NaiveDate, BTreeSet<UserId>>,
}

impl AvailabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `user` to `date` if absent, removes it otherwise.
    pub fn toggle(&mut self, date: NaiveDate, user: UserId) -> Toggle {
        let attendees = self.entries.entry(date).or_default();
        let toggle = if attendees.remove(&user) {
            Toggle::Removed
        } else {
            attendees.insert(user);
            Toggle::Added
        };
        debug!(date:% = date, user = user.get(), toggle:?; "Availability toggled");
        toggle
    }

    pub fn is_available(&self, date: NaiveDate, user: UserId) -> bool {
        self.entries
            .get(&date)
            .is_some_and(|attendees| attendees.contains(&user))
    }

    /// Users available on `date`, in id order.
    pub fn attendees(&self, date: NaiveDate) -> impl Iterator<Item = UserId> + '_ {
        self.entries.get(&date).into_iter().flatten().copied()
    }

    pub fn attendee_count(&self, date: NaiveDate) -> usize {
        self.entries.get(&date).map_or(0, BTreeSet::len)
    }

    /// Stored entries falling in `month`, including empty ones.
    pub fn entries_in(
        &self,
        month: YearMonth,
    ) -> impl Iterator<Item = (NaiveDate, &BTreeSet<UserId>)> + '_ {
        self.entries
            .range(month.first_day()..=month.last_day())
            .map(|(date, attendees)| (*date, attendees))
    }

    pub fn max_attendance(&self, month: YearMonth) -> MaxAttendance {
        let mut result = MaxAttendance::default();

        for (date, attendees) in self.entries_in(month) {
            let count = attendees.len();
            if count == 0 || count < result.max {
                continue;
            }
            if count > result.max {
                result.max = count;
                result.dates.clear();
            }
            result.dates.insert(date);
        }

        result
    }
}
