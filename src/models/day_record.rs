//! Day record and shift time models.
//!
//! This module defines the [`DayRecord`] and [`ShiftTimes`] structs for
//! representing the manually entered clock-in/clock-out times of one
//! calendar day, with at most two shifts per day.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Identifies one of the two shifts a day record can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSlot {
    /// The first shift of the day.
    First,
    /// The second shift of the day.
    Second,
}

impl ShiftSlot {
    /// Both slots, in the order they are folded during settlement.
    pub const BOTH: [ShiftSlot; 2] = [ShiftSlot::First, ShiftSlot::Second];
}

impl std::fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftSlot::First => write!(f, "shift 1"),
            ShiftSlot::Second => write!(f, "shift 2"),
        }
    }
}

/// An entry/exit clock-time pair for a single shift.
///
/// Both fields are optional because the times are entered by hand, one
/// field at a time. A pair with exactly one side present is structurally
/// invalid and is reported by the validator. An exit strictly earlier than
/// the entry means the shift crosses midnight and ends the next day.
///
/// # Example
///
/// ```
/// use recargo_engine::models::ShiftTimes;
/// use chrono::NaiveTime;
///
/// let night_watch = ShiftTimes {
///     entry: NaiveTime::from_hms_opt(22, 0, 0),
///     exit: NaiveTime::from_hms_opt(6, 0, 0),
/// };
/// assert!(night_watch.crosses_midnight());
/// assert_eq!(night_watch.duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTimes {
    /// The clock-in time, if entered.
    pub entry: Option<NaiveTime>,
    /// The clock-out time, if entered.
    pub exit: Option<NaiveTime>,
}

impl ShiftTimes {
    /// Returns true when neither time has been entered.
    pub fn is_empty(&self) -> bool {
        self.entry.is_none() && self.exit.is_none()
    }

    /// Returns true when both times have been entered.
    pub fn is_complete(&self) -> bool {
        self.entry.is_some() && self.exit.is_some()
    }

    /// Returns true when the exit is strictly earlier than the entry,
    /// which means the shift ends on the following calendar day.
    pub fn crosses_midnight(&self) -> bool {
        matches!((self.entry, self.exit), (Some(e), Some(x)) if x < e)
    }

    /// Builds the half-open datetime interval of this shift anchored to
    /// `date`. The end is advanced by one day when the shift crosses
    /// midnight; the start is never moved.
    ///
    /// Returns `None` for incomplete pairs.
    pub fn window(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (entry, exit) = (self.entry?, self.exit?);
        let start = date.and_time(entry);
        let mut end = date.and_time(exit);
        if exit < entry {
            end += Duration::days(1);
        }
        Some((start, end))
    }

    /// Returns the wrapped duration of this shift in whole minutes.
    ///
    /// Incomplete pairs contribute nothing.
    pub fn duration_minutes(&self) -> i64 {
        match (self.entry, self.exit) {
            (Some(entry), Some(exit)) => {
                let mut minutes = (exit - entry).num_minutes();
                if minutes < 0 {
                    minutes += 24 * 60;
                }
                minutes
            }
            _ => 0,
        }
    }
}

/// One calendar day within the month being settled.
///
/// A day holds up to two shifts. Whether the day counts as a holiday is
/// derived from the holiday calendar at settlement time and is never
/// stored on the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date (unique key within a month).
    pub date: NaiveDate,
    /// The first shift of the day.
    #[serde(default)]
    pub first: ShiftTimes,
    /// The second shift of the day.
    #[serde(default)]
    pub second: ShiftTimes,
}

impl DayRecord {
    /// Creates a day record with no shift times entered.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            first: ShiftTimes::default(),
            second: ShiftTimes::default(),
        }
    }

    /// Returns the shift stored in the given slot.
    pub fn shift(&self, slot: ShiftSlot) -> &ShiftTimes {
        match slot {
            ShiftSlot::First => &self.first,
            ShiftSlot::Second => &self.second,
        }
    }

    /// Returns the total worked minutes of the day, summing the wrapped
    /// durations of both shifts. Incomplete shifts contribute nothing.
    pub fn worked_minutes(&self) -> i64 {
        self.first.duration_minutes() + self.second.duration_minutes()
    }

    /// Returns true when the date falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }
}
