//! Per-minute shift classification.
//!
//! This module turns one continuous entry-to-exit interval into a lazy
//! sequence of one-minute events, each tagged with the time-of-day period
//! and the day's holiday flag. Minute granularity is authoritative; there
//! is no sub-minute accounting.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// The time-of-day band a minute falls into.
///
/// Day runs 06:00 to 18:00, night covers the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    /// Hours in [06:00, 18:00).
    Day,
    /// Hours in [18:00, 24:00) and [00:00, 06:00).
    Night,
}

/// Returns the [`DayPeriod`] the given clock time falls into.
///
/// # Example
///
/// ```
/// use recargo_engine::calculation::{DayPeriod, period_of};
/// use chrono::NaiveTime;
///
/// assert_eq!(period_of(NaiveTime::from_hms_opt(17, 59, 0).unwrap()), DayPeriod::Day);
/// assert_eq!(period_of(NaiveTime::from_hms_opt(18, 0, 0).unwrap()), DayPeriod::Night);
/// ```
pub fn period_of(time: NaiveTime) -> DayPeriod {
    if (6..18).contains(&time.hour()) {
        DayPeriod::Day
    } else {
        DayPeriod::Night
    }
}

/// One classified worked minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteMark {
    /// The instant this minute starts at.
    pub at: NaiveDateTime,
    /// The time-of-day band.
    pub period: DayPeriod,
    /// Whether the shift's day is a Sunday or holiday. Constant across
    /// the whole shift, even for the portion past midnight.
    pub holiday: bool,
}

/// A lazy, restartable iterator over the minutes of one shift.
///
/// Iterates in one-minute steps over the half-open interval from entry to
/// exit; the number of emitted marks equals the duration in whole
/// minutes. When the exit time of day is earlier than the entry, the exit
/// is taken to be on the following calendar day.
///
/// # Example
///
/// ```
/// use recargo_engine::calculation::MinuteClassifier;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
/// let entry = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// let exit = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
///
/// let marks = MinuteClassifier::new(date, entry, exit, false);
/// assert_eq!(marks.count(), 180);
/// ```
#[derive(Debug, Clone)]
pub struct MinuteClassifier {
    cursor: NaiveDateTime,
    end: NaiveDateTime,
    holiday: bool,
}

impl MinuteClassifier {
    /// Creates a classifier for one shift on its reference date.
    pub fn new(date: NaiveDate, entry: NaiveTime, exit: NaiveTime, holiday: bool) -> Self {
        let cursor = date.and_time(entry);
        let mut end = date.and_time(exit);
        if exit < entry {
            end += Duration::days(1);
        }
        Self {
            cursor,
            end,
            holiday,
        }
    }
}

impl Iterator for MinuteClassifier {
    type Item = MinuteMark;

    fn next(&mut self) -> Option<MinuteMark> {
        if self.cursor >= self.end {
            return None;
        }
        let mark = MinuteMark {
            at: self.cursor,
            period: period_of(self.cursor.time()),
            holiday: self.holiday,
        };
        self.cursor += Duration::minutes(1);
        Some(mark)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.cursor).num_minutes().max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MinuteClassifier {}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn classifier(entry: &str, exit: &str) -> MinuteClassifier {
        MinuteClassifier::new(make_date("2025-09-03"), make_time(entry), make_time(exit), false)
    }

    #[test]
    fn test_emits_one_mark_per_minute() {
        assert_eq!(classifier("08:00", "18:00").count(), 600);
        assert_eq!(classifier("08:00", "08:01").count(), 1);
    }

    #[test]
    fn test_interval_is_half_open() {
        let marks: Vec<MinuteMark> = classifier("17:58", "18:00").collect();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].at.time(), make_time("17:58"));
        assert_eq!(marks[1].at.time(), make_time("17:59"));
    }

    #[test]
    fn test_zero_duration_emits_nothing() {
        assert_eq!(classifier("09:00", "09:00").count(), 0);
    }

    #[test]
    fn test_night_boundaries() {
        assert_eq!(period_of(make_time("05:59")), DayPeriod::Night);
        assert_eq!(period_of(make_time("06:00")), DayPeriod::Day);
        assert_eq!(period_of(make_time("17:59")), DayPeriod::Day);
        assert_eq!(period_of(make_time("18:00")), DayPeriod::Night);
        assert_eq!(period_of(make_time("00:00")), DayPeriod::Night);
        assert_eq!(period_of(make_time("23:59")), DayPeriod::Night);
    }

    #[test]
    fn test_day_to_night_transition_within_a_shift() {
        let marks: Vec<MinuteMark> = classifier("17:00", "19:00").collect();
        assert_eq!(marks.len(), 120);
        let day_minutes = marks.iter().filter(|m| m.period == DayPeriod::Day).count();
        let night_minutes = marks.iter().filter(|m| m.period == DayPeriod::Night).count();
        assert_eq!(day_minutes, 60);
        assert_eq!(night_minutes, 60);
    }

    #[test]
    fn test_cross_midnight_shift_advances_the_date() {
        let marks: Vec<MinuteMark> = classifier("20:00", "06:00").collect();
        assert_eq!(marks.len(), 600);
        assert_eq!(marks[0].at.date(), make_date("2025-09-03"));
        assert_eq!(marks.last().unwrap().at.date(), make_date("2025-09-04"));
        assert_eq!(marks.last().unwrap().at.time(), make_time("05:59"));
    }

    #[test]
    fn test_holiday_flag_constant_past_midnight() {
        let marks = MinuteClassifier::new(
            make_date("2025-09-07"), // a Sunday
            make_time("22:00"),
            make_time("02:00"),
            true,
        );
        assert!(marks.into_iter().all(|m| m.holiday));
    }

    #[test]
    fn test_classifier_is_restartable() {
        let classifier = classifier("08:00", "12:00");
        let first: Vec<MinuteMark> = classifier.clone().collect();
        let second: Vec<MinuteMark> = classifier.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_matches_duration() {
        let classifier = classifier("08:00", "18:00");
        assert_eq!(classifier.len(), 600);
    }
}
