//! Holiday calendar for the settlement engine.
//!
//! The calendar answers one question for the classifier: is a given date a
//! non-working day? Sundays always are; the rest come from the generated
//! Colombian national holiday list in [`colombia`], optionally extended
//! with manual entries from configuration.
//!
//! All dates are plain civil dates with no timezone component. Holiday
//! membership is decided by exact calendar-date comparison, never through
//! a UTC conversion.

pub mod colombia;
mod easter;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub use colombia::{SUPPORTED_YEARS, holidays_for_year, shift_to_monday};
pub use easter::easter_sunday;

/// Whether a holiday falls on the same date every year or moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// Easter-based or shifted to a Monday by the Emiliani Law.
    Movable,
}

/// A single holiday entry.
///
/// # Example
///
/// ```
/// use recargo_engine::calendar::{HolidayKind, HolidayRecord};
/// use chrono::NaiveDate;
///
/// let holiday = HolidayRecord {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     name: "Navidad".to_string(),
///     kind: HolidayKind::Fixed,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The holiday name.
    pub name: String,
    /// Fixed or movable.
    pub kind: HolidayKind,
}

/// A date-indexed set of holidays.
///
/// Sundays are treated as non-working days in addition to the listed
/// holidays, so they never need explicit entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayCalendar {
    records: Vec<HolidayRecord>,
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from explicit records, sorted by date. When two
    /// records share a date the first one wins.
    pub fn from_records(records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        let mut calendar = Self::default();
        calendar.merge(records, false);
        calendar
    }

    /// Builds the generated Colombian national calendar for a range of
    /// years.
    ///
    /// # Example
    ///
    /// ```
    /// use recargo_engine::calendar::HolidayCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let calendar = HolidayCalendar::colombian(2025..=2025);
    /// // Ascension Day 2025, shifted to Monday June 2nd
    /// assert!(calendar.is_listed_holiday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    /// ```
    pub fn colombian(years: impl IntoIterator<Item = i32>) -> Self {
        Self::from_records(years.into_iter().flat_map(holidays_for_year))
    }

    /// Adds records to the calendar. New entries replace existing entries
    /// on the same date, which is how configuration overrides the
    /// generated list.
    pub fn extend(&mut self, records: impl IntoIterator<Item = HolidayRecord>) {
        self.merge(records, true);
    }

    fn merge(&mut self, records: impl IntoIterator<Item = HolidayRecord>, replace: bool) {
        for record in records {
            if self.dates.contains(&record.date) {
                if !replace {
                    continue;
                }
                self.records.retain(|r| r.date != record.date);
            }
            self.dates.insert(record.date);
            self.records.push(record);
        }
        self.records.sort_by_key(|r| r.date);
    }

    /// All holiday entries, sorted by date.
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Returns true when the date has an explicit holiday entry.
    pub fn is_listed_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns true when the date is a non-working day: a listed holiday
    /// or any Sunday.
    pub fn is_non_working(&self, date: NaiveDate) -> bool {
        self.is_listed_holiday(date) || date.weekday() == Weekday::Sun
    }

    /// The number of holiday entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the calendar has no entries.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(date: &str, name: &str) -> HolidayRecord {
        HolidayRecord {
            date: make_date(date),
            name: name.to_string(),
            kind: HolidayKind::Fixed,
        }
    }

    #[test]
    fn test_sundays_are_always_non_working() {
        let calendar = HolidayCalendar::default();
        // 2025-09-07 is a Sunday
        assert!(calendar.is_non_working(make_date("2025-09-07")));
        assert!(!calendar.is_listed_holiday(make_date("2025-09-07")));
        assert!(!calendar.is_non_working(make_date("2025-09-08")));
    }

    #[test]
    fn test_listed_holiday_on_a_weekday() {
        let calendar = HolidayCalendar::from_records([record("2025-12-25", "Navidad")]);
        assert!(calendar.is_listed_holiday(make_date("2025-12-25")));
        assert!(calendar.is_non_working(make_date("2025-12-25")));
        assert!(!calendar.is_non_working(make_date("2025-12-24")));
    }

    #[test]
    fn test_records_sorted_by_date() {
        let calendar = HolidayCalendar::from_records([
            record("2025-12-25", "Navidad"),
            record("2025-01-01", "Año Nuevo"),
        ]);
        let dates: Vec<NaiveDate> = calendar.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![make_date("2025-01-01"), make_date("2025-12-25")]);
    }

    #[test]
    fn test_from_records_keeps_first_duplicate() {
        let calendar = HolidayCalendar::from_records([
            record("2025-12-25", "Navidad"),
            record("2025-12-25", "Duplicada"),
        ]);
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.records()[0].name, "Navidad");
    }

    #[test]
    fn test_extend_replaces_entries_on_the_same_date() {
        let mut calendar = HolidayCalendar::from_records([record("2025-12-25", "Navidad")]);
        calendar.extend([record("2025-12-25", "Override")]);
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.records()[0].name, "Override");
    }

    #[test]
    fn test_colombian_calendar_dedups_shared_dates() {
        // in 2025 the shifted San Pedro and Sagrado Corazón both fall on
        // June 30th; the calendar keeps one entry for the date
        let calendar = HolidayCalendar::colombian(2025..=2025);
        assert_eq!(calendar.len(), 17);
        assert!(calendar.is_listed_holiday(make_date("2025-06-30")));
    }

    #[test]
    fn test_colombian_calendar_spans_years() {
        let calendar = HolidayCalendar::colombian(2024..=2025);
        assert!(calendar.is_listed_holiday(make_date("2024-01-01")));
        assert!(calendar.is_listed_holiday(make_date("2025-01-01")));
        assert!(!calendar.is_listed_holiday(make_date("2026-01-01")));
    }

    #[test]
    fn test_holiday_kind_serialization() {
        assert_eq!(serde_json::to_string(&HolidayKind::Fixed).unwrap(), "\"FIXED\"");
        assert_eq!(
            serde_json::to_string(&HolidayKind::Movable).unwrap(),
            "\"MOVABLE\""
        );
    }

    #[test]
    fn test_holiday_record_serialization() {
        let holiday = record("2025-12-25", "Navidad");
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"date\":\"2025-12-25\""));
        assert!(json.contains("\"kind\":\"FIXED\""));

        let deserialized: HolidayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, holiday);
    }
}
