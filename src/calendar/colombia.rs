//! Colombian national holiday generation.
//!
//! Three groups of holidays make up the national calendar: fixed dates,
//! dates shifted to the following Monday by Law 51 of 1983 (the Emiliani
//! Law), and Easter-based religious dates, some of which are themselves
//! Emiliani-shifted.

use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate};

use super::easter::easter_sunday;
use super::{HolidayKind, HolidayRecord};

/// Years covered by the generated calendar.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 2024..=2040;

/// Holidays observed on the same month and day every year.
const FIXED_HOLIDAYS: [(&str, u32, u32); 6] = [
    ("Año Nuevo", 1, 1),
    ("Día del Trabajo", 5, 1),
    ("Independencia de Colombia", 7, 20),
    ("Batalla de Boyacá", 8, 7),
    ("Inmaculada Concepción", 12, 8),
    ("Navidad", 12, 25),
];

/// Holidays moved to the following Monday when they fall on any other day.
const EMILIANI_HOLIDAYS: [(&str, u32, u32); 7] = [
    ("Reyes Magos", 1, 6),
    ("San José", 3, 19),
    ("San Pedro y San Pablo", 6, 29),
    ("Asunción de la Virgen", 8, 15),
    ("Día de la Raza", 10, 12),
    ("Todos los Santos", 11, 1),
    ("Independencia de Cartagena", 11, 11),
];

/// Easter-based holidays as day offsets from Easter Sunday. The flag marks
/// the ones that are additionally Emiliani-shifted.
const EASTER_OFFSET_HOLIDAYS: [(&str, i64, bool); 5] = [
    ("Jueves Santo", -3, false),
    ("Viernes Santo", -2, false),
    ("Ascensión del Señor", 43, true),
    ("Corpus Christi", 64, true),
    ("Sagrado Corazón de Jesús", 71, true),
];

/// Moves a date to the following Monday unless it already is one.
///
/// # Example
///
/// ```
/// use recargo_engine::calendar::shift_to_monday;
/// use chrono::NaiveDate;
///
/// // October 12th 2025 is a Sunday; the observed holiday is Monday the 13th
/// let raw = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
/// assert_eq!(shift_to_monday(raw), NaiveDate::from_ymd_opt(2025, 10, 13).unwrap());
/// ```
pub fn shift_to_monday(date: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(days_ahead))
}

/// Generates the Colombian national holidays for one year, in calendar
/// group order (fixed, Emiliani, Easter-based).
pub fn holidays_for_year(year: i32) -> Vec<HolidayRecord> {
    let mut holidays = Vec::with_capacity(18);

    for (name, month, day) in FIXED_HOLIDAYS {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("fixed holiday dates exist in every year");
        holidays.push(HolidayRecord {
            date,
            name: name.to_string(),
            kind: HolidayKind::Fixed,
        });
    }

    for (name, month, day) in EMILIANI_HOLIDAYS {
        let raw = NaiveDate::from_ymd_opt(year, month, day)
            .expect("Emiliani holiday dates exist in every year");
        holidays.push(HolidayRecord {
            date: shift_to_monday(raw),
            name: name.to_string(),
            kind: HolidayKind::Movable,
        });
    }

    let easter = easter_sunday(year);
    for (name, offset, emiliani) in EASTER_OFFSET_HOLIDAYS {
        let raw = easter + Duration::days(offset);
        let date = if emiliani { shift_to_monday(raw) } else { raw };
        holidays.push(HolidayRecord {
            date,
            name: name.to_string(),
            kind: HolidayKind::Movable,
        });
    }

    holidays
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn find<'a>(holidays: &'a [HolidayRecord], name: &str) -> &'a HolidayRecord {
        holidays
            .iter()
            .find(|h| h.name == name)
            .unwrap_or_else(|| panic!("missing holiday {name}"))
    }

    #[test]
    fn test_shift_to_monday_leaves_mondays_alone() {
        // 2025-06-02 is a Monday
        let monday = make_date("2025-06-02");
        assert_eq!(shift_to_monday(monday), monday);
    }

    #[test]
    fn test_shift_to_monday_from_every_other_weekday() {
        // 2025-09-02 (Tuesday) through 2025-09-07 (Sunday) all land on 09-08
        for day in 2..=7 {
            let date = NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
            assert_eq!(shift_to_monday(date), make_date("2025-09-08"));
        }
    }

    #[test]
    fn test_year_has_eighteen_holidays() {
        assert_eq!(holidays_for_year(2025).len(), 18);
    }

    #[test]
    fn test_fixed_holidays_2025() {
        let holidays = holidays_for_year(2025);
        assert_eq!(find(&holidays, "Año Nuevo").date, make_date("2025-01-01"));
        assert_eq!(find(&holidays, "Navidad").date, make_date("2025-12-25"));
        assert_eq!(find(&holidays, "Navidad").kind, HolidayKind::Fixed);
    }

    #[test]
    fn test_holy_week_2024() {
        // Easter 2024 is March 31st; the verified migration fixtures
        let holidays = holidays_for_year(2024);
        assert_eq!(find(&holidays, "Jueves Santo").date, make_date("2024-03-28"));
        assert_eq!(find(&holidays, "Viernes Santo").date, make_date("2024-03-29"));
    }

    #[test]
    fn test_emiliani_shifted_easter_holidays_2025() {
        let holidays = holidays_for_year(2025);
        assert_eq!(
            find(&holidays, "Ascensión del Señor").date,
            make_date("2025-06-02")
        );
        assert_eq!(find(&holidays, "Corpus Christi").date, make_date("2025-06-23"));
        assert_eq!(
            find(&holidays, "Sagrado Corazón de Jesús").date,
            make_date("2025-06-30")
        );
    }

    #[test]
    fn test_dia_de_la_raza_2025_shifts_from_sunday() {
        let holidays = holidays_for_year(2025);
        assert_eq!(find(&holidays, "Día de la Raza").date, make_date("2025-10-13"));
        assert_eq!(find(&holidays, "Día de la Raza").kind, HolidayKind::Movable);
    }

    #[test]
    fn test_movable_holidays_fall_on_mondays() {
        for year in SUPPORTED_YEARS {
            for holiday in holidays_for_year(year) {
                let emiliani = EMILIANI_HOLIDAYS.iter().any(|(n, _, _)| *n == holiday.name)
                    || EASTER_OFFSET_HOLIDAYS
                        .iter()
                        .any(|(n, _, shifted)| *n == holiday.name && *shifted);
                if emiliani {
                    assert_eq!(
                        holiday.date.weekday(),
                        Weekday::Mon,
                        "{} {}",
                        holiday.name,
                        holiday.date
                    );
                }
            }
        }
    }
}
