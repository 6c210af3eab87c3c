//! The static pay category table.
//!
//! Seven categories cover every minute that earns a premium: three
//! surcharge categories under the 190-hour threshold and four overtime
//! categories above it. Ordinary weekday daytime minutes under the
//! threshold belong to no category; they are already covered by the base
//! salary. The multipliers are fixed by law, not configuration.

use serde::{Deserialize, Serialize};

use super::minute_classifier::DayPeriod;

/// Whether a minute falls before or after the 190-hour monthly boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// At or under 190 accumulated hours: surcharge categories apply.
    Surcharge,
    /// Beyond 190 accumulated hours: overtime categories apply.
    Overtime,
}

/// A pay category with a fixed percentage multiplier.
///
/// # Example
///
/// ```
/// use recargo_engine::calculation::PayCategory;
///
/// assert_eq!(PayCategory::NightSurchargeWeekday.multiplier(), 0.35);
/// assert_eq!(PayCategory::OvertimeNightHoliday.multiplier(), 2.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Night surcharge on ordinary days (Mon to Sat), 35%.
    NightSurchargeWeekday,
    /// Day surcharge on Sundays and holidays, 200%.
    DaySurchargeHoliday,
    /// Night surcharge on Sundays and holidays, 235%.
    NightSurchargeHoliday,
    /// Daytime overtime on ordinary days, 125%.
    OvertimeDayWeekday,
    /// Night overtime on ordinary days, 175%.
    OvertimeNightWeekday,
    /// Daytime overtime on Sundays and holidays, 225%.
    OvertimeDayHoliday,
    /// Night overtime on Sundays and holidays, 275%.
    OvertimeNightHoliday,
}

impl PayCategory {
    /// All seven categories, in declaration order.
    pub const ALL: [PayCategory; 7] = [
        PayCategory::NightSurchargeWeekday,
        PayCategory::DaySurchargeHoliday,
        PayCategory::NightSurchargeHoliday,
        PayCategory::OvertimeDayWeekday,
        PayCategory::OvertimeNightWeekday,
        PayCategory::OvertimeDayHoliday,
        PayCategory::OvertimeNightHoliday,
    ];

    /// The percentage multiplier applied against the per-minute wage.
    pub fn multiplier(self) -> f64 {
        match self {
            PayCategory::NightSurchargeWeekday => 0.35,
            PayCategory::DaySurchargeHoliday => 2.00,
            PayCategory::NightSurchargeHoliday => 2.35,
            PayCategory::OvertimeDayWeekday => 1.25,
            PayCategory::OvertimeNightWeekday => 1.75,
            PayCategory::OvertimeDayHoliday => 2.25,
            PayCategory::OvertimeNightHoliday => 2.75,
        }
    }

    /// Returns true for the four overtime categories.
    pub fn is_overtime(self) -> bool {
        matches!(
            self,
            PayCategory::OvertimeDayWeekday
                | PayCategory::OvertimeNightWeekday
                | PayCategory::OvertimeDayHoliday
                | PayCategory::OvertimeNightHoliday
        )
    }

    /// Classifies one minute into its category.
    ///
    /// The match is exhaustive over regime, holiday flag and time of day;
    /// `None` is the one combination that earns nothing, an ordinary
    /// weekday daytime minute inside the base 190 hours.
    pub fn classify(regime: Regime, holiday: bool, period: DayPeriod) -> Option<PayCategory> {
        match (regime, holiday, period) {
            (Regime::Surcharge, false, DayPeriod::Day) => None,
            (Regime::Surcharge, false, DayPeriod::Night) => {
                Some(PayCategory::NightSurchargeWeekday)
            }
            (Regime::Surcharge, true, DayPeriod::Day) => Some(PayCategory::DaySurchargeHoliday),
            (Regime::Surcharge, true, DayPeriod::Night) => Some(PayCategory::NightSurchargeHoliday),
            (Regime::Overtime, false, DayPeriod::Day) => Some(PayCategory::OvertimeDayWeekday),
            (Regime::Overtime, false, DayPeriod::Night) => Some(PayCategory::OvertimeNightWeekday),
            (Regime::Overtime, true, DayPeriod::Day) => Some(PayCategory::OvertimeDayHoliday),
            (Regime::Overtime, true, DayPeriod::Night) => Some(PayCategory::OvertimeNightHoliday),
        }
    }
}
