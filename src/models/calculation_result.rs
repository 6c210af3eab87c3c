//! Settlement result models.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs of one monthly settlement run:
//! per-category minute counts and money, the capped overtime payout, and
//! the compensatory time produced beyond the cap.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::SURCHARGE_THRESHOLD_MINUTES;
use crate::calculation::{PayCategory, ValidationWarning};

/// Minutes worked and money earned in one pay category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    /// The number of whole minutes classified into this category.
    pub minutes: i64,
    /// The monetary value of those minutes at the category multiplier.
    pub amount: f64,
}

/// Per-category totals for one settled month.
///
/// One [`CategoryAmount`] per pay category. Ordinary weekday daytime
/// minutes under the 190-hour threshold have no bucket here; they are
/// derived as a remainder by [`CategoryTotals::normal_minutes`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Night surcharge on ordinary days (Mon to Sat).
    pub night_surcharge_weekday: CategoryAmount,
    /// Day surcharge on Sundays and holidays.
    pub day_surcharge_holiday: CategoryAmount,
    /// Night surcharge on Sundays and holidays.
    pub night_surcharge_holiday: CategoryAmount,
    /// Daytime overtime on ordinary days.
    pub overtime_day_weekday: CategoryAmount,
    /// Night overtime on ordinary days.
    pub overtime_night_weekday: CategoryAmount,
    /// Daytime overtime on Sundays and holidays.
    pub overtime_day_holiday: CategoryAmount,
    /// Night overtime on Sundays and holidays.
    pub overtime_night_holiday: CategoryAmount,
}

impl CategoryTotals {
    /// Returns the totals bucket for the given category.
    pub fn get(&self, category: PayCategory) -> &CategoryAmount {
        match category {
            PayCategory::NightSurchargeWeekday => &self.night_surcharge_weekday,
            PayCategory::DaySurchargeHoliday => &self.day_surcharge_holiday,
            PayCategory::NightSurchargeHoliday => &self.night_surcharge_holiday,
            PayCategory::OvertimeDayWeekday => &self.overtime_day_weekday,
            PayCategory::OvertimeNightWeekday => &self.overtime_night_weekday,
            PayCategory::OvertimeDayHoliday => &self.overtime_day_holiday,
            PayCategory::OvertimeNightHoliday => &self.overtime_night_holiday,
        }
    }

    /// Total minutes in the three surcharge categories.
    pub fn surcharge_minutes(&self) -> i64 {
        self.night_surcharge_weekday.minutes
            + self.day_surcharge_holiday.minutes
            + self.night_surcharge_holiday.minutes
    }

    /// Total surcharge money. Never subject to the overtime cap.
    pub fn surcharge_money(&self) -> f64 {
        self.night_surcharge_weekday.amount
            + self.day_surcharge_holiday.amount
            + self.night_surcharge_holiday.amount
    }

    /// Total minutes in the four overtime categories.
    pub fn overtime_minutes(&self) -> i64 {
        self.overtime_day_weekday.minutes
            + self.overtime_night_weekday.minutes
            + self.overtime_day_holiday.minutes
            + self.overtime_night_holiday.minutes
    }

    /// Total overtime money before the cap is applied.
    pub fn overtime_money(&self) -> f64 {
        self.overtime_day_weekday.amount
            + self.overtime_night_weekday.amount
            + self.overtime_day_holiday.amount
            + self.overtime_night_holiday.amount
    }

    /// Ordinary minutes under the threshold that earned no surcharge,
    /// derived as a remainder rather than tracked by a separate counter.
    pub fn normal_minutes(&self, total_minutes_worked: i64) -> i64 {
        total_minutes_worked.min(SURCHARGE_THRESHOLD_MINUTES) - self.surcharge_minutes()
    }
}

/// The date and minute at which the overtime cap was first crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapCrossing {
    /// The calendar date of the crossing minute.
    pub date: NaiveDate,
    /// The time of day of the crossing minute.
    pub time: NaiveTime,
}

/// The complete result of one monthly settlement.
///
/// A pure function of the day records and the monthly context: settling
/// the same inputs twice yields identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// Total worked minutes across the month, regardless of category.
    pub total_minutes_worked: i64,
    /// Ordinary minutes under the threshold that earned no surcharge.
    pub normal_minutes: i64,
    /// Minutes and money per pay category.
    pub totals: CategoryTotals,
    /// Total surcharge money (uncapped).
    pub total_surcharge_pay: f64,
    /// Overtime money as calculated from the category totals.
    pub overtime_pay_calculated: f64,
    /// Overtime money actually payable after applying the 50% cap.
    pub overtime_pay_payable: f64,
    /// Surcharge money plus payable overtime money.
    pub total_payable: f64,
    /// Whole hours of compensatory time earned beyond the cap.
    pub compensatory_hours: i64,
    /// When the overtime cap was first crossed, if it was.
    pub cap_reached_at: Option<CapCrossing>,
    /// Non-blocking warnings surfaced during validation.
    pub warnings: Vec<ValidationWarning>,
}
