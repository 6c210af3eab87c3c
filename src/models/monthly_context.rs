//! Monthly settlement context.
//!
//! This module defines the [`MonthlyContext`] that scopes one settlement
//! run: the base monthly salary and the day records of the active month,
//! plus the derived wage rates and the overtime cap.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DayRecord;

/// Legal standard monthly hours used as the wage divisor and as the
/// boundary between the surcharge and overtime regimes.
pub const STANDARD_MONTHLY_HOURS: i64 = 190;

/// The surcharge/overtime boundary expressed in minutes.
pub const SURCHARGE_THRESHOLD_MINUTES: i64 = STANDARD_MONTHLY_HOURS * 60;

/// Fraction of the monthly salary that caps the overtime money paid out.
pub const OVERTIME_CAP_RATIO: f64 = 0.5;

/// The scope of one settlement run.
///
/// Day records are folded in calendar order; the 190-hour threshold and
/// the overtime cap are crossed in date-then-shift order.
///
/// # Example
///
/// ```
/// use recargo_engine::models::MonthlyContext;
///
/// let ctx = MonthlyContext::new(2_054_865.0, vec![]);
/// assert_eq!(ctx.hourly_rate(), 2_054_865.0 / 190.0);
/// assert_eq!(ctx.overtime_cap(), 2_054_865.0 * 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyContext {
    /// The base monthly salary of the selected tier.
    pub base_monthly_salary: f64,
    /// The day records of the active month, keyed by date.
    pub days: Vec<DayRecord>,
}

impl MonthlyContext {
    /// Creates a context from a salary and a set of day records.
    pub fn new(base_monthly_salary: f64, days: Vec<DayRecord>) -> Self {
        Self {
            base_monthly_salary,
            days,
        }
    }

    /// Creates a context holding one empty day record per day of the
    /// given month, the state a freshly selected month starts in.
    pub fn for_month(base_monthly_salary: f64, year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(DayRecord::empty)
            .collect();
        Some(Self::new(base_monthly_salary, days))
    }

    /// The derived hourly wage: salary divided by the 190 standard hours.
    pub fn hourly_rate(&self) -> f64 {
        self.base_monthly_salary / STANDARD_MONTHLY_HOURS as f64
    }

    /// The derived per-minute wage.
    pub fn minute_rate(&self) -> f64 {
        self.hourly_rate() / 60.0
    }

    /// The monetary cap on overtime pay for the month.
    pub fn overtime_cap(&self) -> f64 {
        self.base_monthly_salary * OVERTIME_CAP_RATIO
    }
}
