//! The monthly settlement fold.
//!
//! Consumes the classified minute stream of the whole month in
//! chronological order (date ascending, shift 1 then shift 2) and folds it
//! into a [`CalculationResult`]. The fold is strictly sequential: which
//! category a minute lands in depends on the global running minute count,
//! and whether its money is paid depends on the running overtime accrual.

use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationResult, CapCrossing, CategoryAmount, CategoryTotals, DayRecord, MonthlyContext,
    SURCHARGE_THRESHOLD_MINUTES, ShiftSlot,
};

use super::minute_classifier::{MinuteClassifier, MinuteMark};
use super::rate_table::{PayCategory, Regime};
use super::validator::validate_month;

/// Per-category minute counters, indexed by category.
#[derive(Debug, Default)]
struct MinuteTally([i64; PayCategory::ALL.len()]);

impl MinuteTally {
    fn add(&mut self, category: PayCategory) {
        self.0[category as usize] += 1;
    }

    fn get(&self, category: PayCategory) -> i64 {
        self.0[category as usize]
    }
}

/// The mutable state threaded through the fold. Scoped to one settlement
/// call; nothing survives between runs.
#[derive(Debug, Default)]
struct RunningTotals {
    total_minutes: i64,
    tally: MinuteTally,
    overtime_accrued: f64,
    cap_reached_at: Option<CapCrossing>,
    compensatory_minutes: i64,
}

impl RunningTotals {
    fn observe(&mut self, mark: MinuteMark, minute_rate: f64, cap: f64) {
        self.total_minutes += 1;

        let regime = if self.total_minutes <= SURCHARGE_THRESHOLD_MINUTES {
            Regime::Surcharge
        } else {
            Regime::Overtime
        };

        let Some(category) = PayCategory::classify(regime, mark.holiday, mark.period) else {
            return;
        };
        self.tally.add(category);

        if category.is_overtime() {
            let minute_value = minute_rate * category.multiplier();
            if self.overtime_accrued < cap {
                self.overtime_accrued += minute_value;
                if self.overtime_accrued >= cap && self.cap_reached_at.is_none() {
                    self.cap_reached_at = Some(CapCrossing {
                        date: mark.at.date(),
                        time: mark.at.time(),
                    });
                }
            } else {
                // cap already met before this minute: its work converts to
                // compensatory time instead of money
                self.compensatory_minutes += 1;
            }
        }
    }
}

fn category_amount(tally: &MinuteTally, minute_rate: f64, category: PayCategory) -> CategoryAmount {
    let minutes = tally.get(category);
    CategoryAmount {
        minutes,
        amount: minute_rate * minutes as f64 * category.multiplier(),
    }
}

/// Settles one month.
///
/// Validates every day first and refuses the whole month when any day has
/// a blocking issue; no partial results are produced. Cross-midnight
/// warnings do not block and are carried into the result.
///
/// Settlement is a pure function of its inputs: the same context and
/// calendar always produce an identical result.
pub fn calculate(
    ctx: &MonthlyContext,
    calendar: &HolidayCalendar,
) -> EngineResult<CalculationResult> {
    let report = validate_month(&ctx.days);
    if !report.is_valid() {
        return Err(EngineError::ValidationFailed { report });
    }

    let minute_rate = ctx.minute_rate();
    let cap = ctx.overtime_cap();

    let mut days: Vec<&DayRecord> = ctx.days.iter().collect();
    days.sort_by_key(|d| d.date);

    let mut state = RunningTotals::default();
    for day in days {
        let holiday = calendar.is_non_working(day.date);
        for slot in ShiftSlot::BOTH {
            let times = day.shift(slot);
            // incomplete shifts never reach this point on the primary
            // path; skipping them here keeps the fold total-safe
            let (Some(entry), Some(exit)) = (times.entry, times.exit) else {
                continue;
            };
            for mark in MinuteClassifier::new(day.date, entry, exit, holiday) {
                state.observe(mark, minute_rate, cap);
            }
        }
    }

    let totals = CategoryTotals {
        night_surcharge_weekday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::NightSurchargeWeekday,
        ),
        day_surcharge_holiday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::DaySurchargeHoliday,
        ),
        night_surcharge_holiday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::NightSurchargeHoliday,
        ),
        overtime_day_weekday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::OvertimeDayWeekday,
        ),
        overtime_night_weekday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::OvertimeNightWeekday,
        ),
        overtime_day_holiday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::OvertimeDayHoliday,
        ),
        overtime_night_holiday: category_amount(
            &state.tally,
            minute_rate,
            PayCategory::OvertimeNightHoliday,
        ),
    };

    let total_surcharge_pay = totals.surcharge_money();
    let overtime_pay_calculated = totals.overtime_money();
    let overtime_pay_payable = overtime_pay_calculated.min(cap);
    let normal_minutes = totals.normal_minutes(state.total_minutes);

    Ok(CalculationResult {
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        total_minutes_worked: state.total_minutes,
        normal_minutes,
        totals,
        total_surcharge_pay,
        overtime_pay_calculated,
        overtime_pay_payable,
        total_payable: total_surcharge_pay + overtime_pay_payable,
        compensatory_hours: state.compensatory_minutes / 60,
        cap_reached_at: state.cap_reached_at,
        warnings: report.warnings,
    })
}
