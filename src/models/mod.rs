//! Domain models for the settlement engine.

mod calculation_result;
mod day_record;
mod monthly_context;

pub use calculation_result::{CalculationResult, CapCrossing, CategoryAmount, CategoryTotals};
pub use day_record::{DayRecord, ShiftSlot, ShiftTimes};
pub use monthly_context::{
    MonthlyContext, OVERTIME_CAP_RATIO, STANDARD_MONTHLY_HOURS, SURCHARGE_THRESHOLD_MINUTES,
};
