//! Structural validation of entered shift times.
//!
//! Each day is checked independently before settlement: incomplete pairs,
//! zero-duration shifts and overlapping shifts are errors; an exit before
//! its entry is not an error but a cross-midnight warning, and the shift
//! wraps onto the next day. All applicable issues are reported, not just
//! the first one found.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayRecord, ShiftSlot};

/// A structural problem with one day's entered times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// An exit time was entered without an entry time.
    MissingEntry {
        /// The shift missing its entry.
        shift: ShiftSlot,
    },
    /// An entry time was entered without an exit time.
    MissingExit {
        /// The shift missing its exit.
        shift: ShiftSlot,
    },
    /// Entry and exit are identical.
    ZeroDurationShift {
        /// The shift with identical times.
        shift: ShiftSlot,
    },
    /// The two shifts of the day overlap in time.
    OverlappingShifts,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingEntry { shift } => {
                write!(f, "{shift} has an exit time but no entry time")
            }
            ValidationIssue::MissingExit { shift } => {
                write!(f, "{shift} has an entry time but no exit time")
            }
            ValidationIssue::ZeroDurationShift { shift } => {
                write!(f, "{shift} has identical entry and exit times")
            }
            ValidationIssue::OverlappingShifts => write!(f, "the two shifts overlap"),
        }
    }
}

/// The issues found on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayValidation {
    /// The offending date.
    pub date: NaiveDate,
    /// Every issue found on that date.
    pub issues: Vec<ValidationIssue>,
}

/// A non-blocking notice surfaced alongside validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// A stable code for programmatic handling.
    pub code: String,
    /// The affected date.
    pub date: NaiveDate,
    /// The affected shift.
    pub shift: ShiftSlot,
    /// A human-readable description.
    pub message: String,
}

impl ValidationWarning {
    /// Builds the cross-midnight notice for a shift whose exit precedes
    /// its entry.
    pub fn cross_midnight(date: NaiveDate, shift: ShiftSlot) -> Self {
        Self {
            code: "CROSS_MIDNIGHT".to_string(),
            date,
            shift,
            message: format!("{shift} on {date} ends before it starts; treated as ending the next day"),
        }
    }
}

/// The outcome of validating a whole month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Days with at least one blocking issue, in date order.
    pub errors: Vec<DayValidation>,
    /// Non-blocking warnings, in date order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Returns true when no day has a blocking issue.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Builds a one-line summary listing every offending date with its
    /// reasons.
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            return "all days valid".to_string();
        }
        let days: Vec<String> = self
            .errors
            .iter()
            .map(|day| {
                let reasons: Vec<String> = day.issues.iter().map(ToString::to_string).collect();
                format!("{}: {}", day.date, reasons.join(", "))
            })
            .collect();
        format!(
            "{} day(s) with invalid shifts: {}",
            self.errors.len(),
            days.join("; ")
        )
    }
}

/// Validates one day, returning its blocking issues and warnings.
///
/// Never mutates the record. The rules are evaluated independently so a
/// day can report several issues at once.
pub fn validate_day(day: &DayRecord) -> (Vec<ValidationIssue>, Vec<ValidationWarning>) {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    for slot in ShiftSlot::BOTH {
        let times = day.shift(slot);
        match (times.entry, times.exit) {
            (Some(_), None) => issues.push(ValidationIssue::MissingExit { shift: slot }),
            (None, Some(_)) => issues.push(ValidationIssue::MissingEntry { shift: slot }),
            (Some(entry), Some(exit)) if entry == exit => {
                issues.push(ValidationIssue::ZeroDurationShift { shift: slot });
            }
            (Some(entry), Some(exit)) if exit < entry => {
                warnings.push(ValidationWarning::cross_midnight(day.date, slot));
            }
            _ => {}
        }
    }

    // Overlap is only decidable once both shifts are complete. Entries
    // stay anchored to the day; exits wrap to the next day when earlier
    // than their entry. A second shift starting exactly when the first
    // ends is continuous, not overlapping.
    if day.first.is_complete() && day.second.is_complete() {
        if let (Some((start1, end1)), Some((start2, end2))) =
            (day.first.window(day.date), day.second.window(day.date))
        {
            let back_to_back = day.first.exit == day.second.entry;
            if !back_to_back && start1 < end2 && start2 < end1 {
                issues.push(ValidationIssue::OverlappingShifts);
            }
        }
    }

    (issues, warnings)
}

/// Validates every day of a month and aggregates the outcome.
pub fn validate_month(days: &[DayRecord]) -> ValidationReport {
    let mut ordered: Vec<&DayRecord> = days.iter().collect();
    ordered.sort_by_key(|d| d.date);

    let mut report = ValidationReport::default();
    for day in ordered {
        let (issues, warnings) = validate_day(day);
        if !issues.is_empty() {
            report.errors.push(DayValidation {
                date: day.date,
                issues,
            });
        }
        report.warnings.extend(warnings);
    }
    report
}
