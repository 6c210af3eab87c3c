//! Request types for the settlement engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/validate` endpoints. Clock times arrive as `HH:mm` strings the
//! way the time-entry front end collects them; empty strings and missing
//! fields both mean "not entered".

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayRecord, ShiftTimes};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The salary tier whose monthly salary drives the wage rates.
    pub salary_tier: String,
    /// The entered day records of the month.
    #[serde(default)]
    pub days: Vec<DayRequest>,
}

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The entered day records to check.
    #[serde(default)]
    pub days: Vec<DayRequest>,
}

/// One day of entered clock times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// The calendar date.
    pub date: NaiveDate,
    /// Entry time of the first shift, as `HH:mm`.
    #[serde(default)]
    pub entry1: Option<String>,
    /// Exit time of the first shift, as `HH:mm`.
    #[serde(default)]
    pub exit1: Option<String>,
    /// Entry time of the second shift, as `HH:mm`.
    #[serde(default)]
    pub entry2: Option<String>,
    /// Exit time of the second shift, as `HH:mm`.
    #[serde(default)]
    pub exit2: Option<String>,
}

impl DayRequest {
    /// Creates a day request with no times entered.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            entry1: None,
            exit1: None,
            entry2: None,
            exit2: None,
        }
    }

    /// Converts the entered strings into a typed [`DayRecord`].
    ///
    /// Empty or missing fields become absent times; a value that does not
    /// match `HH:mm` is rejected so it can never silently distort a total
    /// downstream.
    pub fn into_day_record(&self) -> EngineResult<DayRecord> {
        Ok(DayRecord {
            date: self.date,
            first: ShiftTimes {
                entry: parse_clock(self.date, "entry1", &self.entry1)?,
                exit: parse_clock(self.date, "exit1", &self.exit1)?,
            },
            second: ShiftTimes {
                entry: parse_clock(self.date, "entry2", &self.entry2)?,
                exit: parse_clock(self.date, "exit2", &self.exit2)?,
            },
        })
    }
}

/// Converts a batch of day requests, stopping at the first malformed
/// value.
pub(super) fn convert_days(days: &[DayRequest]) -> EngineResult<Vec<DayRecord>> {
    days.iter().map(DayRequest::into_day_record).collect()
}

fn parse_clock(
    date: NaiveDate,
    field: &'static str,
    value: &Option<String>,
) -> EngineResult<Option<NaiveTime>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M")
            .map(Some)
            .map_err(|_| EngineError::InvalidTimeValue {
                field: format!("{date} {field}"),
                value: raw.to_string(),
            }),
    }
}
