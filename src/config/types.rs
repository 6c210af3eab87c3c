//! Configuration file structures.

use serde::{Deserialize, Serialize};

use crate::calendar::HolidayRecord;

/// A salary tier: a role name and its monthly base salary.
///
/// # Example
///
/// ```
/// use recargo_engine::config::SalaryTier;
///
/// let tier = SalaryTier {
///     name: "BOMBERO".to_string(),
///     monthly_salary: 2_054_865.0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryTier {
    /// The role name, matched exactly by lookups.
    pub name: String,
    /// The monthly base salary for the role.
    pub monthly_salary: f64,
}

/// Structure of `tiers.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    /// The configured salary tiers.
    pub tiers: Vec<SalaryTier>,
}

/// Structure of the optional `holidays.yaml` with manual additions to the
/// generated calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayAdditions {
    /// Holiday entries added on top of the generated list.
    pub holidays: Vec<HolidayRecord>,
}
