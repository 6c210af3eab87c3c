//! Configuration for the settlement engine.
//!
//! Salary tiers and manual holiday additions are loaded from YAML files
//! and consumed as read-only lookup tables.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayAdditions, SalaryTier, TiersConfig};
