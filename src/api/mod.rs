//! HTTP API module for the settlement engine.
//!
//! This module provides the REST endpoints consumed by the time-entry
//! front end: monthly settlement, standalone validation, and the two
//! read-only lookup tables (holidays and salary tiers).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DayRequest, ValidationRequest};
pub use response::{ApiError, HolidaysResponse, TiersResponse};
pub use state::AppState;
