//! Civil time support for the dasha engine.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - `UtcTime`, the civil UTC instant accepted at the engine boundary
//!
//! The engine works in Julian Dates (UTC) throughout. No time-zone or
//! leap-second modelling happens here: callers hand in instants that are
//! already normalized to UTC.

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
};
pub use utc_time::UtcTime;
