//! Error types for Vedic calculations.

use jyoti_time::TimeError;

/// Errors from classification and dasha computation.
///
/// Every variant is surfaced to the immediate caller. The engine never
/// clamps or truncates a result to hide one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from civil time validation or parsing.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Input rejected before any computation (longitude, instant, horizon, depth).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A period with zero, negative or non-finite duration was subdivided.
    #[error("invalid interval: [{start_jd}, {end_jd}) has no positive duration")]
    InvalidInterval { start_jd: f64, end_jd: f64 },
    /// A query instant lies outside the span covered by the timeline.
    #[error("JD {query_jd} is outside the timeline span [{start_jd}, {end_jd})")]
    OutOfRange {
        query_jd: f64,
        start_jd: f64,
        end_jd: f64,
    },
}
