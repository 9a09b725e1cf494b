//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// The classifiers reject longitudes outside [0, 360); callers holding a raw
/// angle run it through this first.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-20 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Reject anything that is not a finite longitude in [0, 360).
pub(crate) fn check_longitude(lon: f64) -> Result<f64, crate::error::VedicError> {
    if (0.0..360.0).contains(&lon) {
        Ok(lon)
    } else {
        Err(crate::error::VedicError::InvalidInput(
            "sidereal longitude must be a finite value in [0, 360)",
        ))
    }
}
