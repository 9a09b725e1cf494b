//! Vimshottari dasha periods and sidereal sign/mansion classification.
//!
//! This crate provides:
//! - Rashi (zodiac sign) lookup with DMS, lordship, element and modality
//! - Nakshatra (lunar mansion) lookup with pada, lord, deity and gana
//! - The Vimshottari dasha engine: birth balance, mahadasha timeline,
//!   recursive sub-periods and point-in-time location
//!
//! Inputs are sidereal longitudes in degrees and Julian Dates in UTC. The
//! crate does not compute planetary positions or apply an ayanamsha.

pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use dasha::{
    DAYS_PER_YEAR, DashaBalance, DashaConfig, DashaEngine, DashaLevel, DashaPeriod,
    DashaSnapshot, DashaTimeline, VIMSHOTTARI_SEQUENCE, build_timeline, build_timeline_utc,
    dasha_balance, expand_levels, find_active_period, locate, locate_current, snapshot,
    subdivide, years_to_days,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, Gana, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    abhijit_position, classify_longitude, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Modality, Rashi, RashiInfo, deg_to_dms, dms_to_deg,
    rashi_from_longitude,
};
pub use util::normalize_360;
