//! Vimshottari dasha (planetary period) engine.
//!
//! Given the sidereal Moon longitude at birth, builds a contiguous timeline
//! of mahadashas, subdivides any period into 9 sub-periods to any depth,
//! and locates the chain of periods active at an instant.
//!
//! Leaf-first layout:
//! - `sequence`: fixed lord order and weights
//! - `balance`: remaining first period from the Moon's nakshatra progress
//! - `subperiod`: proportional 9-way split
//! - `timeline`: mahadasha run to a horizon, level expansion
//! - `query`: point location
//! - `config`: `DashaConfig` and the configured `DashaEngine`

pub mod balance;
pub mod config;
pub mod query;
pub mod sequence;
pub mod subperiod;
pub mod timeline;
pub mod types;

pub use balance::{DashaBalance, dasha_balance};
pub use config::{DashaConfig, DashaEngine};
pub use query::{find_active_period, locate, locate as locate_current, snapshot};
pub use sequence::{
    TOTAL_YEARS, VIMSHOTTARI_SEQUENCE, lord_years, next_lord, sequence_position, starting_lord,
};
pub use subperiod::{snap_last_child_end, subdivide};
pub use timeline::{
    MAX_TIMELINE_PERIODS, build_timeline, build_timeline_utc, complete_level, expand_levels,
};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_HORIZON_YEARS, DEFAULT_MAX_DEPTH, DashaLevel, DashaPeriod,
    DashaSnapshot, DashaTimeline, MAX_PERIODS_PER_LEVEL, days_to_years, years_to_days,
};
