//! Engine configuration and the configured entry point.

use crate::error::VedicError;

use super::query::locate_bounded;
use super::subperiod::subdivide;
use super::timeline::{build_timeline, expand_levels};
use super::types::{
    DEFAULT_HORIZON_YEARS, DEFAULT_MAX_DEPTH, DashaPeriod, DashaSnapshot, DashaTimeline,
};

/// Tunables for timeline construction and location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct DashaConfig {
    /// Deepest chain `locate` may return (1 = mahadasha only).
    pub max_depth: u8,
    /// Years covered by a timeline when the caller gives no horizon.
    pub default_horizon_years: f64,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            default_horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl DashaConfig {
    /// Reject settings no query could satisfy.
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.max_depth == 0 {
            return Err(VedicError::InvalidInput("max_depth must be at least 1"));
        }
        if !(self.default_horizon_years.is_finite() && self.default_horizon_years > 0.0) {
            return Err(VedicError::InvalidInput(
                "default_horizon_years must be a finite positive number",
            ));
        }
        Ok(())
    }
}

/// Dasha operations bound to one validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashaEngine {
    config: DashaConfig,
}

impl DashaEngine {
    pub fn new(config: DashaConfig) -> Result<Self, VedicError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DashaConfig {
        &self.config
    }

    /// Build a timeline, falling back to the configured horizon.
    pub fn build_timeline(
        &self,
        moon_sidereal_lon: f64,
        birth_jd: f64,
        horizon_years: Option<f64>,
    ) -> Result<DashaTimeline, VedicError> {
        let horizon = horizon_years.unwrap_or(self.config.default_horizon_years);
        build_timeline(moon_sidereal_lon, birth_jd, horizon)
    }

    pub fn subdivide(&self, parent: &DashaPeriod) -> Result<Vec<DashaPeriod>, VedicError> {
        subdivide(parent)
    }

    /// Chain of active periods, `depth` at most `max_depth`.
    pub fn locate(
        &self,
        timeline: &DashaTimeline,
        target_jd: f64,
        depth: u8,
    ) -> Result<Vec<DashaPeriod>, VedicError> {
        locate_bounded(timeline, target_jd, depth, self.config.max_depth)
    }

    pub fn snapshot(
        &self,
        timeline: &DashaTimeline,
        query_jd: f64,
        depth: u8,
    ) -> Result<DashaSnapshot, VedicError> {
        let periods = self.locate(timeline, query_jd, depth)?;
        Ok(DashaSnapshot { query_jd, periods })
    }

    /// Materialize levels below the timeline; `max_level` stays under `max_depth`.
    pub fn expand_levels(
        &self,
        timeline: &DashaTimeline,
        max_level: u8,
    ) -> Result<Vec<Vec<DashaPeriod>>, VedicError> {
        if max_level >= self.config.max_depth {
            return Err(VedicError::InvalidInput(
                "expansion level must be below the configured max_depth",
            ));
        }
        expand_levels(timeline, max_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: f64 = 2_451_545.0;

    #[test]
    fn default_config_is_valid() {
        let cfg = DashaConfig::default();
        assert_eq!(cfg.max_depth, 5);
        assert!((cfg.default_horizon_years - 120.0).abs() < 1e-12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = DashaConfig {
            max_depth: 0,
            ..DashaConfig::default()
        };
        assert!(DashaEngine::new(cfg).is_err());
        let cfg = DashaConfig {
            default_horizon_years: -1.0,
            ..DashaConfig::default()
        };
        assert!(DashaEngine::new(cfg).is_err());
    }

    #[test]
    fn engine_uses_default_horizon() {
        let engine = DashaEngine::new(DashaConfig {
            max_depth: 3,
            default_horizon_years: 30.0,
        })
        .unwrap();
        let tl = engine.build_timeline(0.0, J2000, None).unwrap();
        assert!((tl.horizon_years() - 30.0).abs() < 1e-12);
        let explicit = engine.build_timeline(0.0, J2000, Some(30.0)).unwrap();
        assert_eq!(tl, explicit);
    }

    #[test]
    fn engine_depth_limit() {
        let engine = DashaEngine::new(DashaConfig {
            max_depth: 2,
            ..DashaConfig::default()
        })
        .unwrap();
        let tl = engine.build_timeline(10.0, J2000, None).unwrap();
        assert_eq!(engine.locate(&tl, J2000 + 100.0, 2).unwrap().len(), 2);
        assert!(matches!(
            engine.locate(&tl, J2000 + 100.0, 3),
            Err(VedicError::InvalidInput(_))
        ));
        assert!(engine.expand_levels(&tl, 1).is_ok());
        assert!(engine.expand_levels(&tl, 2).is_err());
    }

    #[test]
    fn deeper_than_named_levels() {
        let engine = DashaEngine::new(DashaConfig {
            max_depth: 8,
            ..DashaConfig::default()
        })
        .unwrap();
        let tl = engine.build_timeline(10.0, J2000, None).unwrap();
        let snap = engine.snapshot(&tl, J2000 + 4321.0, 8).unwrap();
        assert_eq!(snap.periods.len(), 8);
        assert_eq!(snap.periods[7].level, 7);
        assert!(snap.periods[7].dasha_level().is_none());
    }
}
