//! Integration tests for the Vimshottari dasha engine.

use jyoti_vedic::dasha::{lord_years, next_lord};
use jyoti_vedic::{
    DAYS_PER_YEAR, DashaConfig, DashaEngine, DashaLevel, Graha, NAKSHATRA_SPAN_27, VedicError,
    build_timeline, dasha_balance, expand_levels, locate, locate_current, subdivide,
};

const BIRTH_JD: f64 = 2_447_892.937_5; // 1990-01-01T10:30:00Z

// ── End-to-end scenario ──────────────────────────────────────────────

/// Moon half-way through Rohini: Chandra with 5 of its 10 years left.
#[test]
fn mid_rohini_seventy_year_horizon() {
    let moon = 40.0 + NAKSHATRA_SPAN_27 / 2.0;
    let tl = build_timeline(moon, BIRTH_JD, 70.0).unwrap();

    let lords: Vec<Graha> = tl.periods().iter().map(|p| p.lord).collect();
    assert_eq!(
        lords,
        [
            Graha::Chandra,
            Graha::Mangal,
            Graha::Rahu,
            Graha::Guru,
            Graha::Shani,
            Graha::Buddh,
        ]
    );

    // cumulative ends at 5, 12, 30, 46, 65, 82 years after birth
    let expected_ends = [5.0, 12.0, 30.0, 46.0, 65.0, 82.0];
    for (p, years) in tl.periods().iter().zip(expected_ends) {
        let got = (p.end_jd - BIRTH_JD) / DAYS_PER_YEAR;
        assert!((got - years).abs() < 1e-9, "{} ends at {got}y", p.lord.name());
    }
    // The last period runs its full length past the horizon
    assert!((tl.periods()[5].duration_years() - 17.0).abs() < 1e-9);
    assert!(tl.periods()[0].is_birth_balance);
}

#[test]
fn birth_balance_quarter_through_rohini() {
    let moon = 3.0 * NAKSHATRA_SPAN_27 + 0.25 * NAKSHATRA_SPAN_27;
    let tl = build_timeline(moon, BIRTH_JD, 120.0).unwrap();
    let first = tl.periods()[0];
    assert_eq!(first.lord, Graha::Chandra);
    assert_eq!(first.start_jd, BIRTH_JD);
    assert!((first.duration_years() - 7.5).abs() < 1e-9);
    assert_eq!(tl.balance().nakshatra_index, 3);
    assert!((tl.balance().elapsed_fraction - 0.25).abs() < 1e-12);
}

// ── Timeline invariants ──────────────────────────────────────────────

#[test]
fn timeline_contiguous_and_cyclic() {
    for moon in [0.0, 17.3, 93.0, 181.81, 266.7, 359.99] {
        let tl = build_timeline(moon, BIRTH_JD, 240.0).unwrap();
        assert_eq!(tl.periods()[0].start_jd, BIRTH_JD);
        for w in tl.periods().windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd, "gap at moon {moon}");
            assert_eq!(w[1].lord, next_lord(w[0].lord));
            assert!((w[1].duration_years() - lord_years(w[1].lord)).abs() < 1e-9);
        }
        let covered = (tl.end_jd() - BIRTH_JD) / DAYS_PER_YEAR;
        assert!(covered >= 240.0);
        // one period fewer would not reach the horizon
        let before_last = tl.periods()[tl.len() - 1].start_jd;
        assert!((before_last - BIRTH_JD) / DAYS_PER_YEAR < 240.0);
    }
}

#[test]
fn build_is_deterministic() {
    let a = build_timeline(123.456, BIRTH_JD, 120.0).unwrap();
    let b = build_timeline(123.456, BIRTH_JD, 120.0).unwrap();
    assert_eq!(a, b);
    let sa = subdivide(&a.periods()[2]).unwrap();
    let sb = subdivide(&b.periods()[2]).unwrap();
    assert_eq!(sa, sb);
}

// ── Subdivision ──────────────────────────────────────────────────────

#[test]
fn weight_conservation_at_every_level() {
    let tl = build_timeline(311.0, BIRTH_JD, 120.0).unwrap();
    let mut parent = tl.periods()[1];
    for level in 1..=6u8 {
        let children = subdivide(&parent).unwrap();
        let total: f64 = children.iter().map(|c| c.duration_days()).sum();
        assert!((total - parent.duration_days()).abs() < 1e-6);
        assert_eq!(children[0].lord, parent.lord);
        assert_eq!(children[0].start_jd, parent.start_jd);
        assert_eq!(children[8].end_jd, parent.end_jd);
        assert!(children.iter().all(|c| c.level == level));
        parent = children[4];
    }
}

#[test]
fn expand_levels_agrees_with_locate() {
    let tl = build_timeline(100.0, BIRTH_JD, 120.0).unwrap();
    let levels = expand_levels(&tl, 2).unwrap();
    let query = BIRTH_JD + 1000.0;
    let chain = locate(&tl, query, 3).unwrap();
    for (lvl, active) in chain.iter().enumerate() {
        let found = levels[lvl]
            .iter()
            .find(|p| p.contains(query))
            .expect("level covers query");
        assert_eq!(found, active);
    }
}

// ── Location ─────────────────────────────────────────────────────────

#[test]
fn locate_is_total_over_the_timeline() {
    let tl = build_timeline(222.2, BIRTH_JD, 120.0).unwrap();
    let span = tl.end_jd() - tl.start_jd();
    for k in 0..500 {
        let t = tl.start_jd() + span * (k as f64) / 500.0;
        let chain = locate_current(&tl, t, 5).unwrap();
        assert_eq!(chain.len(), 5);
        for (lvl, p) in chain.iter().enumerate() {
            assert!(p.contains(t), "level {lvl} misses {t}");
        }
        assert_eq!(chain[4].dasha_level(), Some(DashaLevel::Pranadasha));
    }
}

#[test]
fn locate_at_internal_boundary_picks_later_period() {
    let tl = build_timeline(0.0, BIRTH_JD, 120.0).unwrap();
    let boundary = tl.periods()[0].end_jd;
    let chain = locate(&tl, boundary, 2).unwrap();
    assert_eq!(chain[0].lord, Graha::Shukra);
    assert_eq!(chain[1].lord, Graha::Shukra);
}

#[test]
fn locate_errors() {
    let tl = build_timeline(0.0, BIRTH_JD, 120.0).unwrap();
    assert!(matches!(
        locate(&tl, BIRTH_JD - 0.5, 1),
        Err(VedicError::OutOfRange { .. })
    ));
    assert!(matches!(
        locate(&tl, tl.end_jd() + 1.0, 2),
        Err(VedicError::OutOfRange { .. })
    ));
    assert!(matches!(
        locate(&tl, f64::INFINITY, 1),
        Err(VedicError::InvalidInput(_))
    ));
    assert!(matches!(
        locate(&tl, BIRTH_JD, 0),
        Err(VedicError::InvalidInput(_))
    ));
}

// ── Input validation ─────────────────────────────────────────────────

#[test]
fn invalid_inputs_rejected() {
    assert!(matches!(
        build_timeline(360.0, BIRTH_JD, 120.0),
        Err(VedicError::InvalidInput(_))
    ));
    assert!(matches!(
        build_timeline(f64::NAN, BIRTH_JD, 120.0),
        Err(VedicError::InvalidInput(_))
    ));
    assert!(matches!(
        build_timeline(10.0, f64::NAN, 120.0),
        Err(VedicError::InvalidInput(_))
    ));
    assert!(matches!(
        build_timeline(10.0, BIRTH_JD, 0.0),
        Err(VedicError::InvalidInput(_))
    ));
    assert!(matches!(
        dasha_balance(-0.01, BIRTH_JD),
        Err(VedicError::InvalidInput(_))
    ));
}

#[test]
fn configured_engine_respects_limits() {
    let engine = DashaEngine::new(DashaConfig {
        max_depth: 3,
        default_horizon_years: 60.0,
    })
    .unwrap();
    let tl = engine.build_timeline(50.0, BIRTH_JD, None).unwrap();
    assert!(tl.end_jd() - BIRTH_JD >= 60.0 * DAYS_PER_YEAR);
    assert_eq!(engine.locate(&tl, BIRTH_JD + 10.0, 3).unwrap().len(), 3);
    assert!(engine.locate(&tl, BIRTH_JD + 10.0, 4).is_err());
    let snap = engine.snapshot(&tl, BIRTH_JD + 10.0, 2).unwrap();
    assert_eq!(snap.periods[0], tl.periods()[0]);
}

/// Moon just short of the Bharani boundary: the Ketu balance rounds to a
/// sliver or to nothing, and every level must still expand.
#[test]
fn vanishing_birth_balance_expands() {
    let just_below = f64::from_bits(NAKSHATRA_SPAN_27.to_bits() - 1);
    for moon in [NAKSHATRA_SPAN_27 - 1e-9, just_below] {
        let tl = build_timeline(moon, BIRTH_JD, 120.0).unwrap();
        assert!(tl.periods()[0].duration_days() < 1e-6);

        let levels = expand_levels(&tl, 4).unwrap();
        assert_eq!(levels.len(), 5);
        for level in &levels[1..] {
            assert!(level.iter().all(|p| p.end_jd >= p.start_jd));
            for pair in level.windows(2) {
                assert_eq!(pair[0].end_jd, pair[1].start_jd);
            }
            assert_eq!(level.last().unwrap().end_jd, tl.end_jd());
        }

        let engine = DashaEngine::default();
        assert!(engine.expand_levels(&tl, 4).is_ok());
        let chain = locate(&tl, BIRTH_JD + 1000.0, 5).unwrap();
        assert_eq!(chain[0].lord, Graha::Shukra);
    }
}
