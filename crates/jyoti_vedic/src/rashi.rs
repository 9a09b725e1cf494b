//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Given a sidereal longitude we
//! identify the rashi it falls in and express the position within the sign
//! as degrees-minutes-seconds.

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::util::check_longitude;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element (tattva) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Modality of a rashi: Chara (movable), Sthira (fixed), Dwiswabhava (dual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Movable => "Movable",
            Self::Fixed => "Fixed",
            Self::Dual => "Dual",
        }
    }
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi at a 0-based index, wrapping past Meena.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Planetary lord of the sign.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    /// Element cycles Fire, Earth, Air, Water from Mesha.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Modality cycles Movable, Fixed, Dual from Mesha.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// The sign 180 deg away (7th from this one).
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// The trine group (1st, 5th, 9th): three signs sharing an element.
    pub const fn trines(self) -> [Self; 3] {
        let i = self.index();
        [self, Self::from_index(i + 4), Self::from_index(i + 8)]
    }

    /// The two signs in square (4th and 10th).
    pub const fn squares(self) -> [Self; 2] {
        let i = self.index();
        [Self::from_index(i + 3), Self::from_index(i + 9)]
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
/// Fails with `InvalidInput` outside [0, 360); normalize with
/// [`crate::util::normalize_360`] first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Result<RashiInfo, VedicError> {
    let lon = check_longitude(sidereal_lon_deg)?;
    let rashi_idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN;
    let rashi = ALL_RASHIS[rashi_idx as usize];
    let dms = deg_to_dms(degrees_in_rashi);

    Ok(RashiInfo {
        rashi,
        rashi_index: rashi_idx,
        dms,
        degrees_in_rashi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
        }
    }

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!(d.seconds.abs() < 1e-10);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = rashi_from_longitude(lon).unwrap();
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5).unwrap();
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn rashi_last_sign() {
        let info = rashi_from_longitude(359.99).unwrap();
        assert_eq!(info.rashi, Rashi::Meena);
        assert_eq!(info.rashi_index, 11);
    }

    #[test]
    fn rashi_rejects_out_of_range() {
        assert!(matches!(
            rashi_from_longitude(360.0),
            Err(VedicError::InvalidInput(_))
        ));
        assert!(rashi_from_longitude(-10.0).is_err());
        assert!(rashi_from_longitude(f64::NAN).is_err());
    }

    #[test]
    fn elements_and_modalities() {
        assert_eq!(Rashi::Mesha.element(), Element::Fire);
        assert_eq!(Rashi::Vrishabha.element(), Element::Earth);
        assert_eq!(Rashi::Mithuna.element(), Element::Air);
        assert_eq!(Rashi::Karka.element(), Element::Water);
        assert_eq!(Rashi::Meena.element(), Element::Water);
        assert_eq!(Rashi::Makara.modality(), Modality::Movable);
        assert_eq!(Rashi::Kumbha.modality(), Modality::Fixed);
        assert_eq!(Rashi::Meena.modality(), Modality::Dual);
    }

    #[test]
    fn trines_share_element() {
        for r in ALL_RASHIS {
            let [a, b, c] = r.trines();
            assert_eq!(a, r);
            assert_eq!(a.element(), b.element());
            assert_eq!(b.element(), c.element());
        }
    }

    #[test]
    fn opposite_and_squares() {
        assert_eq!(Rashi::Mesha.opposite(), Rashi::Tula);
        assert_eq!(Rashi::Meena.opposite(), Rashi::Kanya);
        assert_eq!(Rashi::Mesha.squares(), [Rashi::Karka, Rashi::Makara]);
        assert_eq!(Rashi::Kumbha.squares(), [Rashi::Vrischika, Rashi::Vrishabha]);
    }

    #[test]
    fn lord_delegates_to_table() {
        assert_eq!(Rashi::Simha.lord(), Graha::Surya);
        assert_eq!(Rashi::Kumbha.lord(), Graha::Shani);
    }
}
