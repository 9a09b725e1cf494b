//! Nakshatra (lunar mansion) classification in the 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20'. The lord of mansion `i` is the Vimshottari lord at position
//! `i mod 9`, so the 27 mansions cycle the 9 lords three times.
//!
//! Abhijit, the optional 28th mansion, is not part of the dasha scheme; it
//! is exposed only as a position check via [`abhijit_position`].

use crate::dasha::sequence::starting_lord;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::{check_longitude, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Abhijit start: 276 deg 40'.
pub const ABHIJIT_START: f64 = 276.0 + 40.0 / 60.0;
/// Abhijit end: 280 deg 53' 20".
pub const ABHIJIT_END: f64 = 280.0 + 53.0 / 60.0 + 20.0 / 3600.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Temperament (gana) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

const DEITIES: [&str; 27] = [
    "Ashwini Kumaras",
    "Yama",
    "Agni",
    "Brahma",
    "Soma",
    "Rudra",
    "Aditi",
    "Brihaspati",
    "Nagas",
    "Pitris",
    "Bhaga",
    "Aryaman",
    "Savitar",
    "Vishwakarma",
    "Vayu",
    "Indra-Agni",
    "Mitra",
    "Indra",
    "Nirriti",
    "Apas",
    "Vishvadevas",
    "Vishnu",
    "Vasus",
    "Varuna",
    "Aja Ekapada",
    "Ahir Budhnya",
    "Pushan",
];

const SYMBOLS: [&str; 27] = [
    "Horse's head",
    "Yoni/Elephant",
    "Razor/Flame",
    "Cart/Chariot",
    "Deer's head",
    "Teardrop/Diamond",
    "Bow/Quiver",
    "Flower/Circle",
    "Serpent/Wheel",
    "Royal throne",
    "Front legs of bed",
    "Back legs of bed",
    "Hand/Fist",
    "Bright jewel/Pearl",
    "Coral/Sword",
    "Triumphal arch",
    "Lotus",
    "Circular amulet",
    "Roots/Lion's tail",
    "Elephant tusk/Fan",
    "Elephant tusk/Planks",
    "Ear/Three footprints",
    "Drum/Flute",
    "Empty circle",
    "Front of funeral cot",
    "Back of funeral cot",
    "Fish/Drum",
];

const GANAS: [Gana; 27] = {
    use Gana::{Deva as D, Manushya as M, Rakshasa as R};
    [
        D, M, R, D, D, M, D, D, R, // Ashwini .. Ashlesha
        R, M, M, D, R, D, R, D, R, // Magha .. Jyeshtha
        R, M, M, D, R, R, M, M, D, // Mula .. Revati
    ]
};

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra at a 0-based index, wrapping past Revati.
    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS_27[(index % 27) as usize]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }

    /// Vimshottari lord of the mansion.
    pub const fn lord(self) -> Graha {
        starting_lord(self.index())
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        DEITIES[self.index() as usize]
    }

    /// Traditional symbol.
    pub const fn symbol(self) -> &'static str {
        SYMBOLS[self.index() as usize]
    }

    pub const fn gana(self) -> Gana {
        GANAS[self.index() as usize]
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
    /// Progress through the nakshatra in [0, 1).
    pub fraction: f64,
    /// Vimshottari lord of the nakshatra.
    pub lord: Graha,
}

/// Split a checked longitude into mansion index and degrees within it.
///
/// The index is `floor(lon / span)`. The remainder is taken against that
/// index rather than with `%`, which disagrees with the division at
/// boundaries like 40 deg. The remainder stays in [0, span).
fn split_longitude(lon: f64) -> (u8, f64) {
    let mut idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let mut degrees = lon - (idx as f64) * NAKSHATRA_SPAN_27;
    if degrees >= NAKSHATRA_SPAN_27 && idx < 26 {
        idx += 1;
        degrees -= NAKSHATRA_SPAN_27;
    }
    let degrees = degrees.clamp(0.0, NAKSHATRA_SPAN_27 * (1.0 - f64::EPSILON));
    (idx, degrees)
}

/// Classify a sidereal longitude into mansion index and fractional progress.
///
/// Returns `(index, fraction)` with `index` in 0..=26 and `fraction` in
/// [0, 1). Longitudes outside [0, 360) or non-finite fail with
/// `InvalidInput`.
pub fn classify_longitude(sidereal_lon_deg: f64) -> Result<(u8, f64), VedicError> {
    let lon = check_longitude(sidereal_lon_deg)?;
    let (idx, degrees) = split_longitude(lon);
    Ok((idx, degrees / NAKSHATRA_SPAN_27))
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Each nakshatra spans 13 deg 20' (13.3333... deg). Each pada spans 3 deg 20'.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> Result<NakshatraInfo, VedicError> {
    let lon = check_longitude(sidereal_lon_deg)?;
    let (nak_idx, degrees_in_nakshatra) = split_longitude(lon);
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = (degrees_in_nakshatra - (pada_idx as f64) * PADA_SPAN).max(0.0);
    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];

    Ok(NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
        fraction: degrees_in_nakshatra / NAKSHATRA_SPAN_27,
        lord: nakshatra.lord(),
    })
}

/// Degrees into Abhijit when the longitude lies in [276 deg 40', 280 deg 53' 20").
///
/// The longitude is normalized first; non-finite input yields `None`.
pub fn abhijit_position(sidereal_lon_deg: f64) -> Option<f64> {
    let lon = normalize_360(sidereal_lon_deg);
    (ABHIJIT_START..ABHIJIT_END)
        .contains(&lon)
        .then(|| lon - ABHIJIT_START)
}
