//! The Vimshottari lord sequence.
//!
//! Nine lords in fixed cyclic order with their full mahadasha lengths in
//! years. The weights sum to 120. Sub-periods at every level are generated
//! in this order, starting from the parent's lord.

use crate::graha::Graha;

/// Number of lords in the cycle.
pub const SEQUENCE_LEN: usize = 9;

/// Length of one full cycle in years.
pub const TOTAL_YEARS: f64 = 120.0;

/// Lords in cyclic order with their weights in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); SEQUENCE_LEN] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Position of a lord in the cycle (Ketu = 0 .. Buddh = 8).
pub const fn sequence_position(lord: Graha) -> usize {
    match lord {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Lord at a cycle position, wrapping modulo 9.
pub const fn lord_at(position: usize) -> Graha {
    VIMSHOTTARI_SEQUENCE[position % SEQUENCE_LEN].0
}

/// Full mahadasha length of a lord in years.
pub const fn lord_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_position(lord)].1
}

/// The lord following `lord` in the cycle (Buddh wraps to Ketu).
pub const fn next_lord(lord: Graha) -> Graha {
    lord_at(sequence_position(lord) + 1)
}

/// Lord of the nakshatra at `index` (0 = Ashwini).
pub const fn starting_lord(nakshatra_index: u8) -> Graha {
    lord_at(nakshatra_index as usize)
}

/// The 9 lords in cycle order beginning with `first`.
pub fn cycle_from(first: Graha) -> impl Iterator<Item = (Graha, f64)> {
    let start = sequence_position(first);
    (0..SEQUENCE_LEN).map(move |i| VIMSHOTTARI_SEQUENCE[(start + i) % SEQUENCE_LEN])
}
