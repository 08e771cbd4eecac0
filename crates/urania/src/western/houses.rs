//! House placement from precomputed cusps.
//!
//! House `i` spans `[cusp[i], cusp[i % 12 + 1])`, and the interval that
//! crosses 0°/360° is matched on either side of the wrap. Cusps come from the
//! house-system collaborator; nothing here divides the houses itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::HousePositions;
use crate::western::signs::normalize_degrees;

/// Forward arcs of a valid cusp set add up to one full turn.
const FULL_TURN_TOLERANCE: f64 = 1e-6;

/// House number 1..=12, or 0 when house data cannot place the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HousePlacement(u8);

impl HousePlacement {
    pub const UNKNOWN: HousePlacement = HousePlacement(0);

    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// 1..=12, or 0 for unknown.
    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn is_known(self) -> bool {
        self.0 != 0
    }

    pub fn theme(self) -> &'static str {
        house_theme(self.0)
    }
}

impl Default for HousePlacement {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for HousePlacement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_known() {
            write!(f, "{} house", ordinal(self.0))
        } else {
            f.write_str("unknown house")
        }
    }
}

/// "1st", "2nd", "3rd", "4th", ...
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Life area traditionally associated with a house.
pub fn house_theme(house: u8) -> &'static str {
    match house {
        1 => "personality and appearance",
        2 => "money and values",
        3 => "communication and learning",
        4 => "home and family",
        5 => "creativity and romance",
        6 => "health and daily work",
        7 => "relationships and partnership",
        8 => "transformation and shared resources",
        9 => "travel and philosophy",
        10 => "career and reputation",
        11 => "groups and aspirations",
        12 => "solitude and the unconscious",
        _ => "unknown house",
    }
}

/// Forward (counter-clockwise) arc from `from` to `to`, in [0, 360).
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// Whether `deg` lies in the half-open arc `[start, end)` walked forward.
///
/// An arc whose end is below its start crosses 0°/360°. A zero-width arc
/// contains nothing.
pub fn in_arc(deg: f64, start: f64, end: f64) -> bool {
    let (d, s, e) = (normalize_degrees(deg), normalize_degrees(start), normalize_degrees(end));
    if s < e {
        s <= d && d < e
    } else if s > e {
        d >= s || d < e
    } else {
        false
    }
}

/// Whether the cusps form a proper cycle around the zodiac.
pub(crate) fn cusps_are_cyclic(cusps: &[f64; 12]) -> bool {
    let total: f64 = (0..12)
        .map(|i| forward_arc(cusps[i], cusps[(i + 1) % 12]))
        .sum();
    (total - 360.0).abs() < FULL_TURN_TOLERANCE
}

/// House containing `longitude`, given cusps in house order (index 0 = house 1).
///
/// Returns [`HousePlacement::UNKNOWN`] for anything other than twelve finite,
/// cyclically ordered cusps.
pub fn house_of(longitude: f64, cusps: &[f64]) -> HousePlacement {
    if !longitude.is_finite() {
        return HousePlacement::UNKNOWN;
    }
    let Ok(raw) = <[f64; 12]>::try_from(cusps) else {
        return HousePlacement::UNKNOWN;
    };
    if raw.iter().any(|c| !c.is_finite()) {
        return HousePlacement::UNKNOWN;
    }
    let cusps = raw.map(normalize_degrees);
    if !cusps_are_cyclic(&cusps) {
        return HousePlacement::UNKNOWN;
    }

    (0..12)
        .find(|&i| in_arc(longitude, cusps[i], cusps[(i + 1) % 12]))
        .map(|i| HousePlacement((i + 1) as u8))
        .unwrap_or(HousePlacement::UNKNOWN)
}

/// [`house_of`] over the cusp mapping delivered with the chart.
pub fn house_of_positions(longitude: f64, houses: &HousePositions) -> HousePlacement {
    match houses.cusp_array() {
        Some(cusps) => house_of(longitude, &cusps),
        None => HousePlacement::UNKNOWN,
    }
}
