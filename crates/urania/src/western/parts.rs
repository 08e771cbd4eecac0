//! Arabic parts. Only the Part of Fortune is computed.
//!
//! Day/night sect uses the same wraparound-aware arc test as house placement:
//! the Sun in `[Descendant, Ascendant)` (houses 7–12) is above the horizon.
//!
//! - day:   `PF = Asc + Moon - Sun`
//! - night: `PF = Asc + Sun - Moon`

use serde::{Deserialize, Serialize};

use crate::ephemeris::{Body, ChartInput};
use crate::error::Unavailable;
use crate::western::houses::in_arc;
use crate::western::signs::normalize_degrees;

const PART_OF_FORTUNE: &str = "part of fortune";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArabicPart {
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    pub is_day_birth: bool,
}

/// Whether `sun` is above the horizon defined by the ascendant/descendant axis.
pub fn is_day_birth(sun: f64, ascendant: f64, descendant: f64) -> bool {
    in_arc(sun, descendant, ascendant)
}

/// Part of Fortune from resolved longitudes.
pub fn part_of_fortune(sun: f64, moon: f64, ascendant: f64, descendant: f64) -> ArabicPart {
    let is_day_birth = is_day_birth(sun, ascendant, descendant);
    let raw = if is_day_birth {
        ascendant + moon - sun
    } else {
        ascendant + sun - moon
    };
    ArabicPart {
        longitude: normalize_degrees(raw),
        is_day_birth,
    }
}

/// Part of Fortune for a chart, or why its inputs are missing.
///
/// The descendant is the house-7 cusp; [`ChartInput::houses`] guarantees
/// all twelve cusps are present.
pub fn chart_part_of_fortune(input: &ChartInput) -> Result<ArabicPart, Unavailable> {
    let houses = input
        .houses()
        .map_err(|e| Unavailable::derived(PART_OF_FORTUNE, &e))?;
    let sun = input
        .longitude_of(Body::Sun)
        .map_err(|e| Unavailable::derived(PART_OF_FORTUNE, &e))?;
    let moon = input
        .longitude_of(Body::Moon)
        .map_err(|e| Unavailable::derived(PART_OF_FORTUNE, &e))?;
    let ascendant = normalize_degrees(houses.ascendant);
    Ok(part_of_fortune(sun, moon, ascendant, houses.descendant()))
}
