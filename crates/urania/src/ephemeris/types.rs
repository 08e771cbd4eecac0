use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Unavailable;
use crate::western::houses::cusps_are_cyclic;
use crate::western::normalize_degrees;

/// Bodies the upstream ephemeris reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// The bodies given a sign + house reading by default.
pub const PERSONAL_BODIES: [Body; 5] = [Body::Sun, Body::Moon, Body::Mercury, Body::Venus, Body::Mars];

impl Body {
    /// Lowercase identifier, as used on the wire and in config files.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub fn all() -> impl Iterator<Item = Body> {
        ALL_BODIES.iter().copied()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Body::all()
            .find(|b| b.id() == wanted)
            .ok_or_else(|| s.to_string())
    }
}

/// One body's position as delivered by the ephemeris, or its failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyPosition {
    Computed { longitude: f64 },
    Failed { error: String },
}

impl BodyPosition {
    pub fn at(longitude: f64) -> Self {
        Self::Computed { longitude }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Normalized longitude, if the ephemeris produced a usable one.
    pub fn longitude(&self) -> Option<f64> {
        match self {
            Self::Computed { longitude } if longitude.is_finite() => {
                Some(normalize_degrees(*longitude))
            }
            _ => None,
        }
    }
}

/// House cusps and angles from the house-system collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    pub ascendant: f64,
    pub midheaven: f64,
    /// House number 1..=12 -> cusp longitude in degrees.
    #[serde(deserialize_with = "deserialize_cusps")]
    pub cusps: BTreeMap<u8, f64>,
}

/// Cusp keys arrive as strings (`"1"`..`"12"`) in JSON objects, and
/// untagged buffering will not coerce them to integers.
fn deserialize_cusps<'de, D>(deserializer: D) -> Result<BTreeMap<u8, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(untagged)]
    enum HouseKey {
        Number(u8),
        Text(String),
    }

    BTreeMap::<HouseKey, f64>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, cusp)| {
            let house = match key {
                HouseKey::Number(n) => n,
                HouseKey::Text(t) => t.trim().parse::<u8>().map_err(|_| {
                    serde::de::Error::custom(format!("house key {t:?} is not a number"))
                })?,
            };
            Ok((house, cusp))
        })
        .collect()
}

impl HousePositions {
    pub fn new(ascendant: f64, midheaven: f64, cusps: BTreeMap<u8, f64>) -> Self {
        Self {
            ascendant,
            midheaven,
            cusps,
        }
    }

    /// Build from an ordered cusp array (index 0 = house 1).
    pub fn from_cusp_array(ascendant: f64, midheaven: f64, cusps: &[f64]) -> Self {
        let cusps = cusps
            .iter()
            .enumerate()
            .map(|(i, c)| ((i + 1) as u8, *c))
            .collect();
        Self::new(ascendant, midheaven, cusps)
    }

    pub fn cusp(&self, house: u8) -> Option<f64> {
        self.cusps
            .get(&house)
            .copied()
            .filter(|c| c.is_finite())
            .map(normalize_degrees)
    }

    /// All twelve cusps in house order, or `None` if any is absent or non-finite.
    pub fn cusp_array(&self) -> Option<[f64; 12]> {
        let mut out = [0.0; 12];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.cusp((i + 1) as u8)?;
        }
        Some(out)
    }

    /// House-7 cusp, or the point opposite the ascendant when it is missing.
    ///
    /// The fallback only matters for partial cusp maps built directly;
    /// [`ChartInput::houses`] already rejects those.
    pub fn descendant(&self) -> f64 {
        self.cusp(7)
            .unwrap_or_else(|| normalize_degrees(self.ascendant + 180.0))
    }
}

/// House data succeeds or fails as a whole unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HouseData {
    Computed(HousePositions),
    Failed { error: String },
}

impl HouseData {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }
}

/// Everything the interpretation engine consumes for one chart request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub positions: BTreeMap<Body, BodyPosition>,
    pub houses: HouseData,
}

impl ChartInput {
    pub fn new(positions: BTreeMap<Body, BodyPosition>, houses: HouseData) -> Self {
        Self { positions, houses }
    }

    /// Normalized longitude of `body`, or why it is unavailable.
    pub fn longitude_of(&self, body: Body) -> Result<f64, Unavailable> {
        match self.positions.get(&body) {
            None => Err(Unavailable::missing_body(body, "no position supplied")),
            Some(BodyPosition::Failed { error }) => Err(Unavailable::missing_body(body, error.clone())),
            Some(pos) => pos
                .longitude()
                .ok_or_else(|| Unavailable::missing_body(body, "longitude is not a finite number")),
        }
    }

    /// Bodies with a usable longitude, in body order.
    pub fn resolved_longitudes(&self) -> BTreeMap<Body, f64> {
        self.positions
            .iter()
            .filter_map(|(body, pos)| pos.longitude().map(|lon| (*body, lon)))
            .collect()
    }

    /// House positions with a complete, finite, cyclically ordered cusp set.
    pub fn houses(&self) -> Result<&HousePositions, Unavailable> {
        match &self.houses {
            HouseData::Failed { error } => Err(Unavailable::house_data(error.clone())),
            HouseData::Computed(h) => {
                if !h.ascendant.is_finite() {
                    return Err(Unavailable::house_data("ascendant is not a finite number"));
                }
                let Some(cusps) = h.cusp_array() else {
                    return Err(Unavailable::house_data(format!(
                        "expected 12 finite cusps, got {}",
                        h.cusps.values().filter(|c| c.is_finite()).count()
                    )));
                };
                if !cusps_are_cyclic(&cusps) {
                    return Err(Unavailable::house_data("cusps are not in zodiacal order"));
                }
                Ok(h)
            }
        }
    }
}
