use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::Body;

/// Major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

pub const ALL_ASPECT_TYPES: [AspectType; 5] = [
    AspectType::Conjunction,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Opposition,
];

impl AspectType {
    /// Exact separation in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }

    /// One-sentence reading of the aspect.
    pub const fn keynote(self) -> &'static str {
        match self {
            Self::Conjunction => "A merging of power and energy, with strong emphasis on the qualities the two share.",
            Self::Sextile => "Easy opportunities for cooperation and adjustment; a gentle, supportive flow.",
            Self::Square => "Tension, challenge and friction. This angle is the main driving force for change.",
            Self::Trine => "A harmonious, effortless flow of energy; innate talents and good fortune.",
            Self::Opposition => "A tug-of-war and a need for balance between two opposing parts of the personality.",
        }
    }

    pub fn all() -> impl Iterator<Item = AspectType> {
        ALL_ASPECT_TYPES.iter().copied()
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum orb, in degrees, per aspect type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbTable {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl OrbTable {
    pub fn get(&self, aspect: AspectType) -> f64 {
        match aspect {
            AspectType::Conjunction => self.conjunction,
            AspectType::Sextile => self.sextile,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Opposition => self.opposition,
        }
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 4.0,
            square: 6.0,
            trine: 6.0,
            opposition: 8.0,
        }
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectSettings {
    pub orbs: OrbTable,
    /// How many of the tightest aspects to keep.
    pub max_results: usize,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            orbs: OrbTable::default(),
            max_results: 5,
        }
    }
}

/// An aspect between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect_type: AspectType,
    /// Circular distance between the bodies, [0, 180].
    pub separation: f64,
    /// Deviation from the exact angle.
    pub orb: f64,
    /// Orb under 0.1°.
    pub is_exact: bool,
}

impl Aspect {
    pub fn keynote(&self) -> &'static str {
        self.aspect_type.keynote()
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} ({:.2}° orb)", self.body_a, self.aspect_type, self.body_b, self.orb)
    }
}
