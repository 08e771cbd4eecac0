//! Zodiac signs and sign placement.
//!
//! The ecliptic is split into twelve 30-degree signs starting at 0° Aries.
//! Any real longitude is accepted; it is normalized into [0, 360) first.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index, Aries = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Sign containing `longitude`.
    pub fn from_longitude(longitude: f64) -> Self {
        sign_placement(longitude).sign
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize an angle into [0, 360).
///
/// Non-finite input stays non-finite; callers filter those out beforehand.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPlacement {
    pub sign: ZodiacSign,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// The normalized ecliptic longitude the placement was derived from.
    pub longitude: f64,
}

impl SignPlacement {
    pub fn sign_index(&self) -> u8 {
        self.sign.index()
    }

    /// Whole degrees within the sign.
    pub fn degrees(&self) -> u8 {
        self.degree_in_sign.floor() as u8
    }

    /// Whole arc-minutes past [`Self::degrees`].
    pub fn minutes(&self) -> u8 {
        let m = ((self.degree_in_sign - self.degree_in_sign.floor()) * 60.0).floor() as u8;
        m.min(59)
    }
}

impl fmt::Display for SignPlacement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}°{:02}' {}", self.degrees(), self.minutes(), self.sign)
    }
}

/// Resolve any real longitude to its sign and degree within that sign.
pub fn sign_placement(longitude: f64) -> SignPlacement {
    let lon = normalize_degrees(longitude);
    let degree_in_sign = lon % 30.0;
    // lon - degree_in_sign is an exact multiple of 30
    let index = (((lon - degree_in_sign) / 30.0).round() as u8) % 12;
    SignPlacement {
        sign: ZodiacSign::from_index(index),
        degree_in_sign,
        longitude: lon,
    }
}
