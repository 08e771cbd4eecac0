//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ephemeris::Body;
use crate::error::SettingsError;
use crate::western::signs::{sign_placement, ZodiacSign};

/// Which ruler of a sign drives house-ruler lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulerScheme {
    #[default]
    Traditional,
    Modern,
}

impl FromStr for RulerScheme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "traditional" => Ok(Self::Traditional),
            "modern" => Ok(Self::Modern),
            _ => Err(SettingsError::UnknownRulerScheme { name: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRulers {
    pub traditional: Body,
    pub modern: Body,
}

const fn rulers(traditional: Body, modern: Body) -> SignRulers {
    SignRulers {
        traditional,
        modern,
    }
}

/// Immutable sign -> (traditional, modern) ruler table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulershipTable {
    by_sign: [SignRulers; 12],
}

impl RulershipTable {
    pub const fn standard() -> Self {
        Self {
            by_sign: [
                rulers(Body::Mars, Body::Mars),       // Aries
                rulers(Body::Venus, Body::Venus),     // Taurus
                rulers(Body::Mercury, Body::Mercury), // Gemini
                rulers(Body::Moon, Body::Moon),       // Cancer
                rulers(Body::Sun, Body::Sun),         // Leo
                rulers(Body::Mercury, Body::Mercury), // Virgo
                rulers(Body::Venus, Body::Venus),     // Libra
                rulers(Body::Mars, Body::Pluto),      // Scorpio
                rulers(Body::Jupiter, Body::Jupiter), // Sagittarius
                rulers(Body::Saturn, Body::Saturn),   // Capricorn
                rulers(Body::Saturn, Body::Uranus),   // Aquarius
                rulers(Body::Jupiter, Body::Neptune), // Pisces
            ],
        }
    }

    pub fn rulers(&self, sign: ZodiacSign) -> SignRulers {
        self.by_sign[sign.index() as usize]
    }

    pub fn traditional(&self, sign: ZodiacSign) -> Body {
        self.rulers(sign).traditional
    }

    pub fn modern(&self, sign: ZodiacSign) -> Body {
        self.rulers(sign).modern
    }

    pub fn ruler(&self, sign: ZodiacSign, scheme: RulerScheme) -> Body {
        match scheme {
            RulerScheme::Traditional => self.traditional(sign),
            RulerScheme::Modern => self.modern(sign),
        }
    }
}

impl Default for RulershipTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Shared read-only table.
pub static RULERSHIP: RulershipTable = RulershipTable::standard();

/// Get sign ruler
pub fn get_sign_ruler(sign: ZodiacSign, scheme: RulerScheme) -> Body {
    RULERSHIP.ruler(sign, scheme)
}

/// Get sign ruler from longitude
pub fn get_sign_ruler_from_longitude(longitude: f64, scheme: RulerScheme) -> Body {
    get_sign_ruler(sign_placement(longitude).sign, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_sign_ruler_traditional() {
        assert_eq!(get_sign_ruler(ZodiacSign::Aries, RulerScheme::Traditional), Body::Mars);
        assert_eq!(get_sign_ruler(ZodiacSign::Cancer, RulerScheme::Traditional), Body::Moon);
        assert_eq!(get_sign_ruler(ZodiacSign::Leo, RulerScheme::Traditional), Body::Sun);
        assert_eq!(get_sign_ruler(ZodiacSign::Scorpio, RulerScheme::Traditional), Body::Mars);
    }

    #[test]
    fn test_get_sign_ruler_modern() {
        assert_eq!(get_sign_ruler(ZodiacSign::Scorpio, RulerScheme::Modern), Body::Pluto);
        assert_eq!(get_sign_ruler(ZodiacSign::Aquarius, RulerScheme::Modern), Body::Uranus);
        assert_eq!(get_sign_ruler(ZodiacSign::Pisces, RulerScheme::Modern), Body::Neptune);
    }

    #[test]
    fn traditional_rulers_are_classical_planets() {
        for sign in ZodiacSign::all() {
            let ruler = RULERSHIP.traditional(*sign);
            assert!(!matches!(ruler, Body::Uranus | Body::Neptune | Body::Pluto), "{sign}");
        }
    }

    #[test]
    fn ruler_from_longitude() {
        // 315° is 15° Aquarius
        assert_eq!(get_sign_ruler_from_longitude(315.0, RulerScheme::Traditional), Body::Saturn);
        assert_eq!(get_sign_ruler_from_longitude(315.0, RulerScheme::Modern), Body::Uranus);
    }

    #[test]
    fn scheme_parses() {
        assert_eq!("Modern".parse::<RulerScheme>(), Ok(RulerScheme::Modern));
        assert!("whole_sign".parse::<RulerScheme>().is_err());
    }
}
