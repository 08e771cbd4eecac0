//! Typed interpretation settings, built from `urania_config` or defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use urania_config::InterpretationConfig;

use crate::aspects::{AspectSettings, AspectType, OrbTable};
use crate::ephemeris::{Body, PERSONAL_BODIES};
use crate::error::SettingsError;
use crate::western::RulerScheme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationSettings {
    pub aspects: AspectSettings,
    /// Houses whose rulers get their own block (besides the chart ruler).
    pub designated_houses: Vec<u8>,
    /// Bodies given a sign + house reading.
    pub personal_bodies: Vec<Body>,
    pub ruler_scheme: RulerScheme,
}

impl Default for InterpretationSettings {
    fn default() -> Self {
        Self {
            aspects: AspectSettings::default(),
            designated_houses: vec![7, 10],
            personal_bodies: PERSONAL_BODIES.to_vec(),
            ruler_scheme: RulerScheme::Traditional,
        }
    }
}

impl InterpretationSettings {
    /// Load from `configs/urania.toml` in the usual locations.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = urania_config::load_interpretation_config()?;
        Ok(Self::try_from(&cfg)?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg = urania_config::load_interpretation_config_from(path)?;
        Ok(Self::try_from(&cfg)?)
    }
}

fn checked_orb(aspect: AspectType, orb: f64) -> Result<f64, SettingsError> {
    if orb.is_finite() && orb >= 0.0 {
        Ok(orb)
    } else {
        Err(SettingsError::InvalidOrb {
            aspect: aspect.name().to_string(),
            orb,
        })
    }
}

impl TryFrom<&InterpretationConfig> for InterpretationSettings {
    type Error = SettingsError;

    fn try_from(cfg: &InterpretationConfig) -> Result<Self, Self::Error> {
        let orbs = OrbTable {
            conjunction: checked_orb(AspectType::Conjunction, cfg.orbs.conjunction)?,
            sextile: checked_orb(AspectType::Sextile, cfg.orbs.sextile)?,
            square: checked_orb(AspectType::Square, cfg.orbs.square)?,
            trine: checked_orb(AspectType::Trine, cfg.orbs.trine)?,
            opposition: checked_orb(AspectType::Opposition, cfg.orbs.opposition)?,
        };

        if let Some(&house) = cfg.designated_houses.iter().find(|h| !(1..=12).contains(*h)) {
            return Err(SettingsError::HouseOutOfRange { house });
        }

        let personal_bodies = cfg
            .personal_bodies
            .iter()
            .map(|name| name.parse::<Body>().map_err(|name| SettingsError::UnknownBody { name }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            aspects: AspectSettings {
                orbs,
                max_results: cfg.max_aspects,
            },
            designated_houses: cfg.designated_houses.clone(),
            personal_bodies,
            ruler_scheme: cfg.ruler_scheme.parse()?,
        })
    }
}
