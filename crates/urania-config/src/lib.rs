use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Orb tolerance, in degrees, for each major aspect.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrbConfig {
    #[serde(default = "default_wide_orb")]
    pub conjunction: f64,
    #[serde(default = "default_narrow_orb")]
    pub sextile: f64,
    #[serde(default = "default_medium_orb")]
    pub square: f64,
    #[serde(default = "default_medium_orb")]
    pub trine: f64,
    #[serde(default = "default_wide_orb")]
    pub opposition: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            conjunction: default_wide_orb(),
            sextile: default_narrow_orb(),
            square: default_medium_orb(),
            trine: default_medium_orb(),
            opposition: default_wide_orb(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterpretationConfig {
    #[serde(default)]
    pub orbs: OrbConfig,
    #[serde(default = "default_max_aspects")]
    pub max_aspects: usize,
    #[serde(default = "default_designated_houses")]
    pub designated_houses: Vec<u8>,
    #[serde(default = "default_personal_bodies")]
    pub personal_bodies: Vec<String>,
    #[serde(default = "default_ruler_scheme")]
    pub ruler_scheme: String,
}

impl Default for InterpretationConfig {
    fn default() -> Self {
        Self {
            orbs: OrbConfig::default(),
            max_aspects: default_max_aspects(),
            designated_houses: default_designated_houses(),
            personal_bodies: default_personal_bodies(),
            ruler_scheme: default_ruler_scheme(),
        }
    }
}

fn default_wide_orb() -> f64 {
    8.0
}

fn default_medium_orb() -> f64 {
    6.0
}

fn default_narrow_orb() -> f64 {
    4.0
}

fn default_max_aspects() -> usize {
    5
}

fn default_designated_houses() -> Vec<u8> {
    vec![7, 10]
}

fn default_personal_bodies() -> Vec<String> {
    ["sun", "moon", "mercury", "venus", "mars"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ruler_scheme() -> String {
    "traditional".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    interpretation: Option<InterpretationConfig>,
}

/// Try the usual relative locations of `configs/urania.toml`.
pub fn read_urania_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/urania.toml", "../../configs/urania.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", paths);
}

/// Check ranges that serde cannot express.
///
/// `ruler_scheme` is passed through as text and parsed by the consumer.
pub fn validate_interpretation_config(cfg: &InterpretationConfig) -> anyhow::Result<()> {
    let orbs = [
        ("conjunction", cfg.orbs.conjunction),
        ("sextile", cfg.orbs.sextile),
        ("square", cfg.orbs.square),
        ("trine", cfg.orbs.trine),
        ("opposition", cfg.orbs.opposition),
    ];
    for (name, orb) in orbs {
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("interpretation.orbs.{name} must be a non-negative number, got {orb}");
        }
    }
    for house in &cfg.designated_houses {
        if !(1..=12).contains(house) {
            anyhow::bail!("interpretation.designated_houses contains {house}, expected 1..=12");
        }
    }
    Ok(())
}

/// Parse the `[interpretation]` table out of a full config document.
///
/// A document without the table yields the defaults.
pub fn parse_interpretation_config(text: &str) -> anyhow::Result<InterpretationConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml for interpretation settings: {e}"))?;
    let cfg = root.interpretation.unwrap_or_default();
    validate_interpretation_config(&cfg)?;
    Ok(cfg)
}

pub fn load_interpretation_config_from(path: &Path) -> anyhow::Result<InterpretationConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_interpretation_config(&text)
}

pub fn load_interpretation_config() -> anyhow::Result<InterpretationConfig> {
    let text = read_urania_toml_text()?;
    parse_interpretation_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = parse_interpretation_config("").unwrap();
        assert_eq!(cfg, InterpretationConfig::default());
        assert_eq!(cfg.max_aspects, 5);
        assert_eq!(cfg.designated_houses, vec![7, 10]);
        assert_eq!(cfg.orbs.conjunction, 8.0);
        assert_eq!(cfg.orbs.sextile, 4.0);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let text = r#"
            [interpretation]
            max_aspects = 3

            [interpretation.orbs]
            trine = 7.5
        "#;
        let cfg = parse_interpretation_config(text).unwrap();
        assert_eq!(cfg.max_aspects, 3);
        assert_eq!(cfg.orbs.trine, 7.5);
        assert_eq!(cfg.orbs.square, 6.0);
        assert_eq!(cfg.ruler_scheme, "traditional");
    }

    #[test]
    fn rejects_negative_orb() {
        let text = "[interpretation.orbs]\nsquare = -1.0\n";
        let err = parse_interpretation_config(text).unwrap_err();
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn rejects_house_out_of_range() {
        let text = "[interpretation]\ndesignated_houses = [7, 13]\n";
        assert!(parse_interpretation_config(text).is_err());
    }

    #[test]
    fn ruler_scheme_is_kept_verbatim() {
        let text = "[interpretation]\nruler_scheme = \"Modern\"\n";
        let cfg = parse_interpretation_config(text).unwrap();
        assert_eq!(cfg.ruler_scheme, "Modern");
    }

    #[test]
    fn bundled_config_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/urania.toml");
        let cfg = load_interpretation_config_from(&path).unwrap();
        assert_eq!(cfg, InterpretationConfig::default());
    }
}
