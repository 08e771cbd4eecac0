//! Structured natal report.
//!
//! Every section carries either its value or the reason it is unavailable;
//! nothing is silently dropped. Rendering is left to the caller.

use serde::{Deserialize, Serialize};

use crate::aspects::Aspect;
use crate::ephemeris::Body;
use crate::error::Unavailable;
use crate::western::{ArabicPart, ChartRulerInfo, HousePlacement, HouseRulerInfo, SignPlacement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Section<T> {
    Available(T),
    Unavailable(Unavailable),
}

impl<T> Section<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }

    pub fn unavailable(&self) -> Option<&Unavailable> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(e) => Some(e),
        }
    }
}

impl<T> From<Result<T, Unavailable>> for Section<T> {
    fn from(result: Result<T, Unavailable>) -> Self {
        match result {
            Ok(v) => Self::Available(v),
            Err(e) => Self::Unavailable(e),
        }
    }
}

/// Sign reading for one body. Needs no house data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyReading {
    pub body: Body,
    pub sign: Section<SignPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyHouse {
    pub body: Body,
    /// 0 when the body has no position.
    pub house: HousePlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOfFortuneReading {
    pub part: ArabicPart,
    pub sign: SignPlacement,
    pub house: HousePlacement,
    pub narrative: String,
}

/// Everything that depends on house cusps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseReadings {
    pub ascendant_narrative: String,
    pub chart_ruler: Section<ChartRulerInfo>,
    pub placements: Vec<BodyHouse>,
    pub house_rulers: Vec<Section<HouseRulerInfo>>,
    pub part_of_fortune: Section<PartOfFortuneReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectReading {
    #[serde(flatten)]
    pub aspect: Aspect,
    pub keynote: String,
}

impl From<Aspect> for AspectReading {
    fn from(aspect: Aspect) -> Self {
        let keynote = aspect.keynote().to_string();
        Self { aspect, keynote }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalReport {
    pub placements: Vec<BodyReading>,
    /// Tightest aspects first.
    pub aspects: Vec<AspectReading>,
    /// Replaced by a single notice when house data is unavailable.
    pub houses: Section<HouseReadings>,
}

impl NatalReport {
    /// True when any section carries an unavailable marker.
    pub fn is_degraded(&self) -> bool {
        !self.notices().is_empty()
    }

    /// Every unavailable marker in the report, in section order.
    pub fn notices(&self) -> Vec<&Unavailable> {
        let mut out: Vec<&Unavailable> = self
            .placements
            .iter()
            .filter_map(|p| p.sign.unavailable())
            .collect();
        match &self.houses {
            Section::Unavailable(e) => out.push(e),
            Section::Available(h) => {
                out.extend(h.chart_ruler.unavailable());
                out.extend(h.house_rulers.iter().filter_map(|r| r.unavailable()));
                out.extend(h.part_of_fortune.unavailable());
            }
        }
        out
    }

    pub fn placement(&self, body: Body) -> Option<&BodyReading> {
        self.placements.iter().find(|p| p.body == body)
    }
}
