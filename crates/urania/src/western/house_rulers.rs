//! Which planet rules a house, and where that planet sits.
//!
//! The cusp sign of the house picks the ruler from the rulership table; the
//! ruler's own longitude is then placed in a house. The chart ruler is the
//! same lookup for house 1.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::ephemeris::{Body, HousePositions};
use crate::error::Unavailable;
use crate::western::houses::{house_of_positions, house_theme, ordinal, HousePlacement};
use crate::western::rulers::{RulerScheme, RulershipTable};
use crate::western::signs::{sign_placement, SignPlacement, ZodiacSign};

lazy_static::lazy_static! {
    static ref RULER_IN_HOUSE: HashMap<(u8, u8), &'static str> = {
        let mut m = HashMap::new();
        m.insert((1, 1), "The chart ruler stays in its own house: the personality is self-directed and its concerns are immediately visible to others.");
        m.insert((1, 7), "The chart ruler sits in the house of relationships: identity is discovered and shaped through close partners.");
        m.insert((1, 10), "The chart ruler sits in the house of career: life purpose is tied to vocation and public standing.");
        m.insert((7, 7), "The ruler of the house of relationships stays at home: partnerships are central and pursued on their own terms.");
        m.insert((7, 8), "The ruler of the house of relationships (7) sits in the house of transformation (8). Partners often bring deep financial or psychological change, and relationships may be private or intense.");
        m.insert((7, 10), "The ruler of the house of relationships sits in the house of career: partners and public life are intertwined, and a partner may share or shape the vocation.");
        m.insert((10, 1), "The ruler of the house of career sits in the first house: the vocation is an expression of personality, and reputation rests on personal initiative.");
        m.insert((10, 7), "The ruler of the house of career (10) sits in the house of relationships (7). Career path and public standing depend strongly on partners, collaborators or clients; joint work succeeds.");
        m.insert((10, 10), "The ruler of the house of career stays at home: ambition is strong and the professional path is self-determined.");
        m
    };
}

/// Narrative for the ruler of `source` placed in `ruler_house`.
///
/// Falls back to a generic sentence for combinations without a canned text.
pub fn ruler_in_house_text(source: u8, ruler: Body, ruler_house: HousePlacement) -> String {
    if let Some(text) = RULER_IN_HOUSE.get(&(source, ruler_house.number())) {
        return text.to_string();
    }
    if ruler_house.is_known() {
        format!(
            "The ruler of the {} house ({}), {}, is in the {} ({}).",
            ordinal(source),
            house_theme(source),
            ruler,
            ruler_house,
            ruler_house.theme()
        )
    } else {
        format!(
            "The ruler of the {} house ({}) is {}, but its house placement is unknown.",
            ordinal(source),
            house_theme(source),
            ruler
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRulerInfo {
    /// House being interpreted, 1..=12.
    pub house: u8,
    pub cusp_sign: ZodiacSign,
    pub ruler: Body,
    /// Zodiac position of the ruler, when its longitude is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruler_sign: Option<SignPlacement>,
    pub ruler_house: HousePlacement,
    pub narrative: String,
}

/// Chart-ruler details: the house-1 lookup plus both rulers of the
/// house-1 cusp sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRulerInfo {
    /// Placement of the ascendant degree itself.
    pub ascendant: SignPlacement,
    pub traditional_ruler: Body,
    pub modern_ruler: Body,
    pub placement: HouseRulerInfo,
}

pub struct HouseRulerResolver<'a> {
    table: &'a RulershipTable,
    scheme: RulerScheme,
}

impl<'a> HouseRulerResolver<'a> {
    pub fn new(table: &'a RulershipTable, scheme: RulerScheme) -> Self {
        Self { table, scheme }
    }

    /// Resolve the ruler of `house` and the house that ruler occupies.
    ///
    /// A ruler without a usable longitude still resolves, with
    /// [`HousePlacement::UNKNOWN`] as its house.
    pub fn resolve(
        &self,
        house: u8,
        houses: &HousePositions,
        longitudes: &BTreeMap<Body, f64>,
    ) -> Result<HouseRulerInfo, Unavailable> {
        let cusp = houses
            .cusp(house)
            .ok_or_else(|| Unavailable::house_data(format!("no cusp for house {house}")))?;
        let cusp_sign = sign_placement(cusp).sign;
        let ruler = self.table.ruler(cusp_sign, self.scheme);

        let ruler_lon = longitudes.get(&ruler).copied();
        let ruler_house = ruler_lon
            .map(|lon| house_of_positions(lon, houses))
            .unwrap_or(HousePlacement::UNKNOWN);
        if ruler_lon.is_none() {
            log::warn!("ruler {ruler} of house {house} has no position; placement unknown");
        }

        Ok(HouseRulerInfo {
            house,
            cusp_sign,
            ruler,
            ruler_sign: ruler_lon.map(sign_placement),
            ruler_house,
            narrative: ruler_in_house_text(house, ruler, ruler_house),
        })
    }

    /// House-1 lookup. Both rulers come from the cusp-1 sign, the same
    /// sign that picks `placement.ruler`.
    pub fn chart_ruler(
        &self,
        houses: &HousePositions,
        longitudes: &BTreeMap<Body, f64>,
    ) -> Result<ChartRulerInfo, Unavailable> {
        if !houses.ascendant.is_finite() {
            return Err(Unavailable::house_data("ascendant is not a finite number"));
        }
        let placement = self.resolve(1, houses, longitudes)?;
        Ok(ChartRulerInfo {
            ascendant: sign_placement(houses.ascendant),
            traditional_ruler: self.table.traditional(placement.cusp_sign),
            modern_ruler: self.table.modern(placement.cusp_sign),
            placement,
        })
    }
}
