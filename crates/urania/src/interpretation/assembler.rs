use std::collections::BTreeMap;

use crate::aspects::AspectCalculator;
use crate::ephemeris::{Body, ChartInput, HousePositions};
use crate::interpretation::report::{
    AspectReading, BodyHouse, BodyReading, HouseReadings, NatalReport, PartOfFortuneReading, Section,
};
use crate::interpretation::texts::{ascendant_text, fortune_text, placement_text};
use crate::settings::InterpretationSettings;
use crate::western::{
    chart_part_of_fortune, house_of_positions, sign_placement, HousePlacement, HouseRulerResolver, RulershipTable,
};

/// Builds a [`NatalReport`] from one chart's upstream data.
///
/// Holds only read-only tables and settings, so one assembler can serve
/// any number of requests from any number of threads.
#[derive(Debug, Clone)]
pub struct InterpretationAssembler {
    settings: InterpretationSettings,
    rulers: RulershipTable,
    calculator: AspectCalculator,
}

impl InterpretationAssembler {
    pub fn new(settings: InterpretationSettings) -> Self {
        Self {
            settings,
            rulers: RulershipTable::standard(),
            calculator: AspectCalculator::new(),
        }
    }

    /// Assembler configured from `configs/urania.toml`.
    pub fn from_config() -> anyhow::Result<Self> {
        Ok(Self::new(InterpretationSettings::load()?))
    }

    pub fn settings(&self) -> &InterpretationSettings {
        &self.settings
    }

    pub fn assemble(&self, input: &ChartInput) -> NatalReport {
        let longitudes = input.resolved_longitudes();
        let houses = input.houses();

        let placements = self.placements(input, houses.as_ref().ok().copied());
        log::debug!("placements: {} bodies", placements.len());

        let aspects: Vec<AspectReading> = self
            .calculator
            .compute_for_chart(input, &self.settings.aspects)
            .into_iter()
            .map(AspectReading::from)
            .collect();
        log::debug!("aspects: kept {}", aspects.len());

        let houses = match houses {
            Ok(h) => Section::Available(self.house_readings(input, h, &longitudes)),
            Err(e) => {
                log::warn!("house-dependent sections unavailable: {e}");
                Section::Unavailable(e)
            }
        };

        NatalReport {
            placements,
            aspects,
            houses,
        }
    }

    /// Personal bodies in configured order, then any other body supplied.
    fn reading_order(&self, input: &ChartInput) -> Vec<Body> {
        let mut order = self.settings.personal_bodies.clone();
        for body in input.positions.keys() {
            if !order.contains(body) {
                order.push(*body);
            }
        }
        order
    }

    fn placements(&self, input: &ChartInput, houses: Option<&HousePositions>) -> Vec<BodyReading> {
        self.reading_order(input)
            .into_iter()
            .map(|body| {
                let sign = input.longitude_of(body).map(sign_placement);
                if let Err(e) = &sign {
                    log::warn!("{e}");
                }
                let narrative = match (&sign, self.settings.personal_bodies.contains(&body)) {
                    (Ok(placement), true) => {
                        let house = houses.map(|h| house_of_positions(placement.longitude, h));
                        Some(placement_text(body, placement, house))
                    }
                    _ => None,
                };
                BodyReading {
                    body,
                    sign: sign.into(),
                    narrative,
                }
            })
            .collect()
    }

    fn house_readings(
        &self,
        input: &ChartInput,
        houses: &HousePositions,
        longitudes: &BTreeMap<Body, f64>,
    ) -> HouseReadings {
        let resolver = HouseRulerResolver::new(&self.rulers, self.settings.ruler_scheme);

        let ascendant_narrative = ascendant_text(&sign_placement(houses.ascendant));
        let chart_ruler = Section::from(resolver.chart_ruler(houses, longitudes));

        let placements = self
            .settings
            .personal_bodies
            .iter()
            .map(|&body| BodyHouse {
                body,
                house: longitudes
                    .get(&body)
                    .map(|&lon| house_of_positions(lon, houses))
                    .unwrap_or(HousePlacement::UNKNOWN),
            })
            .collect();

        let house_rulers = self
            .settings
            .designated_houses
            .iter()
            .map(|&house| Section::from(resolver.resolve(house, houses, longitudes)))
            .collect();

        let part_of_fortune = chart_part_of_fortune(input).map(|part| {
            let sign = sign_placement(part.longitude);
            let house = house_of_positions(part.longitude, houses);
            PartOfFortuneReading {
                part,
                sign,
                house,
                narrative: fortune_text(&sign, house),
            }
        });
        if let Err(e) = &part_of_fortune {
            log::warn!("{e}");
        }
        log::debug!("house readings assembled");

        HouseReadings {
            ascendant_narrative,
            chart_ruler,
            placements,
            house_rulers,
            part_of_fortune: part_of_fortune.into(),
        }
    }
}

impl Default for InterpretationAssembler {
    fn default() -> Self {
        Self::new(InterpretationSettings::default())
    }
}
