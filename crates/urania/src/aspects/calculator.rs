use std::collections::BTreeMap;

use crate::aspects::types::{Aspect, AspectSettings, AspectType, OrbTable};
use crate::ephemeris::{Body, ChartInput};
use crate::western::normalize_degrees;

/// Orbs below this are flagged exact.
const EXACT_ORB: f64 = 0.1;

/// Aspect calculator
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Circular distance between two longitudes, in [0, 180].
    pub fn separation(lon1: f64, lon2: f64) -> f64 {
        let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
        if raw_diff > 180.0 {
            360.0 - raw_diff
        } else {
            raw_diff
        }
    }

    /// Every aspect type the pair falls within orb of.
    ///
    /// Usually zero or one; overlapping orbs may yield several.
    pub fn calculate_aspects(
        &self,
        (body_a, lon_a): (Body, f64),
        (body_b, lon_b): (Body, f64),
        orbs: &OrbTable,
    ) -> Vec<Aspect> {
        let separation = Self::separation(lon_a, lon_b);

        // Early exit if no aspect can reach this separation
        if AspectType::all().all(|a| (separation - a.angle()).abs() > orbs.get(a)) {
            return Vec::new();
        }

        AspectType::all()
            .filter_map(|aspect_type| {
                let orb = (separation - aspect_type.angle()).abs();
                (orb <= orbs.get(aspect_type)).then(|| Aspect {
                    body_a,
                    body_b,
                    aspect_type,
                    separation,
                    orb,
                    is_exact: orb < EXACT_ORB,
                })
            })
            .collect()
    }

    /// All in-orb aspects between distinct bodies, unranked.
    pub fn candidates(&self, longitudes: &BTreeMap<Body, f64>, orbs: &OrbTable) -> Vec<Aspect> {
        let bodies: Vec<(Body, f64)> = longitudes
            .iter()
            .filter(|(_, lon)| lon.is_finite())
            .map(|(b, lon)| (*b, *lon))
            .collect();

        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                pairs.extend(self.calculate_aspects(bodies[i], bodies[j], orbs));
            }
        }
        pairs
    }

    /// The tightest aspects among the given bodies.
    pub fn compute(&self, longitudes: &BTreeMap<Body, f64>, settings: &AspectSettings) -> Vec<Aspect> {
        rank_aspects(self.candidates(longitudes, &settings.orbs), settings.max_results)
    }

    /// [`Self::compute`] over the bodies of a chart with usable positions.
    ///
    /// Bodies whose position failed are left out of every pairing.
    pub fn compute_for_chart(&self, input: &ChartInput, settings: &AspectSettings) -> Vec<Aspect> {
        let longitudes = input.resolved_longitudes();
        let skipped = input.positions.len() - longitudes.len();
        if skipped > 0 {
            log::debug!("aspects: {skipped} bodies without a position left out");
        }
        self.compute(&longitudes, settings)
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort ascending by orb and keep the first `limit`.
///
/// The sort is stable, so equal orbs keep body-pair order.
pub fn rank_aspects(mut candidates: Vec<Aspect>, limit: usize) -> Vec<Aspect> {
    candidates.sort_by(|a, b| a.orb.total_cmp(&b.orb));
    candidates.truncate(limit);
    candidates
}
