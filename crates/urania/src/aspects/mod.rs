pub mod calculator;
pub mod types;

pub use calculator::{rank_aspects, AspectCalculator};
pub use types::{Aspect, AspectSettings, AspectType, OrbTable, ALL_ASPECT_TYPES};
