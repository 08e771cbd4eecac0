pub mod house_rulers;
pub mod houses;
pub mod parts;
pub mod rulers;
pub mod signs;

pub use house_rulers::{ruler_in_house_text, ChartRulerInfo, HouseRulerInfo, HouseRulerResolver};
pub use houses::{forward_arc, house_of, house_of_positions, house_theme, in_arc, HousePlacement};
pub use parts::{chart_part_of_fortune, is_day_birth, part_of_fortune, ArabicPart};
pub use rulers::{get_sign_ruler, get_sign_ruler_from_longitude, RulerScheme, RulershipTable, SignRulers, RULERSHIP};
pub use signs::{normalize_degrees, sign_placement, SignPlacement, ZodiacSign, ALL_SIGNS};
