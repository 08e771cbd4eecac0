pub mod types;

pub use types::{
    Body, BodyPosition, ChartInput, HouseData, HousePositions, ALL_BODIES, PERSONAL_BODIES,
};
