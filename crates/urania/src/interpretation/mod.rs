pub mod assembler;
pub mod report;
pub mod texts;

pub use assembler::InterpretationAssembler;
pub use report::{AspectReading, BodyHouse, BodyReading, HouseReadings, NatalReport, PartOfFortuneReading, Section};
pub use texts::{ascendant_text, fortune_text, placement_text};
