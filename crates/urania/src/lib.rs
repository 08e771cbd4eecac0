//! Natal chart interpretation.
//!
//! Turns ecliptic longitudes and house cusps from an external ephemeris into
//! signs, houses, aspects, house rulers and the Part of Fortune, and gathers
//! them into a [`NatalReport`]. Each section of the report either carries its
//! value or says why it is unavailable.
//!
//! ```no_run
//! use urania::{ChartInput, InterpretationAssembler};
//!
//! # fn run(input: ChartInput) {
//! let assembler = InterpretationAssembler::default();
//! let report = assembler.assemble(&input);
//! for notice in report.notices() {
//!     log::warn!("{notice}");
//! }
//! # }
//! ```

pub mod aspects;
pub mod ephemeris;
pub mod error;
pub mod interpretation;
pub mod settings;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectSettings, AspectType, OrbTable};
pub use ephemeris::{Body, BodyPosition, ChartInput, HouseData, HousePositions};
pub use error::{SettingsError, Unavailable};
pub use interpretation::{InterpretationAssembler, NatalReport, Section};
pub use settings::InterpretationSettings;
pub use western::{HousePlacement, RulerScheme, SignPlacement, ZodiacSign};
