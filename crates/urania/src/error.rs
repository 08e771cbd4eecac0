//! Error types for chart interpretation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::Body;

/// Why a derived fact could not be produced.
///
/// These are local, non-fatal failures: a component returns one instead of a
/// value and the assembler turns it into an explicit notice in the report.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Unavailable {
    #[error("position of {body} is unavailable: {reason}")]
    MissingBodyData { body: Body, reason: String },
    #[error("house data is unavailable: {reason}")]
    HouseDataUnavailable { reason: String },
    #[error("{value} cannot be derived: {reason}")]
    DerivedValueUnavailable { value: String, reason: String },
}

impl Unavailable {
    pub fn missing_body(body: Body, reason: impl Into<String>) -> Self {
        Self::MissingBodyData {
            body,
            reason: reason.into(),
        }
    }

    pub fn house_data(reason: impl Into<String>) -> Self {
        Self::HouseDataUnavailable {
            reason: reason.into(),
        }
    }

    /// Wrap an upstream failure as the reason a dependent value is missing.
    pub fn derived(value: impl Into<String>, cause: &Unavailable) -> Self {
        Self::DerivedValueUnavailable {
            value: value.into(),
            reason: cause.to_string(),
        }
    }
}

/// Invalid interpretation settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("unknown body {name:?}")]
    UnknownBody { name: String },
    #[error("house number {house} is outside 1..=12")]
    HouseOutOfRange { house: u8 },
    #[error("orb for {aspect} must be a non-negative number, got {orb}")]
    InvalidOrb { aspect: String, orb: f64 },
    #[error("unknown ruler scheme {name:?}")]
    UnknownRulerScheme { name: String },
}
