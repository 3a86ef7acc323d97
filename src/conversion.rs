//! Recipe conversion: roll and soy quantities to water, mold, flour and weight.

use crate::config::*;
use crate::utils::parse_field_value;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived quantities for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub water: u64,
    /// Rounded to two decimal places.
    pub mold: f64,
    pub flour: u64,
    pub weight: u64,
}

impl ConversionResult {
    /// Mold as displayed, always with two decimals.
    pub fn mold_text(&self) -> String {
        format!("{:.2}", self.mold)
    }
}

/// Rejected calculation input. Every variant is shown to the user as the
/// same "Invalid input" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    MissingRoll,
    MissingSoy,
    RollBelowMinimum(u64),
    SoyBelowMinimum(u64),
}

impl ConversionError {
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MissingRoll => write!(f, "Roll value is missing"),
            ConversionError::MissingSoy => write!(f, "Soy value is missing"),
            ConversionError::RollBelowMinimum(v) => {
                write!(f, "Roll value {} is below the minimum of {}", v, MIN_VALUE)
            }
            ConversionError::SoyBelowMinimum(v) => {
                write!(f, "Soy value {} is below the minimum of {}", v, MIN_VALUE)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Round half away from zero to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the recipe for `roll` and `soy`.
///
/// Only the lower bound is checked here; values above `MAX_VALUE` that were
/// typed in are still converted. Rounding is half away from zero.
pub fn convert(roll: Option<u64>, soy: Option<u64>) -> Result<ConversionResult, ConversionError> {
    let roll = roll.ok_or(ConversionError::MissingRoll)?;
    let soy = soy.ok_or(ConversionError::MissingSoy)?;
    if roll < MIN_VALUE {
        return Err(ConversionError::RollBelowMinimum(roll));
    }
    if soy < MIN_VALUE {
        return Err(ConversionError::SoyBelowMinimum(soy));
    }

    let soy_f = soy as f64;
    let water = (soy_f * WATER_MULTIPLIER).round();
    let flour = (soy_f * FLOUR_MULTIPLIER).round();
    let mold = round2((soy_f + flour) * MOLD_MULTIPLIER_1 / MOLD_MULTIPLIER_2);
    let weight = ((soy_f + water + mold + flour) / roll as f64).floor();

    Ok(ConversionResult {
        water: water as u64,
        mold,
        flour: flour as u64,
        weight: weight as u64,
    })
}

/// Parse both field texts and convert. Empty text counts as a missing value.
pub fn convert_texts(roll: &str, soy: &str) -> Result<ConversionResult, ConversionError> {
    let result = convert(parse_field_value(roll), parse_field_value(soy));
    match &result {
        Ok(r) => info!(
            "Calculated recipe for roll={} soy={}: water={} mold={} flour={} weight={}",
            roll,
            soy,
            r.water,
            r.mold_text(),
            r.flour,
            r.weight
        ),
        Err(e) => warn!("Calculation rejected: {}", e),
    }
    result
}
