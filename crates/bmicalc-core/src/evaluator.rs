//! The BMI evaluator.
//!
//! `evaluate` is the single public contract: two raw strings in, a tagged
//! outcome out. It is a pure function of its inputs and never panics.

use crate::classification::Classification;
use crate::color::ColorToken;
use crate::constants::{DISPLAY_DECIMALS, INVALID_INPUT_MESSAGE};
use crate::input;

/// Error type for BMI evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BmiError {
    /// Weight or height is missing, non-numeric, zero, or — for height
    /// only — non-positive.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,
}

/// A successful evaluation.
///
/// `bmi` holds the unrounded value; classification is derived from it.
/// Display forms round to [`DISPLAY_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    /// Unrounded `weight / height²`.
    pub bmi: f64,
    /// Band matching the unrounded value.
    pub classification: Classification,
}

impl BmiReport {
    /// Display color token of the matched band.
    #[must_use]
    pub fn color(&self) -> ColorToken {
        self.classification.color()
    }

    /// BMI rounded to the display precision.
    #[must_use]
    pub fn rounded_bmi(&self) -> f64 {
        let factor = 10f64.powi(DISPLAY_DECIMALS as i32);
        (self.bmi * factor).round() / factor
    }

    /// Two-decimal display form, e.g. `"22.86"`.
    #[must_use]
    pub fn display_bmi(&self) -> String {
        format!("{:.*}", DISPLAY_DECIMALS, self.bmi)
    }
}

/// Evaluate raw weight (kg) and height (m) strings.
///
/// Comma decimal separators are accepted. The result is `Err` when either
/// value fails to parse, either value is exactly zero (zero is treated
/// identically to a missing value), or height is negative.
///
/// # Example
/// ```
/// let report = bmicalc_core::evaluate("70", "1.75").unwrap();
/// assert_eq!(report.display_bmi(), "22.86");
/// assert_eq!(report.classification.label(), "Normal weight");
///
/// assert!(bmicalc_core::evaluate("70", "0").is_err());
/// ```
pub fn evaluate(weight_raw: &str, height_raw: &str) -> Result<BmiReport, BmiError> {
    let weight = input::parse_decimal(weight_raw).ok_or(BmiError::InvalidInput)?;
    let height = input::parse_decimal(height_raw).ok_or(BmiError::InvalidInput)?;

    // Zero is indistinguishable from "not entered".
    if weight == 0.0 || height <= 0.0 {
        return Err(BmiError::InvalidInput);
    }

    let bmi = weight / (height * height);
    let classification = Classification::from_bmi(bmi);
    tracing::debug!(bmi, band = classification.label(), "evaluated");

    Ok(BmiReport {
        bmi,
        classification,
    })
}
