//! WHO weight-status bands.
//!
//! The six bands partition the non-negative BMI line into contiguous
//! half-open intervals. Classification is an ascending first-match scan,
//! so a boundary value always falls into the upper band and the final
//! band is a catch-all for everything at or above 40.

use crate::color::ColorToken;
use crate::constants::{
    NORMAL_LIMIT, OBESITY_I_LIMIT, OBESITY_II_LIMIT, OVERWEIGHT_LIMIT, UNDERWEIGHT_LIMIT,
};

/// One of the six WHO classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Underweight,
    NormalWeight,
    Overweight,
    ObesityClassI,
    ObesityClassII,
    ObesityClassIII,
}

/// All bands in ascending BMI order.
pub const BANDS: [Classification; 6] = [
    Classification::Underweight,
    Classification::NormalWeight,
    Classification::Overweight,
    Classification::ObesityClassI,
    Classification::ObesityClassII,
    Classification::ObesityClassIII,
];

impl Classification {
    /// Classify a BMI value. First matching half-open interval wins.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Self::Underweight
        } else if bmi < NORMAL_LIMIT {
            Self::NormalWeight
        } else if bmi < OVERWEIGHT_LIMIT {
            Self::Overweight
        } else if bmi < OBESITY_I_LIMIT {
            Self::ObesityClassI
        } else if bmi < OBESITY_II_LIMIT {
            Self::ObesityClassII
        } else {
            Self::ObesityClassIII
        }
    }

    /// User-facing band label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity Class I",
            Self::ObesityClassII => "Obesity Class II (Severe)",
            Self::ObesityClassIII => "Obesity Class III (Morbid)",
        }
    }

    /// Display color token for this band.
    #[must_use]
    pub fn color(self) -> ColorToken {
        match self {
            Self::Underweight => ColorToken::LightOrange,
            Self::NormalWeight => ColorToken::Green,
            Self::Overweight => ColorToken::DarkYellow,
            Self::ObesityClassI => ColorToken::OrangeRed,
            Self::ObesityClassII => ColorToken::Red,
            Self::ObesityClassIII => ColorToken::DarkRed,
        }
    }

    /// Half-open interval `[lower, upper)` of this band over BMI.
    /// `None` upper bound means unbounded.
    #[must_use]
    pub fn bounds(self) -> (f64, Option<f64>) {
        match self {
            Self::Underweight => (0.0, Some(UNDERWEIGHT_LIMIT)),
            Self::NormalWeight => (UNDERWEIGHT_LIMIT, Some(NORMAL_LIMIT)),
            Self::Overweight => (NORMAL_LIMIT, Some(OVERWEIGHT_LIMIT)),
            Self::ObesityClassI => (OVERWEIGHT_LIMIT, Some(OBESITY_I_LIMIT)),
            Self::ObesityClassII => (OBESITY_I_LIMIT, Some(OBESITY_II_LIMIT)),
            Self::ObesityClassIII => (OBESITY_II_LIMIT, None),
        }
    }

    /// Whether a BMI value falls inside this band's interval.
    #[must_use]
    pub fn contains(self, bmi: f64) -> bool {
        let (lower, upper) = self.bounds();
        bmi >= lower && upper.map_or(true, |u| bmi < u)
    }
}
