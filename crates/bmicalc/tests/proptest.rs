//! Property-based tests at the application boundary.

use proptest::prelude::*;

use bmicalc_core::{evaluate, BmiError, Classification};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any positive weight/height pair yields a valid report whose BMI
    /// matches the formula.
    #[test]
    fn formula_holds(w in 20.0f64..300.0, h in 1.0f64..2.2) {
        let report = evaluate(&w.to_string(), &h.to_string()).unwrap();
        prop_assert!((report.bmi - w / (h * h)).abs() < 1e-9);
    }

    /// The displayed BMI always has exactly two decimals.
    #[test]
    fn display_has_two_decimals(w in 20.0f64..300.0, h in 1.0f64..2.2) {
        let report = evaluate(&w.to_string(), &h.to_string()).unwrap();
        let display = report.display_bmi();
        let (_, decimals) = display.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2, "display: {}", display);
    }

    /// The classification of a report always contains its own BMI.
    #[test]
    fn classification_contains_bmi(w in 20.0f64..300.0, h in 1.0f64..2.2) {
        let report = evaluate(&w.to_string(), &h.to_string()).unwrap();
        prop_assert!(report.classification.contains(report.bmi));
    }

    /// Garbage text never evaluates.
    #[test]
    fn alphabetic_input_is_invalid(s in "[a-zA-Z]{1,8}") {
        prop_assert_eq!(evaluate(&s, "1.75"), Err(BmiError::InvalidInput));
        prop_assert_eq!(evaluate("70", &s), Err(BmiError::InvalidInput));
    }
}

/// With height 1, weight equals BMI — walk the whole ladder.
#[test]
fn band_ladder_with_unit_height() {
    for (weight, expected) in [
        ("10", Classification::Underweight),
        ("18.49", Classification::Underweight),
        ("18.5", Classification::NormalWeight),
        ("24.99", Classification::NormalWeight),
        ("25", Classification::Overweight),
        ("29.99", Classification::Overweight),
        ("30", Classification::ObesityClassI),
        ("34.99", Classification::ObesityClassI),
        ("35", Classification::ObesityClassII),
        ("39.99", Classification::ObesityClassII),
        ("40", Classification::ObesityClassIII),
        ("100", Classification::ObesityClassIII),
    ] {
        let report = evaluate(weight, "1").unwrap();
        assert_eq!(report.classification, expected, "weight={weight}");
    }
}
