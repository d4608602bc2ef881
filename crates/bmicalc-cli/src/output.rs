//! CLI output formatting.

use std::io::{self, Write};

use serde::Serialize;

use bmicalc_core::classification::{Classification, BANDS};
use bmicalc_core::evaluator::BmiReport;

/// Render the full band table, marking the matched band.
#[must_use]
pub fn format_band_table(current: Classification) -> String {
    let mut out = String::from("WHO classification bands:\n");
    for band in BANDS {
        let marker = if band == current { "→" } else { " " };
        let (lower, upper) = band.bounds();
        let interval = match upper {
            Some(upper) => format!("[{lower}, {upper})"),
            None => format!("[{lower}, ∞)"),
        };
        out.push_str(&format!(
            "  {marker} {interval:<12} {}\n",
            band.label()
        ));
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    bmi: f64,
    classification: &'a str,
    color: &'a str,
}

/// Serialize a report for `--json` output. BMI is rounded to the
/// display precision.
pub fn format_json(report: &BmiReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        bmi: report.rounded_bmi(),
        classification: report.classification.label(),
        color: report.color().name(),
    })
}

/// Write the two-decimal BMI value to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, report: &BmiReport) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", report.display_bmi())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmicalc_core::evaluate;

    #[test]
    fn band_table_marks_current() {
        let table = format_band_table(Classification::NormalWeight);
        assert!(table.contains("→ [18.5, 25)"));
        assert!(table.contains("Underweight"));
        assert!(table.contains("Obesity Class III (Morbid)"));
        assert!(table.contains("[40, ∞)"));
        // Exactly one marker.
        assert_eq!(table.matches('→').count(), 1);
    }

    #[test]
    fn band_table_all_bands_listed() {
        let table = format_band_table(Classification::Underweight);
        for band in BANDS {
            assert!(table.contains(band.label()), "missing {}", band.label());
        }
    }

    #[test]
    fn json_report_shape() {
        let report = evaluate("70", "1.75").unwrap();
        let json = format_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bmi"], 22.86);
        assert_eq!(value["classification"], "Normal weight");
        assert_eq!(value["color"], "green");
    }

    #[test]
    fn json_report_severe_obesity() {
        let report = evaluate("120", "1.80").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert_eq!(value["bmi"], 37.04);
        assert_eq!(value["classification"], "Obesity Class II (Severe)");
        assert_eq!(value["color"], "red");
    }

    #[test]
    fn write_report_to_file() {
        let dir = std::env::temp_dir().join("bmicalc-output-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bmi.txt");
        let report = evaluate("70", "1.75").unwrap();
        write_to_file(path.to_str().unwrap(), &report).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "22.86");
        std::fs::remove_file(&path).ok();
    }
}
