//! Application configuration from CLI flags and environment.

use clap::Parser;

/// BmiCalc-rs — WHO Body Mass Index calculator.
#[derive(Parser, Debug)]
#[command(name = "bmicalc", version, about)]
pub struct AppConfig {
    /// Weight in kilograms (raw text; comma decimal separators accepted).
    #[arg(short, long, env = "BMICALC_WEIGHT", allow_negative_numbers = true)]
    pub weight: Option<String>,

    /// Height in meters (raw text; comma decimal separators accepted).
    #[arg(short = 'H', long, env = "BMICALC_HEIGHT", allow_negative_numbers = true)]
    pub height: Option<String>,

    /// Quiet mode (only output the BMI value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the full classification band table.
    #[arg(short, long)]
    pub details: bool,

    /// Output the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the BMI value to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Launch the interactive form (default when no values are given).
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether to run the interactive form instead of the one-shot CLI.
    #[must_use]
    pub fn wants_tui(&self) -> bool {
        self.tui || (self.weight.is_none() && self.height.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::try_parse_from(args).unwrap()
    }

    #[test]
    fn parses_weight_and_height() {
        let config = parse_from(&["bmicalc", "--weight", "70", "--height", "1.75"]);
        assert_eq!(config.weight.as_deref(), Some("70"));
        assert_eq!(config.height.as_deref(), Some("1.75"));
        assert!(!config.wants_tui());
    }

    #[test]
    fn short_flags() {
        let config = parse_from(&["bmicalc", "-w", "70,5", "-H", "1,75", "-q", "-d"]);
        assert_eq!(config.weight.as_deref(), Some("70,5"));
        assert_eq!(config.height.as_deref(), Some("1,75"));
        assert!(config.quiet);
        assert!(config.details);
    }

    #[test]
    fn no_values_defaults_to_tui() {
        let config = parse_from(&["bmicalc"]);
        assert!(config.wants_tui());
    }

    #[test]
    fn explicit_tui_flag() {
        let config = parse_from(&["bmicalc", "--tui", "-w", "70", "-H", "1.75"]);
        assert!(config.wants_tui());
    }

    #[test]
    fn one_value_is_not_tui() {
        // A single supplied value means CLI mode was intended; the missing
        // counterpart is a configuration error handled at dispatch.
        let config = parse_from(&["bmicalc", "-w", "70"]);
        assert!(!config.wants_tui());
    }
}
