//! CLI result presenter.

use bmicalc_core::evaluator::BmiReport;

use crate::output::format_band_table;
use crate::ui;

/// Presents evaluation outcomes on the terminal.
pub trait ResultPresenter {
    /// Present a successful report.
    fn present_report(&self, report: &BmiReport, details: bool);

    /// Present an evaluation error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, report: &BmiReport, details: bool) {
        if self.quiet {
            println!("{}", report.display_bmi());
            return;
        }

        println!("BMI: {}", report.display_bmi());

        let label = report.classification.label();
        if ui::is_color_disabled() {
            println!("Classification: {label}");
        } else {
            println!(
                "Classification: {}",
                ui::token_style(report.color()).apply_to(label)
            );
        }

        if details {
            print!("{}", format_band_table(report.classification));
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
