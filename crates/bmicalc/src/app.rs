//! Application entry point and dispatch.

use anyhow::Result;

use bmicalc_cli::output::{format_json, write_to_file};
use bmicalc_cli::presenter::{CLIResultPresenter, ResultPresenter};
use bmicalc_core::constants::exit_codes;
use bmicalc_core::evaluator::evaluate;

use crate::config::AppConfig;
use crate::errors::handle_error;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bmicalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.wants_tui() {
        return run_tui();
    }

    // CLI mode
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let (weight, height) = match (&config.weight, &config.height) {
        (Some(weight), Some(height)) => (weight, height),
        _ => {
            bmicalc_cli::ui::print_error("both --weight and --height are required");
            std::process::exit(exit_codes::ERROR_CONFIG);
        }
    };

    let presenter = CLIResultPresenter::new(config.quiet);

    match evaluate(weight, height) {
        Ok(report) => {
            if config.json {
                println!("{}", format_json(&report)?);
            } else {
                presenter.present_report(&report, config.details);
            }

            // Write to file if requested
            if let Some(ref path) = config.output {
                write_to_file(path, &report)?;
            }

            Ok(())
        }
        Err(error) => {
            presenter.present_error(&error.to_string());
            std::process::exit(handle_error(&error));
        }
    }
}

fn run_tui() -> Result<()> {
    let mut app = bmicalc_tui::FormApp::new();
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(())
}
