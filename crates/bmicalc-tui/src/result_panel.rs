//! Result panel: the evaluation outcome or an idle hint.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use bmicalc_core::evaluator::{BmiError, BmiReport};

use crate::styles::{token_color, ColorTheme};

/// Render the outcome panel.
///
/// Holds exactly one of: idle hint, result, or error — a new error always
/// replaces a previously displayed result.
pub fn render_result(frame: &mut Frame, area: Rect, outcome: Option<&Result<BmiReport, BmiError>>) {
    let theme = ColorTheme::default();

    let lines = match outcome {
        None => vec![Line::from(Span::styled(
            "Enter weight and height, then press Enter.",
            theme.muted_style(),
        ))],
        Some(Ok(report)) => vec![
            Line::from(vec![
                Span::raw("Your BMI: "),
                Span::styled(
                    report.display_bmi(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                report.classification.label(),
                Style::default()
                    .fg(token_color(report.color()))
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        Some(Err(err)) => vec![Line::from(Span::styled(
            err.to_string(),
            theme.error_style(),
        ))],
    };

    let block = Block::default().borders(Borders::ALL).title(" Result ");
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
