//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::styled("BmiCalc-rs", Style::default().fg(Color::Cyan)),
        Span::raw(" | WHO adult BMI classification (kg, m)"),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" BmiCalc-rs ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
