//! Input field widgets for the form.

use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render one input box. The focused box gets a highlighted border and
/// owns the terminal cursor.
pub fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let theme = ColorTheme::default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(theme.input_border_style(focused));

    let paragraph = Paragraph::new(value).block(block);
    frame.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        #[allow(clippy::cast_possible_truncation)]
        let x = (area.x + 1 + value.len() as u16).min(area.x + area.width - 2);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
