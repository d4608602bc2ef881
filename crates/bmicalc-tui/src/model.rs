//! Form application model (Elm architecture).
//!
//! The screen is a two-field form with a calculate and a clear action.
//! Evaluation runs synchronously inside the key event; there is never
//! more than one in-flight operation.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use bmicalc_core::evaluator::{evaluate, BmiError, BmiReport};

use crate::footer::render_footer;
use crate::form::render_input;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::result_panel::render_result;

/// Maximum characters accepted per input field.
const MAX_FIELD_LEN: usize = 12;

/// The form field owning the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
}

impl Field {
    /// The other field. With two fields, next and previous coincide.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Weight => Self::Height,
            Self::Height => Self::Weight,
        }
    }
}

/// Form state (Elm Model).
pub struct FormApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Field currently holding focus.
    pub focus: Field,
    /// Raw weight text as typed.
    pub weight: String,
    /// Raw height text as typed.
    pub height: String,
    /// Outcome of the last calculate action, if any.
    pub outcome: Option<Result<BmiReport, BmiError>>,
}

impl FormApp {
    /// Create a new form in the initial empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Field::Weight,
            weight: String::new(),
            height: String::new(),
            outcome: None,
        }
    }

    /// Update the model for one keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::NextField | KeyAction::PrevField => {
                self.focus = self.focus.toggled();
            }
            KeyAction::Input(c) => {
                let field = self.focused_field_mut();
                if field.len() < MAX_FIELD_LEN {
                    field.push(c);
                }
            }
            KeyAction::Backspace => {
                self.focused_field_mut().pop();
            }
            KeyAction::Calculate => self.calculate(),
            KeyAction::Clear => self.clear(),
            KeyAction::None => {}
        }
    }

    /// Run the evaluator on the current buffers and store the outcome.
    /// Total: exactly one outcome slot, so a new error replaces any
    /// previously shown result.
    pub fn calculate(&mut self) {
        let outcome = evaluate(&self.weight, &self.height);
        tracing::debug!(ok = outcome.is_ok(), "calculate");
        self.outcome = Some(outcome);
    }

    /// Discard both buffers and the outcome, returning to the initial
    /// empty state. Total.
    pub fn clear(&mut self) {
        self.weight.clear();
        self.height.clear();
        self.outcome = None;
        self.focus = Field::Weight;
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
        }
    }

    /// Compute the screen layout.
    ///
    /// Returns (header, weight input, height input, result, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(3), // weight input
                Constraint::Length(3), // height input
                Constraint::Min(4),    // result
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3], outer[4])
    }

    /// Render the full view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, weight_area, height_area, result_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area);
        render_input(
            frame,
            weight_area,
            "Weight (kg)",
            &self.weight,
            self.focus == Field::Weight,
        );
        render_input(
            frame,
            height_area,
            "Height (m)",
            &self.height,
            self.focus == Field::Height,
        );
        render_result(frame, result_area, self.outcome.as_ref());
        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the event loop: draw, poll, update, until quit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    let action = map_key(key_event);
                    self.handle_key_action(action);
                }
            }
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}

impl Default for FormApp {
    fn default() -> Self {
        Self::new()
    }
}
