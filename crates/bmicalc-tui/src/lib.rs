//! # bmicalc-tui
//!
//! Single-screen interactive BMI form using ratatui with Elm architecture.

pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod model;
pub mod result_panel;
pub mod styles;

pub use keymap::{map_key, KeyAction};
pub use model::{Field, FormApp};
pub use styles::token_color;
