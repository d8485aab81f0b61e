//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Mouse taps are
//! not mapped here: translating a click into a grid cell needs the view's
//! layout, so hit-testing lives in the term crate.

pub mod map;

pub use tui_slider_types as types;

pub use map::{handle_key_event, should_quit};
