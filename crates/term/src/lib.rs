//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal backend, rather than going through a widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One parametrized view over theme presets instead of duplicated screens
//! - Let the view own layout math so mouse hit-testing cannot drift from
//!   what is drawn

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_slider_core as core;
pub use tui_slider_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{Theme, CLASSIC, OCEAN, THEMES};
