//! Terminal sliding puzzle (workspace facade crate).
//!
//! This package keeps the `tui_slider::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_slider_core as core;
pub use tui_slider_input as input;
pub use tui_slider_term as term;
pub use tui_slider_types as types;
