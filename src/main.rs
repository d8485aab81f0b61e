//! Terminal sliding-puzzle runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for keyboard and
//! mouse input and a framebuffer-based renderer (no widget toolkit).
//! Everything is event-driven: the loop blocks on the next terminal event,
//! applies at most one action, and redraws.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_slider::core::{GameEvent, GameSession};
use tui_slider::input::{handle_key_event, should_quit};
use tui_slider::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_slider::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(clock_seed());
    let mut view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    if session.start() == Some(GameEvent::Solved) {
        // Only reachable if all 1000 shuffle moves round-tripped exactly.
        term.bell()?;
    }

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session.snapshot(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let mut event_out = None;
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::CycleTheme) => {
                        view.cycle_theme();
                        term.invalidate();
                    }
                    Some(action) => {
                        event_out = session.apply_action(action);
                    }
                    None => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some((row, col)) = view.hit_test(viewport, mouse.column, mouse.row) {
                    event_out = session.apply_action(GameAction::Tap { row, col });
                }
            }
            Event::Resize(..) => {
                term.invalidate();
            }
            _ => {}
        }

        if event_out == Some(GameEvent::Solved) {
            // The overlay is drawn from the snapshot; the bell is the
            // one-shot part of the alert.
            term.bell()?;
        }
    }
}

/// Seed from the wall clock; tests and benches pass explicit seeds instead.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
