//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and it owns the
//! board layout math, so mouse hit-testing lives here too: the same
//! arithmetic that places a tile decides which tile a click landed on.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::theme::Theme;
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Computed placement of the board frame within a viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A themed terminal renderer for the puzzle.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    theme: Theme,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
        }
    }
}

impl GameView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap to the next theme preset.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.cycle();
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (GRID_SIZE as u16) * self.theme.tile_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.theme.tile_h + 2;
        Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell {
            ch: ' ',
            style: self.theme.backdrop,
        });

        let layout = self.layout(viewport);

        self.draw_header(fb, layout);
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            self.theme.border,
        );

        for row in 0..GRID_SIZE as usize {
            for col in 0..GRID_SIZE as usize {
                self.draw_cell(fb, layout, row as u16, col as u16, snap.board[row][col]);
            }
        }

        self.draw_help(fb, viewport, layout);

        if snap.solved {
            self.draw_solved_overlay(fb, layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Map a terminal coordinate to the grid cell under it.
    ///
    /// Returns `None` for clicks on the border or outside the board. The
    /// result uses the same (row, col) addressing the core expects.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<(i8, i8)> {
        let layout = self.layout(viewport);
        let inner_x = x.checked_sub(layout.start_x + 1)?;
        let inner_y = y.checked_sub(layout.start_y + 1)?;

        let col = inner_x / self.theme.tile_w;
        let row = inner_y / self.theme.tile_h;
        if row >= GRID_SIZE as u16 || col >= GRID_SIZE as u16 {
            return None;
        }
        Some((row as i8, col as i8))
    }

    fn draw_header(&self, fb: &mut FrameBuffer, layout: Layout) {
        let Some(y) = layout.start_y.checked_sub(2) else {
            return;
        };
        let title = self.theme.title;
        let title_w = title.chars().count() as u16;
        let x = layout.start_x + layout.frame_w.saturating_sub(title_w) / 2;
        fb.put_str(x, y, title, self.theme.header);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, layout: Layout) {
        let y = layout.start_y + layout.frame_h + 1;
        if y >= viewport.height {
            return;
        }
        let help = "arrows slide  click taps  N new  T theme  Q quit";
        let help_w = help.chars().count() as u16;
        let x = viewport.width.saturating_sub(help_w) / 2;
        fb.put_str(x, y, help, self.theme.help);
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        row: u16,
        col: u16,
        cell: crate::types::Cell,
    ) {
        let px = layout.start_x + 1 + col * self.theme.tile_w;
        let py = layout.start_y + 1 + row * self.theme.tile_h;

        match cell {
            Some(tile) => {
                fb.fill_rect(px, py, self.theme.tile_w, self.theme.tile_h, ' ', self.theme.tile);
                // Single digit, centered on the tile.
                let digit = char::from(b'0' + tile);
                fb.put_char(
                    px + self.theme.tile_w / 2,
                    py + self.theme.tile_h / 2,
                    digit,
                    self.theme.tile,
                );
            }
            None => {
                fb.fill_rect(px, py, self.theme.tile_w, self.theme.tile_h, ' ', self.theme.empty);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Modal-style box announcing the win, drawn over the board.
    fn draw_solved_overlay(&self, fb: &mut FrameBuffer, layout: Layout) {
        let lines = ["SOLVED!", "N = new game"];
        let box_w = (lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16)
            + 4;
        let box_h = lines.len() as u16 + 2;

        let x = layout.start_x + layout.frame_w.saturating_sub(box_w) / 2;
        let y = layout.start_y + layout.frame_h.saturating_sub(box_h) / 2;

        let style = self.theme.overlay;
        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        self.draw_border(fb, x, y, box_w, box_h, style);
        for (i, line) in lines.iter().enumerate() {
            let line_w = line.chars().count() as u16;
            let lx = x + box_w.saturating_sub(line_w) / 2;
            fb.put_str(lx, y + 1 + i as u16, line, style);
        }
    }
}
