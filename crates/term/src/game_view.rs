//! GameView: maps the engine's logical surface into a terminal framebuffer.
//!
//! The engine draws onto an 840x640 surface. One terminal cell covers
//! `unit_w` x `unit_h` surface units (10x20 by default, which keeps square
//! tiles roughly square on typical fonts), so the play area is 84x32 cells plus
//! a one-cell border.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{MatchEngine, Surface, TextRole, TextStyle};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, SURFACE_HEIGHT, SURFACE_WIDTH};

const PLAY_BG: Rgb = Rgb::new(22, 26, 36);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal frontend for the match engine.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Surface units per terminal column.
    unit_w: i32,
    /// Surface units per terminal row.
    unit_h: i32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            unit_w: 10,
            unit_h: 20,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(unit_w: i32, unit_h: i32) -> Self {
        Self {
            unit_w: unit_w.max(1),
            unit_h: unit_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Play area size in cells (without border).
    pub fn play_size(&self) -> (u16, u16) {
        let w = (SURFACE_WIDTH + self.unit_w - 1) / self.unit_w;
        let h = (SURFACE_HEIGHT + self.unit_h - 1) / self.unit_h;
        (w as u16, h as u16)
    }

    /// Smallest viewport that shows the whole play area and its border.
    pub fn min_viewport(&self) -> Viewport {
        let (w, h) = self.play_size();
        Viewport::new(w + 2, h + 2)
    }

    /// Top-left cell of the play area (inside the border).
    pub fn play_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame = self.min_viewport();
        let start_x = viewport.width.saturating_sub(frame.width) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame.height) / 2,
            AnchorY::Top => 0,
        };
        (start_x + 1, start_y + 1)
    }

    /// Map a terminal cell to the surface point at its center.
    ///
    /// Returns None for cells outside the play area.
    pub fn to_surface(&self, viewport: Viewport, col: u16, row: u16) -> Option<(i32, i32)> {
        let (ox, oy) = self.play_origin(viewport);
        let (w, h) = self.play_size();
        if col < ox || row < oy || col >= ox + w || row >= oy + h {
            return None;
        }
        Some(cell_center(
            self.unit_w,
            self.unit_h,
            (col - ox) as i32,
            (row - oy) as i32,
        ))
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, engine: &MatchEngine, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (ox, oy) = self.play_origin(viewport);
        let (w, h) = self.play_size();
        let bg = CellStyle::new(PLAY_BG, PLAY_BG);
        fb.fill_rect(ox, oy, w, h, ' ', bg);
        self.draw_border(
            fb,
            ox - 1,
            oy - 1,
            w + 2,
            h + 2,
            CellStyle::new(BORDER_FG, Rgb::BLACK),
        );

        let mut surface = TerminalSurface {
            fb: &mut *fb,
            origin: (ox, oy),
            unit_w: self.unit_w,
            unit_h: self.unit_h,
        };
        engine.render(&mut surface);

        let min = self.min_viewport();
        if viewport.width < min.width || viewport.height < min.height {
            let msg = format!("Terminal too small: need {}x{}", min.width, min.height);
            let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
            fb.put_str(0, 0, &msg, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, engine: &MatchEngine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
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
}

/// Surface point at the center of play-area cell `(col, row)`.
fn cell_center(unit_w: i32, unit_h: i32, col: i32, row: i32) -> (i32, i32) {
    (col * unit_w + unit_w / 2, row * unit_h + unit_h / 2)
}

/// [`Surface`] over a framebuffer region, scaling surface units down to cells.
pub struct TerminalSurface<'a> {
    fb: &'a mut FrameBuffer,
    origin: (u16, u16),
    unit_w: i32,
    unit_h: i32,
}

impl TerminalSurface<'_> {
    fn cell(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let x = self.origin.0 as i32 + col;
        let y = self.origin.1 as i32 + row;
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return None;
        }
        Some((x as u16, y as u16))
    }
}

impl Surface for TerminalSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        // A cell belongs to the rect when its center does, the same test a
        // click on that cell goes through.
        let col0 = rect.x.div_euclid(self.unit_w);
        let row0 = rect.y.div_euclid(self.unit_h);
        let col1 = rect.right().div_euclid(self.unit_w);
        let row1 = rect.bottom().div_euclid(self.unit_h);
        let style = CellStyle::new(color, color);

        for row in row0..=row1 {
            for col in col0..=col1 {
                let (cx, cy) = cell_center(self.unit_w, self.unit_h, col, row);
                if !rect.contains(cx, cy) {
                    continue;
                }
                if let Some((x, y)) = self.cell(col, row) {
                    self.fb.put_char(x, y, '█', style);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        // `y` is a baseline: text sits in the row just above it.
        let col = x.div_euclid(self.unit_w);
        let row = (y - 1).div_euclid(self.unit_h);
        let Some((cx, cy)) = self.cell(col, row) else {
            return;
        };

        let mut cell_style = CellStyle::new(style.color, PLAY_BG);
        match style.role {
            TextRole::Title | TextRole::Banner => cell_style.bold = true,
            TextRole::Footer => cell_style.dim = true,
            TextRole::Hud | TextRole::Hint => {}
        }
        self.fb.put_str(cx, cy, text, cell_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_area_is_84_by_32() {
        let view = GameView::default();
        assert_eq!(view.play_size(), (84, 32));
        assert_eq!(view.min_viewport(), Viewport::new(86, 34));
    }

    #[test]
    fn projection_round_trips_tile_cells() {
        let view = GameView::default();
        let vp = Viewport::new(86, 34);
        assert_eq!(view.play_origin(vp), (1, 1));
        // Column 15 / row 3 of the play area is the top-left of tile 0.
        assert_eq!(view.to_surface(vp, 16, 4), Some((155, 70)));
        assert_eq!(view.to_surface(vp, 0, 0), None);
        assert_eq!(view.to_surface(vp, 85, 10), None);
    }
}
