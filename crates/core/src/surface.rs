//! Collaborator seams: where input comes from and what the engine draws onto.
//!
//! The engine never talks to a window or terminal directly. Frontends implement
//! [`InputSource`] for their polled input and [`Surface`] for their draw target.

use crate::types::{FrameInput, Rect, Rgb};

/// Level-triggered input queries sampled once per frame
pub trait InputSource {
    /// Pointer position in surface coordinates
    fn pointer(&self) -> (i32, i32);
    /// Primary button currently held
    fn primary_pressed(&self) -> bool;
    /// Restart key currently held
    fn restart_pressed(&self) -> bool;
}

impl InputSource for FrameInput {
    fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    fn primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    fn restart_pressed(&self) -> bool {
        self.restart_pressed
    }
}

/// What a piece of overlay text is for. Frontends pick fonts/sizes from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Hud,
    Banner,
    Hint,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub role: TextRole,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(role: TextRole, color: Rgb) -> Self {
        Self { role, color }
    }
}

/// Draw target handed to [`crate::MatchEngine::render`]
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw `text` with its baseline-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle);
}
