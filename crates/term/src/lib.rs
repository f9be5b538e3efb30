//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders the engine's logical surface into a character framebuffer that
//! is flushed to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Implement the engine's [`core::Surface`] seam on top of terminal cells
//! - Project mouse cells back into surface coordinates for hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use remember_me_core as core;
pub use remember_me_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, TerminalSurface, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
