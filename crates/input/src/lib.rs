//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse and key events into the level-triggered
//! [`crate::types::FrameInput`] the engine samples each frame, including on
//! terminals that never report key releases.

pub mod map;
pub mod state;

pub use remember_me_types as types;

pub use map::{handle_key_event, should_quit, Command};
pub use state::InputState;
