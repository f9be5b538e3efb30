//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the pairs game: the tile grid, the seeded
//! color shuffle and the turn state machine. It has **zero dependencies** on
//! terminals, windows or I/O, making it:
//!
//! - **Deterministic**: Same seed deals the same board
//! - **Testable**: Every turn transition is reachable from plain `FrameInput`s
//! - **Portable**: Any frontend that implements [`Surface`] can draw it
//!
//! # Module Structure
//!
//! - [`board`]: 3x4 grid of tiles, designed layout and color shuffling
//! - [`config`]: environment-driven settings (seed, resolution delay, tick)
//! - [`engine`]: the [`MatchEngine`] turn state machine
//! - [`rng`]: LCG with Fisher-Yates shuffle and clock seeding
//! - [`snapshot`]: plain-data view of a frame for frontends
//! - [`surface`]: the [`InputSource`] and [`Surface`] seams
//! - [`tile`]: a single covered/open/cleared tile
//!
//! # Game Rules
//!
//! - Click a covered tile to turn it over, then click a second one.
//! - Both stay face-up for the resolution delay (50 frames by default);
//!   clicks are ignored meanwhile.
//! - Equal colors are cleared from the board, different colors are covered again.
//! - Every resolved pair counts as one turn. Clearing all six pairs ends the game;
//!   the restart key then deals a fresh board.
//!
//! # Example
//!
//! ```
//! use remember_me_core::{Board, GameConfig, MatchEngine, Phase};
//! use remember_me_types::FrameInput;
//!
//! // Unshuffled board: tiles 0 and 4 are both red.
//! let config = GameConfig::default().with_seed(7).with_resolve_delay(2);
//! let mut game = MatchEngine::with_board(Board::new(), &config);
//!
//! game.update(&FrameInput::click(200, 100)); // tile 0
//! game.update(&FrameInput::click(200, 250)); // tile 4
//! assert!(matches!(game.phase(), Phase::Resolving { .. }));
//!
//! game.update(&FrameInput::default());
//! assert_eq!(game.matches(), 1);
//! assert_eq!(game.turns(), 1);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod rng;
pub mod snapshot;
pub mod surface;
pub mod tile;

pub use remember_me_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{MatchEngine, Phase};
pub use rng::{clock_seed, SimpleRng};
pub use snapshot::{MatchSnapshot, PhaseKind, TileSnapshot};
pub use surface::{InputSource, Surface, TextRole, TextStyle};
pub use tile::Tile;
