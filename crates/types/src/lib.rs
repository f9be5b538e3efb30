//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Surface Geometry
//!
//! The game is laid out on a fixed logical surface of 840x640 units. Frontends
//! project this surface onto whatever they draw with (the terminal frontend maps
//! 10x20 surface units onto one character cell).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SURFACE_WIDTH` | 840 | Logical surface width |
//! | `SURFACE_HEIGHT` | 640 | Logical surface height |
//! | `TILE_SIZE` | 100 | Tile edge length |
//! | `TILE_PITCH` | 150 | Distance between tile origins |
//! | `GRID_ORIGIN_X` | 150 | X of the top-left tile |
//! | `GRID_ORIGIN_Y` | 60 | Y of the top-left tile |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `RESOLVE_DELAY_TICKS` | 50 | Frames two picked tiles stay revealed |
//!
//! # Examples
//!
//! ```
//! use remember_me_types::{Rect, TileColor, GRID_COLS, GRID_ROWS, TOTAL_PAIRS};
//!
//! // Hit-testing is inclusive on every edge
//! let rect = Rect::new(150, 60, 100, 100);
//! assert!(rect.contains(250, 160));
//! assert!(!rect.contains(251, 160));
//!
//! // Twelve tiles, six pairs
//! assert_eq!(GRID_ROWS * GRID_COLS, TOTAL_PAIRS * 2);
//! assert_eq!(TileColor::ALL.len(), TOTAL_PAIRS);
//! ```

/// Logical surface width
pub const SURFACE_WIDTH: i32 = 840;

/// Logical surface height
pub const SURFACE_HEIGHT: i32 = 640;

/// Tile edge length in surface units
pub const TILE_SIZE: i32 = 100;

/// Distance between the origins of neighbouring tiles
pub const TILE_PITCH: i32 = 150;

/// Top-left tile origin
pub const GRID_ORIGIN_X: i32 = 150;
pub const GRID_ORIGIN_Y: i32 = 60;

/// Grid dimensions (3 rows x 4 columns)
pub const GRID_ROWS: usize = 3;
pub const GRID_COLS: usize = 4;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Number of matches needed to finish a game
pub const TOTAL_PAIRS: usize = TILE_COUNT / 2;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames two picked tiles stay revealed before the pair is resolved
pub const RESOLVE_DELAY_TICKS: u32 = 50;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

/// Fill used for a covered tile
pub const COVERED_COLOR: Rgb = Rgb::new(108, 122, 137);

/// Game-over banner color
pub const BANNER_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Footer help line color
pub const FOOTER_COLOR: Rgb = Rgb::new(202, 222, 24);

/// The six tile colors
///
/// Each color appears on exactly two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Orange,
    Green,
    Yellow,
    Purple,
    Cyan,
}

impl TileColor {
    /// Every palette entry, in declaration order
    pub const ALL: [TileColor; 6] = [
        TileColor::Red,
        TileColor::Orange,
        TileColor::Green,
        TileColor::Yellow,
        TileColor::Purple,
        TileColor::Cyan,
    ];

    /// Display color when the tile is face-up
    pub fn rgb(&self) -> Rgb {
        match self {
            TileColor::Red => Rgb::new(255, 0, 0),
            TileColor::Orange => Rgb::new(222, 136, 24),
            TileColor::Green => Rgb::new(0, 255, 0),
            TileColor::Yellow => Rgb::new(237, 233, 12),
            TileColor::Purple => Rgb::new(227, 11, 202),
            TileColor::Cyan => Rgb::new(25, 209, 194),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Orange => "orange",
            TileColor::Green => "green",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
            TileColor::Cyan => "cyan",
        }
    }
}

/// Axis-aligned rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Point-in-rect test, inclusive on all four edges.
    ///
    /// A rect of width 100 at x=150 therefore accepts x in `150..=250`.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// One frame worth of sampled input.
///
/// Button and key fields are level-triggered: they report "currently held",
/// not "pressed this frame".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub pointer: (i32, i32),
    pub primary_pressed: bool,
    pub restart_pressed: bool,
}

impl FrameInput {
    /// Primary button held at `(x, y)`
    pub fn click(x: i32, y: i32) -> Self {
        Self {
            pointer: (x, y),
            primary_pressed: true,
            restart_pressed: false,
        }
    }

    /// Restart key held, pointer parked at the origin
    pub fn restart() -> Self {
        Self {
            restart_pressed: true,
            ..Self::default()
        }
    }
}
