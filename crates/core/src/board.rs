//! Board module - the fixed grid of tiles
//!
//! The board is a 3x4 grid of tiles stored row-major in a flat array.
//! Positions never change after construction; only colors move (on shuffle)
//! and the open/cleared flags flip during play.
//!
//! Tile `(row, col)` sits at `x = 150 + col * 150`, `y = 60 + row * 150` with
//! a 100x100 rect. The designed layout before shuffling is:
//!
//! ```text
//! row 0: Red    Orange Green Yellow
//! row 1: Red    Orange Green Yellow
//! row 2: Purple Purple Cyan  Cyan
//! ```

use crate::rng::SimpleRng;
use crate::tile::Tile;
use crate::types::{
    Rect, TileColor, GRID_COLS, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_ROWS, TILE_COUNT, TILE_PITCH,
    TILE_SIZE,
};

/// Colors of the first two rows, one each per row
const ROW_COLORS: [TileColor; GRID_COLS] = [
    TileColor::Red,
    TileColor::Orange,
    TileColor::Green,
    TileColor::Yellow,
];

/// Colors of the last row (two pairs side by side)
const LAST_ROW_COLORS: [TileColor; GRID_COLS] = [
    TileColor::Purple,
    TileColor::Purple,
    TileColor::Cyan,
    TileColor::Cyan,
];

/// The game board - 4 columns x 3 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * COLS + col)
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Create a board in the designed (unshuffled) layout
    pub fn new() -> Self {
        let tiles = std::array::from_fn(|i| {
            let (row, col) = (i / GRID_COLS, i % GRID_COLS);
            let color = if row + 1 < GRID_ROWS {
                ROW_COLORS[col]
            } else {
                LAST_ROW_COLORS[col]
            };
            Tile::new(Self::cell_rect(row, col), color)
        });
        Self { tiles }
    }

    /// Create a board and shuffle its colors
    pub fn shuffled(rng: &mut SimpleRng) -> Self {
        let mut board = Self::new();
        board.shuffle_colors(rng);
        board
    }

    /// Create a board with explicit colors in row-major order
    pub fn with_colors(colors: [TileColor; TILE_COUNT]) -> Self {
        let mut board = Self::new();
        for (tile, color) in board.tiles.iter_mut().zip(colors) {
            tile.color = color;
        }
        board
    }

    /// Rect of the tile at `(row, col)`
    pub fn cell_rect(row: usize, col: usize) -> Rect {
        Rect::new(
            GRID_ORIGIN_X + col as i32 * TILE_PITCH,
            GRID_ORIGIN_Y + row as i32 * TILE_PITCH,
            TILE_SIZE,
            TILE_SIZE,
        )
    }

    /// Flat index of `(row, col)`, or None if out of bounds
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        Some(row * GRID_COLS + col)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// First tile in board order under the point
    pub fn tile_at(&self, px: i32, py: i32) -> Option<usize> {
        self.tiles.iter().position(|t| t.hit(px, py))
    }

    /// Shuffle colors across the fixed tile positions (Fisher-Yates)
    pub fn shuffle_colors(&mut self, rng: &mut SimpleRng) {
        let mut colors = self.tiles.map(|t| t.color);
        rng.shuffle(&mut colors);
        for (tile, color) in self.tiles.iter_mut().zip(colors) {
            tile.color = color;
        }
    }

    /// Cover every tile and reshuffle the colors
    pub fn reset(&mut self, rng: &mut SimpleRng) {
        for tile in self.tiles.iter_mut() {
            tile.cover();
        }
        self.shuffle_colors(rng);
    }

    /// Number of tiles carrying `color`
    pub fn count_color(&self, color: TileColor) -> usize {
        self.tiles.iter().filter(|t| t.color == color).count()
    }

    /// Number of cleared tiles
    pub fn cleared_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.cleared).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designed_layout_has_six_pairs() {
        let board = Board::new();
        assert_eq!(board.len(), TILE_COUNT);
        for color in TileColor::ALL {
            assert_eq!(board.count_color(color), 2, "{}", color.as_str());
        }
        assert_eq!(board.get(0).unwrap().color, TileColor::Red);
        assert_eq!(board.get(4).unwrap().color, TileColor::Red);
        assert_eq!(board.get(8).unwrap().color, TileColor::Purple);
        assert_eq!(board.get(11).unwrap().color, TileColor::Cyan);
    }

    #[test]
    fn tile_rects_follow_grid_pitch() {
        let board = Board::new();
        assert_eq!(board.get(0).unwrap().rect, Rect::new(150, 60, 100, 100));
        assert_eq!(board.get(3).unwrap().rect, Rect::new(600, 60, 100, 100));
        assert_eq!(board.get(11).unwrap().rect, Rect::new(600, 360, 100, 100));
    }

    #[test]
    fn tile_at_finds_tile_and_gaps() {
        let board = Board::new();
        assert_eq!(board.tile_at(150, 60), Some(0));
        assert_eq!(board.tile_at(250, 160), Some(0));
        assert_eq!(board.tile_at(300, 210), Some(5));
        // Gap between columns 0 and 1.
        assert_eq!(board.tile_at(275, 100), None);
    }

    #[test]
    fn index_rejects_out_of_bounds() {
        assert_eq!(Board::index(2, 3), Some(11));
        assert_eq!(Board::index(3, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn shuffle_preserves_positions_and_pairs() {
        let mut rng = SimpleRng::new(2024);
        let board = Board::shuffled(&mut rng);
        let plain = Board::new();

        for (a, b) in board.tiles().iter().zip(plain.tiles()) {
            assert_eq!(a.rect, b.rect);
        }
        for color in TileColor::ALL {
            assert_eq!(board.count_color(color), 2);
        }
    }

    #[test]
    fn reset_covers_everything() {
        let mut rng = SimpleRng::new(3);
        let mut board = Board::new();
        for i in [0, 1, 4] {
            let t = board.get_mut(i).unwrap();
            t.open = true;
            t.cleared = i != 1;
        }

        board.reset(&mut rng);
        assert!(board.tiles().iter().all(|t| !t.open && !t.cleared));
        assert_eq!(board.cleared_count(), 0);
    }
}
