//! Tile module - one covered/uncovered grid cell

use crate::types::{Rect, Rgb, TileColor, COVERED_COLOR};

/// A single tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub rect: Rect,
    pub color: TileColor,
    /// Currently face-up
    pub open: bool,
    /// Matched and removed from play until the next reset
    pub cleared: bool,
}

impl Tile {
    /// Create a covered tile
    pub fn new(rect: Rect, color: TileColor) -> Self {
        Self {
            rect,
            color,
            open: false,
            cleared: false,
        }
    }

    /// Whether a pick on this tile would be accepted
    pub fn is_pickable(&self) -> bool {
        !self.open && !self.cleared
    }

    /// Whether the point lies on this tile (edges included)
    pub fn hit(&self, px: i32, py: i32) -> bool {
        self.rect.contains(px, py)
    }

    /// Fill color to draw, or `None` once the tile is cleared
    pub fn fill(&self) -> Option<Rgb> {
        if self.cleared {
            None
        } else if self.open {
            Some(self.color.rgb())
        } else {
            Some(COVERED_COLOR)
        }
    }

    /// Back to the covered state
    pub fn cover(&mut self) {
        self.open = false;
        self.cleared = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::new(Rect::new(150, 60, 100, 100), TileColor::Cyan)
    }

    #[test]
    fn new_tile_is_covered_and_pickable() {
        let t = tile();
        assert!(!t.open);
        assert!(!t.cleared);
        assert!(t.is_pickable());
        assert_eq!(t.fill(), Some(COVERED_COLOR));
    }

    #[test]
    fn open_tile_shows_its_color() {
        let mut t = tile();
        t.open = true;
        assert!(!t.is_pickable());
        assert_eq!(t.fill(), Some(TileColor::Cyan.rgb()));
    }

    #[test]
    fn cleared_tile_is_not_drawn() {
        let mut t = tile();
        t.open = true;
        t.cleared = true;
        assert!(!t.is_pickable());
        assert_eq!(t.fill(), None);
    }

    #[test]
    fn hit_uses_closed_rect() {
        let t = tile();
        assert!(t.hit(150, 60));
        assert!(t.hit(250, 160));
        assert!(!t.hit(149, 60));
        assert!(!t.hit(250, 161));
    }
}
