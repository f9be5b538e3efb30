use arrayvec::ArrayVec;

use crate::types::{Rect, Rgb, TILE_COUNT};

/// Coarse turn phase, without the pick indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Idle,
    OnePicked,
    Resolving,
    GameOver,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Idle => "idle",
            PhaseKind::OnePicked => "one_picked",
            PhaseKind::Resolving => "resolving",
            PhaseKind::GameOver => "game_over",
        }
    }
}

/// A tile that is still on the board (cleared tiles are left out)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub index: usize,
    pub rect: Rect,
    pub fill: Rgb,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchSnapshot {
    pub tiles: ArrayVec<TileSnapshot, TILE_COUNT>,
    pub phase: PhaseKind,
    pub first_pick: Option<usize>,
    pub second_pick: Option<usize>,
    pub turns: u32,
    pub matches: u32,
    pub resolve_ticks: u32,
    pub game_over: bool,
    pub episode_id: u32,
}

impl MatchSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.phase = PhaseKind::Idle;
        self.first_pick = None;
        self.second_pick = None;
        self.turns = 0;
        self.matches = 0;
        self.resolve_ticks = 0;
        self.game_over = false;
        self.episode_id = 0;
    }

    /// Whether a click could currently turn a tile over
    pub fn accepts_picks(&self) -> bool {
        matches!(self.phase, PhaseKind::Idle | PhaseKind::OnePicked)
    }

    pub fn tile(&self, index: usize) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.index == index)
    }
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            tiles: ArrayVec::new(),
            phase: PhaseKind::Idle,
            first_pick: None,
            second_pick: None,
            turns: 0,
            matches: 0,
            resolve_ticks: 0,
            game_over: false,
            episode_id: 0,
        }
    }
}
