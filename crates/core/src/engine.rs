//! Match engine module - turn state machine and pair resolution
//!
//! This module ties together the board, the shuffle RNG and the turn counters.
//! It is driven by two calls per frame: [`MatchEngine::update`] with the sampled
//! input, then [`MatchEngine::render`] with the frontend's draw surface.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::rng::{clock_seed, SimpleRng};
use crate::snapshot::{MatchSnapshot, PhaseKind, TileSnapshot};
use crate::surface::{InputSource, Surface, TextRole, TextStyle};
use crate::tile::Tile;
use crate::types::{Rgb, BANNER_COLOR, FOOTER_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};

pub const TITLE_TEXT: &str = "Remember Me";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RESTART_HINT_TEXT: &str = "Press \"R\" to restart!";
pub const FOOTER_TEXT: &str = "Click two tiles to find a pair. Q quits.";

/// Where the current turn stands.
///
/// Picks are board indices. `Resolving` always holds two distinct tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing picked yet
    Idle,
    /// One tile face-up, waiting for the second
    OnePicked { first: usize },
    /// Both tiles face-up; input is frozen until the delay elapses
    Resolving { first: usize, second: usize },
    /// Every pair matched; only restart is honored
    GameOver,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::OnePicked { .. } => PhaseKind::OnePicked,
            Phase::Resolving { .. } => PhaseKind::Resolving,
            Phase::GameOver => PhaseKind::GameOver,
        }
    }
}

/// Complete game state for one game instance
#[derive(Debug, Clone)]
pub struct MatchEngine {
    board: Board,
    phase: Phase,
    rng: SimpleRng,
    /// Restarts continue the seeded stream instead of re-reading the clock.
    fixed_seed: bool,
    resolve_delay: u32,
    resolve_ticks: u32,
    turns: u32,
    matches: u32,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
}

impl MatchEngine {
    /// Create a game with a freshly shuffled board
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        let board = Board::shuffled(&mut rng);
        Self::from_parts(board, rng, config)
    }

    /// Create a game over an already dealt board (colors are not shuffled)
    pub fn with_board(board: Board, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        Self::from_parts(board, rng, config)
    }

    fn from_parts(board: Board, rng: SimpleRng, config: &GameConfig) -> Self {
        Self {
            board,
            phase: Phase::Idle,
            rng,
            fixed_seed: config.seed.is_some(),
            resolve_delay: config.resolve_delay_ticks.max(1),
            resolve_ticks: 0,
            turns: 0,
            matches: 0,
            episode_id: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn first_pick(&self) -> Option<usize> {
        match self.phase {
            Phase::OnePicked { first } | Phase::Resolving { first, .. } => Some(first),
            Phase::Idle | Phase::GameOver => None,
        }
    }

    pub fn second_pick(&self) -> Option<usize> {
        match self.phase {
            Phase::Resolving { second, .. } => Some(second),
            _ => None,
        }
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn resolve_ticks(&self) -> u32 {
        self.resolve_ticks
    }

    pub fn resolve_delay(&self) -> u32 {
        self.resolve_delay
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Matches needed to win
    pub fn total_pairs(&self) -> u32 {
        (self.board.len() / 2) as u32
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.board.get(index)
    }

    /// Advance one frame.
    ///
    /// Input is level-triggered: a held button keeps reporting a press, which is
    /// harmless because an open tile can't be picked again and nothing is picked
    /// while a pair is resolving.
    pub fn update(&mut self, input: &impl InputSource) {
        if self.phase == Phase::GameOver {
            if input.restart_pressed() {
                self.restart();
            }
            return;
        }

        if input.primary_pressed() && self.accepts_picks() {
            let (px, py) = input.pointer();
            let hit = (0..self.board.len()).find(|&i| {
                self.board.get(i).is_some_and(|t| t.hit(px, py) && t.is_pickable())
            });
            if let Some(index) = hit {
                self.pick(index);
            }
        }

        if let Phase::Resolving { first, second } = self.phase {
            self.resolve_ticks += 1;
            if self.resolve_ticks >= self.resolve_delay {
                self.resolve(first, second);
            }
        }
    }

    /// Whether a click could currently turn a tile over
    pub fn accepts_picks(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::OnePicked { .. })
    }

    /// Try to turn tile `index` face-up as the current pick.
    ///
    /// Returns false (and changes nothing) for out-of-range, open or cleared
    /// tiles, for the tile already picked, and outside `Idle`/`OnePicked`.
    pub fn pick(&mut self, index: usize) -> bool {
        let pickable = self.board.get(index).is_some_and(Tile::is_pickable);
        if !pickable {
            return false;
        }

        let next = match self.phase {
            Phase::Idle => Phase::OnePicked { first: index },
            Phase::OnePicked { first } if first != index => {
                self.resolve_ticks = 0;
                Phase::Resolving {
                    first,
                    second: index,
                }
            }
            _ => return false,
        };

        if let Some(tile) = self.board.get_mut(index) {
            tile.open = true;
            debug!("pick tile={} color={}", index, tile.color.as_str());
        }
        self.phase = next;
        true
    }

    fn resolve(&mut self, first: usize, second: usize) {
        let colors = (
            self.board.get(first).map(|t| t.color),
            self.board.get(second).map(|t| t.color),
        );
        let matched = matches!(colors, (Some(a), Some(b)) if a == b);

        for index in [first, second] {
            if let Some(tile) = self.board.get_mut(index) {
                if matched {
                    tile.cleared = true;
                } else {
                    tile.open = false;
                }
            }
        }

        self.turns += 1;
        self.resolve_ticks = 0;
        self.phase = Phase::Idle;

        if matched {
            self.matches += 1;
            info!(
                "match tiles={},{} turn={} matches={}",
                first, second, self.turns, self.matches
            );
        } else {
            info!("mismatch tiles={},{} turn={}", first, second, self.turns);
        }

        if self.matches >= self.total_pairs() {
            self.phase = Phase::GameOver;
            info!("game over turns={} episode={}", self.turns, self.episode_id);
        }
    }

    /// Reset for a new game: reshuffle, cover every tile, zero the counters.
    ///
    /// `update` only calls this from `GameOver` when the restart key is held.
    pub fn restart(&mut self) {
        if !self.fixed_seed {
            self.rng.reseed(clock_seed());
        }
        self.board.reset(&mut self.rng);
        self.phase = Phase::Idle;
        self.resolve_ticks = 0;
        self.turns = 0;
        self.matches = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("restart episode={}", self.episode_id);
    }

    /// Draw the current frame onto `surface`
    pub fn render(&self, surface: &mut impl Surface) {
        let white = Rgb::WHITE;

        surface.draw_text(
            SURFACE_WIDTH / 2 - 80,
            35,
            TITLE_TEXT,
            TextStyle::new(TextRole::Title, white),
        );

        for tile in self.board.tiles() {
            if let Some(fill) = tile.fill() {
                surface.fill_rect(tile.rect, fill);
            }
        }

        // "Turn: " plus at most ten digits; stays on the stack.
        let mut turn_line = ArrayString::<16>::new();
        let _ = write!(turn_line, "Turn: {}", self.turns);
        surface.draw_text(376, 535, &turn_line, TextStyle::new(TextRole::Hud, white));
        surface.draw_text(
            10,
            620,
            FOOTER_TEXT,
            TextStyle::new(TextRole::Footer, FOOTER_COLOR),
        );

        if self.is_game_over() {
            surface.draw_text(
                SURFACE_WIDTH / 2 - 110,
                SURFACE_HEIGHT / 3,
                GAME_OVER_TEXT,
                TextStyle::new(TextRole::Banner, BANNER_COLOR),
            );
            surface.draw_text(
                SURFACE_WIDTH / 2 - 150,
                SURFACE_HEIGHT / 2,
                RESTART_HINT_TEXT,
                TextStyle::new(TextRole::Hint, white),
            );
        }
    }

    /// Copy out everything a frontend needs to draw this frame
    pub fn snapshot(&self) -> MatchSnapshot {
        let mut snap = MatchSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its storage
    pub fn snapshot_into(&self, snap: &mut MatchSnapshot) {
        snap.clear();
        for (index, tile) in self.board.tiles().iter().enumerate() {
            if let Some(fill) = tile.fill() {
                snap.tiles.push(TileSnapshot {
                    index,
                    rect: tile.rect,
                    fill,
                    open: tile.open,
                });
            }
        }
        snap.phase = self.phase.kind();
        snap.first_pick = self.first_pick();
        snap.second_pick = self.second_pick();
        snap.turns = self.turns;
        snap.matches = self.matches;
        snap.resolve_ticks = self.resolve_ticks;
        snap.game_over = self.is_game_over();
        snap.episode_id = self.episode_id;
    }
}
