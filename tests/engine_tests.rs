//! Match engine scenarios driven through per-frame input

use remember_me::core::{Board, GameConfig, MatchEngine, Phase, PhaseKind};
use remember_me::types::{FrameInput, TileColor, TILE_COUNT, TOTAL_PAIRS};

fn config() -> GameConfig {
    GameConfig::default().with_seed(12345)
}

fn unshuffled() -> MatchEngine {
    MatchEngine::with_board(Board::new(), &config())
}

fn click(engine: &MatchEngine, index: usize) -> FrameInput {
    let r = engine.tile(index).unwrap().rect;
    FrameInput::click(r.x + r.width / 2, r.y + r.height / 2)
}

fn wait(engine: &mut MatchEngine, frames: u32) {
    for _ in 0..frames {
        engine.update(&FrameInput::default());
    }
}

/// Pick two tiles with clicks and let the pair resolve.
fn play_pair(engine: &mut MatchEngine, a: usize, b: usize) {
    let first = click(engine, a);
    let second = click(engine, b);
    engine.update(&first);
    engine.update(&second);
    // The second click already counted one resolution frame.
    let remaining = engine.resolve_delay() - 1;
    wait(engine, remaining);
}

/// Index pairs sharing a color, in board order of their first tile.
fn pairs(engine: &MatchEngine) -> Vec<(usize, usize)> {
    let tiles = engine.board().tiles();
    let mut out = Vec::new();
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i].color == tiles[j].color {
                out.push((i, j));
            }
        }
    }
    out
}

fn colors(engine: &MatchEngine) -> Vec<TileColor> {
    engine.board().tiles().iter().map(|t| t.color).collect()
}

fn assert_fresh_board(engine: &MatchEngine) {
    for color in TileColor::ALL {
        assert_eq!(
            engine.board().count_color(color),
            2,
            "{} should appear twice",
            color.as_str()
        );
    }
    assert!(engine
        .board()
        .tiles()
        .iter()
        .all(|t| !t.open && !t.cleared));
}

#[test]
fn test_new_game_deals_six_pairs() {
    let engine = MatchEngine::new(&config());
    assert_eq!(engine.board().len(), TILE_COUNT);
    assert_fresh_board(&engine);
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.turns(), 0);
    assert_eq!(engine.matches(), 0);
}

#[test]
fn test_clock_seeded_game_deals_six_pairs() {
    let engine = MatchEngine::new(&GameConfig::default());
    assert_fresh_board(&engine);
}

#[test]
fn test_same_seed_deals_same_board() {
    let a = MatchEngine::new(&config());
    let b = MatchEngine::new(&config());
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_scenario_match_then_mismatch() {
    let mut engine = unshuffled();

    // Tiles 0 and 4 are red.
    play_pair(&mut engine, 0, 4);
    assert!(engine.tile(0).unwrap().cleared);
    assert!(engine.tile(4).unwrap().cleared);
    assert_eq!(engine.matches(), 1);
    assert_eq!(engine.turns(), 1);
    assert_eq!(engine.first_pick(), None);
    assert_eq!(engine.second_pick(), None);

    // Orange and green.
    play_pair(&mut engine, 1, 2);
    assert!(!engine.tile(1).unwrap().open);
    assert!(!engine.tile(2).unwrap().open);
    assert!(!engine.tile(1).unwrap().cleared);
    assert_eq!(engine.matches(), 1);
    assert_eq!(engine.turns(), 2);
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn test_pair_stays_revealed_during_delay() {
    let mut engine = unshuffled();
    let a = click(&engine, 1);
    let b = click(&engine, 2);
    engine.update(&a);
    engine.update(&b);

    for _ in 0..engine.resolve_delay() - 2 {
        engine.update(&FrameInput::default());
        assert!(engine.tile(1).unwrap().open);
        assert!(engine.tile(2).unwrap().open);
    }
    wait(&mut engine, 1);
    assert!(!engine.tile(1).unwrap().open);
}

#[test]
fn test_invalid_picks_leave_state_untouched() {
    let mut engine = unshuffled();
    play_pair(&mut engine, 0, 4);
    let first = click(&engine, 1);
    engine.update(&first);

    let before = engine.snapshot();

    // Already open (the first pick itself).
    engine.update(&first);
    assert_eq!(engine.snapshot(), before);

    // Cleared tiles.
    let cleared = click(&engine, 0);
    engine.update(&cleared);
    let cleared = click(&engine, 4);
    engine.update(&cleared);
    assert_eq!(engine.snapshot(), before);

    // Nothing under the pointer, button released.
    engine.update(&FrameInput::default());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_clicks_ignored_while_resolving() {
    let mut engine = unshuffled();
    let a = click(&engine, 1);
    let b = click(&engine, 2);
    let c = click(&engine, 3);
    engine.update(&a);
    engine.update(&b);

    for _ in 0..10 {
        engine.update(&c);
    }
    assert!(!engine.tile(3).unwrap().open);
    assert_eq!(engine.phase(), Phase::Resolving { first: 1, second: 2 });
    assert_eq!(engine.resolve_ticks(), 11);
}

#[test]
fn test_tile_edges_are_clickable() {
    let mut engine = unshuffled();
    let r = engine.tile(5).unwrap().rect;

    engine.update(&FrameInput::click(r.x + r.width, r.y + r.height));
    assert_eq!(engine.first_pick(), Some(5));

    let r = engine.tile(6).unwrap().rect;
    engine.update(&FrameInput::click(r.x - 1, r.y));
    assert_eq!(engine.second_pick(), None);
    engine.update(&FrameInput::click(r.x, r.y));
    assert_eq!(engine.second_pick(), Some(6));
}

#[test]
fn test_game_over_exactly_at_last_pair() {
    let mut engine = MatchEngine::new(&config());
    let all = pairs(&engine);
    assert_eq!(all.len(), TOTAL_PAIRS);

    for (n, &(a, b)) in all.iter().enumerate() {
        assert!(!engine.is_game_over(), "game over after {} pairs", n);
        play_pair(&mut engine, a, b);
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.matches(), TOTAL_PAIRS as u32);
    assert_eq!(engine.turns(), TOTAL_PAIRS as u32);
    assert_eq!(engine.board().cleared_count(), TILE_COUNT);
    assert_eq!(engine.snapshot().phase, PhaseKind::GameOver);
    assert!(engine.snapshot().tiles.is_empty());
}

#[test]
fn test_game_over_ignores_clicks_until_restart() {
    let mut engine = unshuffled();
    for (a, b) in pairs(&engine) {
        play_pair(&mut engine, a, b);
    }
    assert!(engine.is_game_over());

    let before = engine.snapshot();
    let c = click(&engine, 0);
    for _ in 0..5 {
        engine.update(&c);
    }
    assert!(!engine.pick(0));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_restart_from_game_over_resets_everything() {
    let mut engine = unshuffled();
    for (a, b) in pairs(&engine) {
        play_pair(&mut engine, a, b);
    }
    assert!(engine.is_game_over());

    engine.update(&FrameInput::restart());

    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.turns(), 0);
    assert_eq!(engine.matches(), 0);
    assert_eq!(engine.resolve_ticks(), 0);
    assert_eq!(engine.first_pick(), None);
    assert_eq!(engine.episode_id(), 1);
    assert_fresh_board(&engine);

    // The new game plays normally.
    let (a, b) = pairs(&engine)[0];
    play_pair(&mut engine, a, b);
    assert_eq!(engine.matches(), 1);
}

#[test]
fn test_restart_reshuffles_colors_in_place() {
    let mut engine = MatchEngine::new(&config());
    let colors_before = colors(&engine);
    for (a, b) in pairs(&engine) {
        play_pair(&mut engine, a, b);
    }
    assert!(engine.is_game_over());

    engine.update(&FrameInput::restart());

    assert_ne!(colors(&engine), colors_before);
    let fresh = Board::new();
    for (tile, expected) in engine.board().tiles().iter().zip(fresh.tiles()) {
        assert_eq!(tile.rect, expected.rect);
    }
}

#[test]
fn test_restart_key_ignored_mid_game() {
    let mut engine = unshuffled();
    play_pair(&mut engine, 0, 4);
    let first = click(&engine, 1);
    engine.update(&first);

    let before = engine.snapshot();
    engine.update(&FrameInput::restart());
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.matches(), 1);
}

#[test]
fn test_held_restart_key_does_not_skip_new_game() {
    let mut engine = unshuffled();
    for (a, b) in pairs(&engine) {
        play_pair(&mut engine, a, b);
    }

    for _ in 0..5 {
        engine.update(&FrameInput::restart());
    }
    assert_eq!(engine.episode_id(), 1);
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn test_instances_are_independent() {
    let mut a = unshuffled();
    let b = unshuffled();

    play_pair(&mut a, 0, 4);
    assert_eq!(a.matches(), 1);
    assert_eq!(b.matches(), 0);
    assert_eq!(b.turns(), 0);
    assert!(!b.tile(0).unwrap().cleared);
}

#[test]
fn test_custom_resolution_delay() {
    let cfg = config().with_resolve_delay(3);
    let mut engine = MatchEngine::with_board(Board::new(), &cfg);
    assert_eq!(engine.resolve_delay(), 3);

    assert!(engine.pick(8));
    assert!(engine.pick(9));
    wait(&mut engine, 2);
    assert!(matches!(engine.phase(), Phase::Resolving { .. }));
    wait(&mut engine, 1);
    assert_eq!(engine.matches(), 1);
}
