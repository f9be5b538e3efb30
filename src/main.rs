//! Terminal Remember Me runner (default binary).
//!
//! Drives the match engine at a fixed tick: terminal events are folded into a
//! level-triggered input state between ticks, then each tick samples it once,
//! updates the engine and redraws through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use remember_me::core::{GameConfig, MatchEngine};
use remember_me::input::{Command, InputState};
use remember_me::logging;
use remember_me::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(
        "start seed={:?} resolve_ticks={} tick_ms={}",
        config.seed, config.resolve_delay_ticks, config.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut engine = MatchEngine::new(config);
    let view = GameView::default();
    let mut input = InputState::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            if input.handle_event(&ev) == Some(Command::Quit) {
                info!("quit turns={} matches={}", engine.turns(), engine.matches());
                return Ok(());
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let (w, h) = crossterm::terminal::size().unwrap_or((86, 34));
            let viewport = Viewport::new(w, h);

            let frame = input.sample(|col, row| view.to_surface(viewport, col, row));
            engine.update(&frame);
            input.end_frame();

            view.render_into(&engine, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
