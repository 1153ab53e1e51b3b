//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_memory::term` for output.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_memory::core::{GameSession, SessionSnapshot};
use tui_memory::input::InputHandler;
use tui_memory::term::{CursorView, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, PAIR_COUNT};
use tui_memory::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _log_guard = logging::init(&config.log_dir)?;

    // Build the game before touching the terminal so setup errors stay readable.
    let view = GameView::default();
    let images = view.palette().image_ids(PAIR_COUNT)?;
    let session = GameSession::new(config.game, &images)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, mut session: GameSession) -> Result<()> {
    let game = *session.config();
    let board = session.board();
    let mut input = InputHandler::new(
        board.rows(),
        board.cols(),
        board.cell_width(),
        board.cell_height(),
    );

    let started = Instant::now();
    let tick = Duration::from_millis(game.frame_ms as u64);
    let mut last_tick = Instant::now();

    let mut snap = SessionSnapshot::default();
    session.snapshot_into(&mut snap);
    let mut fb = FrameBuffer::new(0, 0);
    let mut actions: Vec<GameAction> = Vec::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let origin = view.layout(&snap, viewport).origin;

        // Collect input until the next frame is due.
        actions.clear();
        loop {
            let timeout = tick.saturating_sub(last_tick.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
                continue;
            }
            if let Some(action) = input.handle_event(&ev, origin) {
                actions.push(action);
            }
        }
        last_tick = Instant::now();

        let now_ms = started.elapsed().as_millis() as u64;
        if !session.frame(actions.drain(..), now_ms) {
            tracing::info!(frames = session.frame_count(), "closed by player");
            return Ok(());
        }

        session.snapshot_into(&mut snap);
        let cursor = input.cursor();
        let cursor = CursorView {
            row: cursor.row,
            col: cursor.col,
        };
        view.render_into_with_cursor(&snap, Some(cursor), viewport, &mut fb);
        term.present(&mut fb)?;
    }
}
