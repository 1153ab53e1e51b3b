//! Game session - one play-through from shuffle to the last pair
//!
//! The session ties the board and the turn controller together and exposes
//! the per-frame API used by the play loop:
//!
//! 1. [`GameSession::apply_action`] for every input event of the frame
//! 2. [`GameSession::update`] once, with the current clock reading
//! 3. [`GameSession::snapshot_into`] for the renderer
//!
//! [`GameSession::frame`] runs steps 1 and 2 in that order.

use crate::board::Board;
use crate::config::GameConfig;
use crate::controller::{GameController, TurnOutcome};
use crate::error::{ConfigurationError, Result};
use crate::pairing::deck_from_images;
use crate::rng::SimpleRng;
use crate::snapshot::{SessionSnapshot, TileSnapshot};
use crate::types::{
    GameAction, ImageId, Indicator, Rect, TurnPhase, BOARD_COLS, BOARD_ROWS, INDICATOR_HEIGHT,
    INDICATOR_WIDTH, PANEL_GAP,
};

/// Rows above the indicator reserved for the elapsed-time readout
const INDICATOR_TOP: i32 = 3;

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    /// Unshuffled deck, kept for restarts
    deck: Vec<ImageId>,
    board: Board,
    controller: GameController,
    rng: SimpleRng,
    /// Clock reading at which the current episode started
    clock_origin_ms: u64,
    last_now_ms: u64,
    elapsed_secs: u64,
    frame_count: u64,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    continue_game: bool,
    close_requested: bool,
}

impl GameSession {
    /// Start a session from a set of distinct images (one per pair).
    ///
    /// Extra images beyond what the board needs are ignored.
    pub fn new(config: GameConfig, images: &[ImageId]) -> Result<Self> {
        let pairs = BOARD_ROWS as usize * BOARD_COLS as usize / 2;
        if images.len() < pairs {
            return Err(ConfigurationError::NotEnoughImages {
                expected: pairs,
                actual: images.len(),
            });
        }
        Self::with_deck(config, deck_from_images(&images[..pairs]))
    }

    /// Start a session from an explicit unshuffled deck
    pub fn with_deck(config: GameConfig, deck: Vec<ImageId>) -> Result<Self> {
        config.validate()?;

        let mut rng = SimpleRng::new(config.seed);
        let board = deal(&config, &deck, &mut rng)?;

        tracing::info!(seed = config.seed, delay = config.match_delay_frames, "session started");

        Ok(Self {
            controller: GameController::new(config.match_delay_frames),
            config,
            deck,
            board,
            rng,
            clock_origin_ms: 0,
            last_now_ms: 0,
            elapsed_secs: 0,
            frame_count: 0,
            episode_id: 0,
            continue_game: true,
            close_requested: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn phase(&self) -> TurnPhase {
        self.controller.phase()
    }

    pub fn indicator(&self) -> Indicator {
        self.controller.indicator()
    }

    pub fn matched_tiles(&self) -> u32 {
        self.controller.matched_tiles()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn elapsed_text(&self) -> String {
        self.elapsed_secs.to_string()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// False once every pair has been found
    pub fn continue_game(&self) -> bool {
        self.continue_game
    }

    pub fn is_finished(&self) -> bool {
        !self.continue_game
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Indicator placement, to the right of the board below the timer
    pub fn indicator_rect(&self) -> Rect {
        Rect::new(
            self.board.width() as i32 + PANEL_GAP as i32,
            INDICATOR_TOP,
            INDICATOR_WIDTH,
            INDICATOR_HEIGHT,
        )
    }

    /// Apply one input action.
    ///
    /// Returns true if the action changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(p) => {
                if !self.continue_game {
                    return false;
                }
                self.controller.select(&mut self.board, p)
            }
            GameAction::Restart => self.restart(),
            GameAction::Close => {
                self.close_requested = true;
                true
            }
        }
    }

    /// Advance game logic by one frame.
    ///
    /// `now_ms` is a monotonic clock reading in milliseconds. The elapsed
    /// counter is purely informational and freezes once the game is won.
    pub fn update(&mut self, now_ms: u64) -> Option<TurnOutcome> {
        self.last_now_ms = now_ms;
        if !self.continue_game {
            return None;
        }

        self.frame_count += 1;
        let outcome = self.controller.advance(&mut self.board);

        if outcome.is_some() && self.controller.is_complete() {
            self.continue_game = false;
            tracing::info!(
                episode = self.episode_id,
                frames = self.frame_count,
                "game over"
            );
        }

        self.elapsed_secs = now_ms.saturating_sub(self.clock_origin_ms) / 1000;
        outcome
    }

    /// Run one frame: consume every action, then update once.
    ///
    /// Returns false when the player asked to close; callers should leave the
    /// loop without rendering.
    pub fn frame<I>(&mut self, actions: I, now_ms: u64) -> bool
    where
        I: IntoIterator<Item = GameAction>,
    {
        if self.close_requested {
            return false;
        }
        for action in actions {
            self.apply_action(action);
        }
        if self.close_requested {
            return false;
        }
        self.update(now_ms);
        true
    }

    /// Deal a fresh board from the same images and reset the turn state
    fn restart(&mut self) -> bool {
        let board = match deal(&self.config, &self.deck, &mut self.rng) {
            Ok(board) => board,
            Err(err) => {
                tracing::error!(error = %err, "restart failed, keeping current board");
                return false;
            }
        };

        self.board = board;
        self.controller = GameController::new(self.config.match_delay_frames);
        self.clock_origin_ms = self.last_now_ms;
        self.elapsed_secs = 0;
        self.frame_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.continue_game = true;

        tracing::info!(episode = self.episode_id, "session restarted");
        true
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|t| TileSnapshot {
            rect: t.rect(),
            revealed: t.is_revealed(),
            image: if t.is_revealed() { t.image() } else { None },
        }));
        out.pending.clear();
        out.pending.extend(self.controller.pending().iter().copied());
        out.phase = self.controller.phase();
        out.indicator = self.controller.indicator();
        out.indicator_rect = self.indicator_rect();
        out.elapsed_secs = self.elapsed_secs;
        out.matched_tiles = self.controller.matched_tiles();
        out.finished = !self.continue_game;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn deal(config: &GameConfig, deck: &[ImageId], rng: &mut SimpleRng) -> Result<Board> {
    let mut board = Board::build(BOARD_ROWS, BOARD_COLS, config.tile_width, config.tile_height);
    board.assign_images(deck.to_vec(), rng)?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, PAIR_COUNT};

    fn images() -> Vec<ImageId> {
        (1..=PAIR_COUNT as u8).map(ImageId).collect()
    }

    fn session() -> GameSession {
        GameSession::new(GameConfig::default().with_seed(77), &images()).unwrap()
    }

    /// Index of the other tile showing the same image as `index`
    fn partner_of(board: &Board, index: usize) -> usize {
        let image = board.tile(index).unwrap().image();
        board
            .tiles()
            .iter()
            .enumerate()
            .position(|(i, t)| i != index && t.image() == image)
            .unwrap()
    }

    fn center(s: &GameSession, index: usize) -> Point {
        s.board().tile(index).unwrap().rect().center()
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session();
        assert!(s.continue_game());
        assert!(!s.close_requested());
        assert_eq!(s.phase(), TurnPhase::Idle);
        assert_eq!(s.board().hidden_count(), 16);
    }

    #[test]
    fn test_not_enough_images() {
        let err = GameSession::new(GameConfig::default(), &images()[..7]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NotEnoughImages {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = GameConfig::default().with_match_delay_frames(0);
        assert!(matches!(
            GameSession::new(config, &images()),
            Err(ConfigurationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_elapsed_seconds_follow_clock() {
        let mut s = session();
        s.update(0);
        assert_eq!(s.elapsed_secs(), 0);
        s.update(999);
        assert_eq!(s.elapsed_secs(), 0);
        s.update(2500);
        assert_eq!(s.elapsed_secs(), 2);
        assert_eq!(s.elapsed_text(), "2");
    }

    #[test]
    fn test_close_stops_frames() {
        let mut s = session();
        assert!(s.frame(std::iter::empty(), 16));
        assert!(!s.frame([GameAction::Close], 32));
        assert!(s.close_requested());
        assert!(!s.frame(std::iter::empty(), 48));
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut s = session();
        let first = center(&s, 0);
        s.apply_action(GameAction::Select(first));
        s.update(5_000);
        assert_eq!(s.phase(), TurnPhase::OneSelected);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.episode_id(), 1);
        assert_eq!(s.phase(), TurnPhase::Idle);
        assert_eq!(s.board().hidden_count(), 16);

        s.update(6_500);
        assert_eq!(s.elapsed_secs(), 1);
    }

    #[test]
    fn test_full_game_ends_session() {
        let mut s = session();
        let mut now = 0;
        for index in 0..16 {
            if s.board().tile(index).unwrap().is_revealed() {
                continue;
            }
            let other = partner_of(s.board(), index);
            let a = center(&s, index);
            let b = center(&s, other);
            assert!(s.apply_action(GameAction::Select(a)));
            assert!(s.apply_action(GameAction::Select(b)));
            for _ in 0..30 {
                now += 16;
                s.update(now);
            }
        }

        assert_eq!(s.matched_tiles(), 16);
        assert!(!s.continue_game());
        assert!(s.is_finished());

        let frozen = s.elapsed_secs();
        let p = center(&s, 0);
        assert!(!s.apply_action(GameAction::Select(p)));
        s.update(now + 60_000);
        assert_eq!(s.elapsed_secs(), frozen);
    }

    #[test]
    fn test_snapshot_hides_face_down_images() {
        let mut s = session();
        let p = center(&s, 3);
        s.apply_action(GameAction::Select(p));
        let snap = s.snapshot();

        assert_eq!(snap.tiles.len(), 16);
        assert_eq!(snap.pending.as_slice(), &[3]);
        assert!(snap.tiles[3].revealed);
        assert!(snap.tiles[3].image.is_some());
        assert!(snap
            .tiles
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 3)
            .all(|(_, t)| !t.revealed && t.image.is_none()));
        assert_eq!(snap.indicator_rect, Rect::new(42, 3, 12, 3));
    }
}
