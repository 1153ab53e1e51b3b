//! Turn state machine.
//!
//! A turn reveals two tiles, keeps them face-up for a fixed number of frames
//! and then either leaves them revealed (a match) or flips them back:
//!
//! ```text
//! Idle --select--> OneSelected --select--> Evaluating --N frames--> Idle
//! ```
//!
//! The delay is counted in calls to [`GameController::advance`], one per
//! frame, so nothing ever sleeps. Selections that arrive while a pair is
//! being evaluated are dropped here rather than filtered at the input source.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{ImageId, Indicator, Point, TurnPhase, MATCH_DELAY_FRAMES};

/// The turn in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Revealed-but-unresolved tiles, in selection order
    pending: ArrayVec<usize, 2>,
    /// Frames spent in `Evaluating`
    delay_frames: u32,
    indicator: Indicator,
}

impl SelectionState {
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn delay_frames(&self) -> u32 {
        self.delay_frames
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.delay_frames = 0;
        self.indicator = Indicator::Idle;
    }
}

/// Result of a finished evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Both tiles stay revealed for the rest of the game
    Matched {
        first: usize,
        second: usize,
        image: ImageId,
    },
    /// Both tiles were flipped back
    Mismatched { first: usize, second: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    selection: SelectionState,
    /// Tiles matched so far (grows by 2 per pair)
    matched_tiles: u32,
    match_delay_frames: u32,
    complete: bool,
}

impl GameController {
    pub fn new(match_delay_frames: u32) -> Self {
        Self {
            selection: SelectionState::default(),
            matched_tiles: 0,
            match_delay_frames,
            complete: false,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        match self.selection.pending.len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneSelected,
            _ => TurnPhase::Evaluating,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn pending(&self) -> &[usize] {
        self.selection.pending()
    }

    pub fn delay_frames(&self) -> u32 {
        self.selection.delay_frames
    }

    pub fn indicator(&self) -> Indicator {
        self.selection.indicator
    }

    pub fn matched_tiles(&self) -> u32 {
        self.matched_tiles
    }

    pub fn match_delay_frames(&self) -> u32 {
        self.match_delay_frames
    }

    /// True once every tile on the board has been matched
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Check if a selection would currently be considered at all
    pub fn accepts_selection(&self) -> bool {
        !self.complete && self.phase() != TurnPhase::Evaluating
    }

    /// Handle a selection at board coordinate `p`.
    ///
    /// Returns true if a tile was revealed. Points off the board, revealed
    /// tiles and anything during evaluation are ignored.
    pub fn select(&mut self, board: &mut Board, p: Point) -> bool {
        if !self.accepts_selection() {
            tracing::debug!(
                x = p.x,
                y = p.y,
                phase = self.phase().as_str(),
                "selection ignored"
            );
            return false;
        }
        match board.tile_at(p) {
            Some(index) => self.select_tile(board, index),
            None => false,
        }
    }

    /// Handle a selection that already resolved to a tile index
    pub fn select_tile(&mut self, board: &mut Board, index: usize) -> bool {
        if !self.accepts_selection() || self.selection.pending.is_full() {
            return false;
        }
        let Some(tile) = board.tile_mut(index) else {
            return false;
        };
        if !tile.is_hidden() {
            return false;
        }

        tile.reveal();
        self.selection.pending.push(index);
        tracing::debug!(tile = index, pending = self.selection.pending.len(), "tile revealed");

        if self.selection.pending.is_full() {
            self.selection.delay_frames = 0;
            self.selection.indicator = Indicator::Evaluating;
        }
        true
    }

    /// Advance one frame.
    ///
    /// While evaluating, bumps the delay counter; once it reaches the
    /// threshold the pair is resolved and the outcome returned.
    pub fn advance(&mut self, board: &mut Board) -> Option<TurnOutcome> {
        if self.phase() != TurnPhase::Evaluating {
            return None;
        }

        self.selection.delay_frames += 1;
        if self.selection.delay_frames < self.match_delay_frames {
            return None;
        }

        let first = self.selection.pending[0];
        let second = self.selection.pending[1];
        let first_image = board.tile(first).and_then(|t| t.image());
        let second_image = board.tile(second).and_then(|t| t.image());

        let outcome = match (first_image, second_image) {
            (Some(a), Some(b)) if board.pairing().is_match(a, b) => {
                self.matched_tiles += 2;
                tracing::info!(
                    first,
                    second,
                    image = a.get(),
                    matched = self.matched_tiles,
                    "pair matched"
                );
                TurnOutcome::Matched {
                    first,
                    second,
                    image: a,
                }
            }
            _ => {
                for index in [first, second] {
                    if let Some(tile) = board.tile_mut(index) {
                        tile.hide();
                    }
                }
                tracing::info!(first, second, "pair mismatched");
                TurnOutcome::Mismatched { first, second }
            }
        };

        self.selection.clear();

        if self.matched_tiles as usize >= board.len() {
            self.complete = true;
            tracing::info!(matched = self.matched_tiles, "all pairs found");
        }

        Some(outcome)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(MATCH_DELAY_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::ImagePairing;
    use crate::rng::SimpleRng;

    const A: ImageId = ImageId(100);

    /// Tiles T1..T16 (indices 0..15); T3 and T11 share image A, the rest are unique.
    fn scenario_board() -> Board {
        let mut layout: Vec<ImageId> = (0..16).map(ImageId).collect();
        layout[2] = A;
        layout[10] = A;
        let mut deck = layout.clone();
        deck.sort();
        deck.dedup();
        let mut halves = deck.clone();
        halves.extend_from_slice(&deck);
        let pairing = ImagePairing::from_halves(&halves).unwrap();
        Board::new().with_layout(&layout, pairing)
    }

    fn center(board: &Board, index: usize) -> Point {
        board.tile(index).unwrap().rect().center()
    }

    fn pick(controller: &mut GameController, board: &mut Board, index: usize) -> bool {
        let p = center(board, index);
        controller.select(board, p)
    }

    fn advance_n(controller: &mut GameController, board: &mut Board, n: u32) -> Option<TurnOutcome> {
        let mut last = None;
        for _ in 0..n {
            if let Some(outcome) = controller.advance(board) {
                last = Some(outcome);
            }
        }
        last
    }

    #[test]
    fn test_matching_pair_stays_revealed() {
        let mut board = scenario_board();
        let mut c = GameController::default();

        assert!(pick(&mut c, &mut board, 2));
        assert_eq!(c.pending(), &[2]);
        assert_eq!(c.phase(), TurnPhase::OneSelected);

        assert!(pick(&mut c, &mut board, 10));
        assert_eq!(c.pending(), &[2, 10]);
        assert_eq!(c.phase(), TurnPhase::Evaluating);
        assert_eq!(c.indicator(), Indicator::Evaluating);

        assert_eq!(advance_n(&mut c, &mut board, 29), None);
        assert!(board.tile(2).unwrap().is_revealed());
        assert!(board.tile(10).unwrap().is_revealed());
        assert_eq!(c.matched_tiles(), 0);
        assert_eq!(c.delay_frames(), 29);

        assert_eq!(
            c.advance(&mut board),
            Some(TurnOutcome::Matched {
                first: 2,
                second: 10,
                image: A
            })
        );
        assert_eq!(c.matched_tiles(), 2);
        assert!(c.pending().is_empty());
        assert_eq!(c.phase(), TurnPhase::Idle);
        assert_eq!(c.indicator(), Indicator::Idle);
        assert_eq!(c.delay_frames(), 0);

        // Permanently revealed.
        advance_n(&mut c, &mut board, 100);
        assert!(board.tile(2).unwrap().is_revealed());
        assert!(board.tile(10).unwrap().is_revealed());
    }

    #[test]
    fn test_mismatched_pair_flips_back() {
        let mut board = scenario_board();
        let mut c = GameController::default();

        assert!(pick(&mut c, &mut board, 0));
        assert!(pick(&mut c, &mut board, 1));

        assert_eq!(
            advance_n(&mut c, &mut board, 30),
            Some(TurnOutcome::Mismatched {
                first: 0,
                second: 1
            })
        );
        assert!(board.tile(0).unwrap().is_hidden());
        assert!(board.tile(1).unwrap().is_hidden());
        assert_eq!(c.matched_tiles(), 0);
        assert_eq!(c.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_selection_ignored_while_evaluating() {
        let mut board = scenario_board();
        let mut c = GameController::default();

        pick(&mut c, &mut board, 0);
        pick(&mut c, &mut board, 1);
        let before = board.clone();

        for _ in 0..10 {
            c.advance(&mut board);
            assert!(!pick(&mut c, &mut board, 5));
            assert!(!c.select_tile(&mut board, 6));
        }
        assert_eq!(board, before);
        assert_eq!(c.pending(), &[0, 1]);
    }

    #[test]
    fn test_revealed_and_offboard_selections_are_ignored() {
        let mut board = scenario_board();
        let mut c = GameController::default();

        assert!(pick(&mut c, &mut board, 4));
        // Same tile again.
        assert!(!pick(&mut c, &mut board, 4));
        assert_eq!(c.phase(), TurnPhase::OneSelected);

        assert!(!c.select(&mut board, Point::new(-1, 0)));
        let below = Point::new(0, board.height() as i32);
        assert!(!c.select(&mut board, below));
        assert_eq!(c.pending(), &[4]);
    }

    #[test]
    fn test_custom_delay_threshold() {
        let mut board = scenario_board();
        let mut c = GameController::new(3);
        c.select_tile(&mut board, 0);
        c.select_tile(&mut board, 1);
        assert_eq!(advance_n(&mut c, &mut board, 2), None);
        assert!(c.advance(&mut board).is_some());
    }

    #[test]
    fn test_advance_outside_evaluation_is_noop() {
        let mut board = scenario_board();
        let mut c = GameController::default();
        assert_eq!(c.advance(&mut board), None);
        c.select_tile(&mut board, 0);
        assert_eq!(advance_n(&mut c, &mut board, 100), None);
        assert_eq!(c.delay_frames(), 0);
        assert_eq!(c.pending(), &[0]);
    }

    #[test]
    fn test_pending_never_exceeds_two() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(2024);
        let deck = crate::pairing::deck_from_images(&(1..=8).map(ImageId).collect::<Vec<_>>());
        board.assign_images(deck, &mut rng).unwrap();

        let mut c = GameController::new(4);
        for _ in 0..5_000 {
            match rng.next_range(3) {
                0 => {
                    let x = rng.next_range(60) as i32 - 10;
                    let y = rng.next_range(30) as i32 - 5;
                    c.select(&mut board, Point::new(x, y));
                }
                _ => {
                    c.advance(&mut board);
                }
            }
            assert!(c.pending().len() <= 2);
            assert_eq!(c.phase().pending_len(), c.pending().len());
            assert_eq!(
                board.tiles().iter().filter(|t| t.is_revealed()).count(),
                c.matched_tiles() as usize + c.pending().len()
            );
        }
    }
}
