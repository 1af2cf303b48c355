//! The game facade: owns the current position and its result.

use tracing::{debug, info, trace};

use crate::board_state::BoardState;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::notation::CoordinateMove;
use crate::outcome::GameResult;
use crate::piece::Piece;
use crate::square::Square;

/// A move the game accepted, with the result of the position it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    pub mv: Move,
    pub result: GameResult,
}

/// One game in progress.
///
/// Holds exactly one current [`BoardState`] and replaces it on every
/// accepted move. Snapshots handed out by [`Game::state`] are never
/// affected by later moves.
#[derive(Debug, Clone)]
pub struct Game {
    state: BoardState,
    result: GameResult,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Game {
        Game::from_state(BoardState::starting_position())
    }

    /// A game continuing from `state`. The result is evaluated immediately,
    /// so a position that is already mate starts finished.
    pub fn from_state(state: BoardState) -> Game {
        let result = state.evaluate();
        if !result.is_ongoing() {
            info!(%result, "game set up in a finished position");
        }
        Game { state, result }
    }

    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Ok(Game::from_state(fen.parse()?))
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.state.piece_at(sq)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.state.legal_moves(self.state.active_color())
    }

    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.state.legal_moves(color)
    }

    /// Validate `mv`, apply it and evaluate the new position.
    ///
    /// On rejection the game is left exactly as it was.
    pub fn submit_move(&mut self, mv: &Move) -> Result<Accepted, MoveError> {
        self.ensure_ongoing()?;
        let mv = self.state.validate(mv)?;
        Ok(self.commit(mv))
    }

    /// Like [`Game::submit_move`], from a position-independent move.
    pub fn submit_coordinates(&mut self, coords: &CoordinateMove) -> Result<Accepted, MoveError> {
        self.ensure_ongoing()?;
        let mv = self.state.resolve(coords)?;
        Ok(self.commit(mv))
    }

    /// Like [`Game::submit_move`], from coordinate notation such as "e7e8q".
    pub fn submit_uci(&mut self, text: &str) -> Result<Accepted, MoveError> {
        let coords: CoordinateMove = text.parse()?;
        self.submit_coordinates(&coords)
    }

    /// Record a draw by agreement. Returns `false` if the game already ended.
    pub fn agree_draw(&mut self) -> bool {
        self.finish_externally(GameResult::DrawAgreement)
    }

    /// Record that the game was abandoned. Returns `false` if it already ended.
    pub fn abandon(&mut self) -> bool {
        self.finish_externally(GameResult::Abandoned)
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        if self.result.is_ongoing() {
            Ok(())
        } else {
            debug!(result = %self.result, "move submitted after game end");
            Err(MoveError::GameOver { result: self.result })
        }
    }

    fn commit(&mut self, mv: Move) -> Accepted {
        let mut next = self.state.apply(&mv);
        let result = next.evaluate();
        let is_check = next.is_in_check(next.active_color());
        next.annotate_last_move(is_check, result.winner().is_some());

        let mv = next.last_move().copied().unwrap_or(mv);
        trace!(mv = %mv, check = is_check, fen = %next, "move accepted");
        if !result.is_ongoing() {
            info!(%result, plies = next.history().len(), "game over");
        }

        self.state = next;
        self.result = result;
        Accepted { mv, result }
    }

    fn finish_externally(&mut self, result: GameResult) -> bool {
        if !self.result.is_ongoing() {
            return false;
        }
        info!(%result, "game ended by the players");
        self.result = result;
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
