//! The full game snapshot: placement, side to move, rights, clocks, history.

use std::collections::HashMap;
use std::fmt;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Canonical identity of a position for repetition counting: placement,
/// side to move, castling rights and en passant availability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey(String);

impl PositionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable game snapshot.
///
/// Nothing mutates a published `BoardState`: [`BoardState::apply`] returns a
/// new one. Besides the move list, each state carries how many times every
/// position key has been reached in the game so far, current one included.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    active_color: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    history: Vec<Move>,
    repetitions: HashMap<PositionKey, u32>,
}

impl BoardState {
    /// The standard starting position with White to move.
    pub fn starting_position() -> BoardState {
        BoardState::from_parts(Board::starting_position(), Color::White, CastleRights::ALL, None, 0, 1)
    }

    /// Build a state with an empty history. Its own position counts once.
    pub(crate) fn from_parts(
        board: Board,
        active_color: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> BoardState {
        let mut state = BoardState {
            board,
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            repetitions: HashMap::new(),
        };
        state.record_position();
        state
    }

    /// Build the successor of `prev` with `mv` appended to its history.
    pub(crate) fn successor(
        prev: &BoardState,
        board: Board,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
        mv: Move,
    ) -> BoardState {
        let mut history = Vec::with_capacity(prev.history.len() + 1);
        history.extend_from_slice(&prev.history);
        history.push(mv);
        let mut state = BoardState {
            board,
            active_color: !prev.active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history,
            repetitions: prev.repetitions.clone(),
        };
        state.record_position();
        state
    }

    fn record_position(&mut self) {
        *self.repetitions.entry(self.position_key()).or_insert(0) += 1;
    }

    /// Replace the annotations on the last history entry. Only called on a
    /// state that has not been handed out yet.
    pub(crate) fn annotate_last_move(&mut self, is_check: bool, is_checkmate: bool) {
        if let Some(last) = self.history.last_mut() {
            *last = last.annotated(is_check, is_checkmate);
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square a pawn passed over on the previous ply, if it was a double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Placement followed by the side to move, e.g.
    /// `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b`.
    pub fn placement(&self) -> String {
        format!("{} {}", self.board.placement(), self.active_color)
    }

    /// The en passant target, but only when a pawn of the side to move
    /// stands ready to capture onto it.
    pub fn en_passant_available(&self) -> Option<Square> {
        let target = self.en_passant?;
        let us = self.active_color;
        [-1, 1]
            .into_iter()
            .filter_map(|dc| target.offset(-us.forward(), dc))
            .any(|sq| self.piece_at(sq).is_some_and(|p| p.is(PieceKind::Pawn, us)))
            .then_some(target)
    }

    /// Repetition key of this position.
    pub fn position_key(&self) -> PositionKey {
        let en_passant = match self.en_passant_available() {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };
        PositionKey(format!("{} {} {}", self.placement(), self.castling, en_passant))
    }

    /// How many times the current position has occurred in this game.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.position_key())
            .copied()
            .unwrap_or(0)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::starting_position()
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState(\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn starting_position_fields() {
        let state = BoardState::starting_position();
        assert_eq!(state.active_color(), Color::White);
        assert_eq!(state.castling().to_fen(), "KQkq");
        assert_eq!(state.en_passant(), None);
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 1);
        assert!(state.history().is_empty());
        assert_eq!(state.repetition_count(), 1);
    }

    #[test]
    fn placement_includes_side_to_move() {
        assert_eq!(
            BoardState::starting_position().placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
        );
    }

    #[test]
    fn key_extends_placement() {
        let key = BoardState::starting_position().position_key();
        assert_eq!(key.as_str(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
    }

    #[test]
    fn en_passant_only_counts_when_capturable() {
        let idle: BoardState = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        assert_eq!(idle.en_passant(), Some(Square::E3));
        assert_eq!(idle.en_passant_available(), None);
        assert!(idle.position_key().as_str().ends_with(" -"));

        let live: BoardState = "rnbqkbnr/ppp1pppp/8/8/2Pp4/8/PP1PPPPP/RNBQKBNR b KQkq c3 0 2"
            .parse()
            .unwrap();
        assert_eq!(live.en_passant_available(), Some(Square::C3));
        assert!(live.position_key().as_str().ends_with(" c3"));
    }
}
