//! Attack detection by re-deriving the attacking side's reach.

use tracing::warn;

use crate::board::Board;
use crate::board_state::BoardState;
use crate::color::Color;
use crate::movegen;
use crate::square::Square;

/// Return `true` if any `by` piece on `board` could capture on `target`.
///
/// Walks the reach of every attacker: pieces times moves-per-piece.
pub(crate) fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| movegen::attacks(board, from, piece, target))
}

/// Return `true` if `color`'s king is attacked.
///
/// A board without that king counts as in check.
pub(crate) fn king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked(board, king, !color),
        None => {
            warn!(?color, "no king on board, treating as in check");
            true
        }
    }
}

impl BoardState {
    /// Return `true` if `sq` is attacked by any piece of `by`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        is_attacked(self.board(), sq, by)
    }

    /// Return `true` if `color`'s king is currently attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        king_in_check(self.board(), color)
    }
}

#[cfg(test)]
mod tests {
    use super::king_in_check;
    use crate::board::Board;
    use crate::board_state::BoardState;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn starting_position_attacks() {
        let state = BoardState::starting_position();
        assert!(state.is_attacked(Square::E3, Color::White));
        assert!(state.is_attacked(Square::F3, Color::White));
        assert!(!state.is_attacked(Square::E4, Color::White));
        assert!(state.is_attacked(Square::F6, Color::Black));
        assert!(!state.is_attacked(Square::E5, Color::Black));
        assert!(!state.is_in_check(Color::White));
        assert!(!state.is_in_check(Color::Black));
    }

    #[test]
    fn pawn_pushes_do_not_attack() {
        let state: BoardState = "4k3/8/8/8/8/8/5p2/4K3 w - - 0 1".parse().unwrap();
        assert!(!state.is_attacked(Square::F1, Color::Black));
        assert!(state.is_attacked(Square::E1, Color::Black));
        assert!(state.is_attacked(Square::G1, Color::Black));
    }

    #[test]
    fn sliders_are_blocked() {
        let state: BoardState = "4k3/8/8/8/r2P3K/8/8/8 w - - 0 1".parse().unwrap();
        assert!(state.is_attacked(Square::C4, Color::Black));
        assert!(state.is_attacked(Square::D4, Color::Black));
        assert!(!state.is_attacked(Square::H4, Color::Black));
        assert!(!state.is_in_check(Color::White));
    }

    #[test]
    fn knight_gives_check() {
        let state: BoardState = "4k3/8/8/8/8/3n4/8/4K3 w - - 0 1".parse().unwrap();
        assert!(state.is_in_check(Color::White));
    }

    #[test]
    fn missing_king_counts_as_check() {
        assert!(king_in_check(&Board::empty(), Color::White));
    }
}
