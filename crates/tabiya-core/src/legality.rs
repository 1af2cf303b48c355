//! Legality filter: pseudo-legal moves that keep the mover's king safe.

use tracing::debug;

use crate::attack::{is_attacked, king_in_check};
use crate::board_state::BoardState;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::make_move::place;
use crate::notation::CoordinateMove;
use crate::square::Square;

impl BoardState {
    /// All legal moves for `color`, in board-scan order then per-piece
    /// generation order.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = self.pseudo_legal_moves(color);
        moves.retain(|mv| self.is_safe(mv));
        moves
    }

    /// Legal moves of the piece on `from`, empty if it has none or the
    /// square is empty.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = self.pseudo_legal_moves_from(from);
        moves.retain(|mv| self.is_safe(mv));
        moves
    }

    /// Return `true` if any legal move exists for `color`.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pseudo_legal_moves(color).iter().any(|mv| self.is_safe(mv))
    }

    /// Return `true` if playing `mv` does not leave its mover's king attacked.
    ///
    /// A castle must also not cross an attacked square. The king's start
    /// square is covered by generation, its destination by the final check.
    fn is_safe(&self, mv: &Move) -> bool {
        let color = mv.piece().color();
        if let Some(side) = mv.kind().castle_side() {
            let transit = Square::at(mv.from().row(), side.rook_to_col());
            if is_attacked(self.board(), transit, !color) {
                return false;
            }
        }
        !king_in_check(&place(self.board(), mv), color)
    }

    /// Check `mv` against this position and return the canonical generated
    /// move it names.
    ///
    /// Matching uses origin, destination and promotion piece only, so a
    /// caller cannot smuggle in a wrong move type or captured piece.
    pub fn validate(&self, mv: &Move) -> Result<Move, MoveError> {
        self.resolve(&CoordinateMove::from(mv))
    }

    /// Map a coordinate move onto the legal move it names.
    ///
    /// Rejects, in order: empty origin, wrong side, friendly destination,
    /// not a pseudo-legal destination, leaves own king in check.
    pub fn resolve(&self, coords: &CoordinateMove) -> Result<Move, MoveError> {
        let result = self.resolve_inner(coords);
        if let Err(err) = &result {
            debug!(mv = %coords, reason = err.reason(), "move rejected");
        }
        result
    }

    fn resolve_inner(&self, coords: &CoordinateMove) -> Result<Move, MoveError> {
        let piece = self
            .piece_at(coords.from)
            .ok_or(MoveError::EmptyOrigin { square: coords.from })?;

        if piece.color() != self.active_color() {
            return Err(MoveError::WrongTurn { color: piece.color() });
        }

        if self.piece_at(coords.to).is_some_and(|p| p.color() == piece.color()) {
            return Err(MoveError::FriendlyCapture { square: coords.to });
        }

        let mv = self
            .pseudo_legal_moves_from(coords.from)
            .into_iter()
            .find(|mv| mv.to() == coords.to && mv.promotion_piece() == coords.promotion)
            .ok_or(MoveError::IllegalDestination {
                from: coords.from,
                to: coords.to,
            })?;

        if !self.is_safe(&mv) {
            return Err(MoveError::SelfCheck);
        }
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::board_state::BoardState;
    use crate::chess_move::{Move, MoveKind};
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::notation::CoordinateMove;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn resolve(state: &BoardState, uci: &str) -> Result<Move, MoveError> {
        state.resolve(&uci.parse::<CoordinateMove>().unwrap())
    }

    fn legal_uci(state: &BoardState) -> Vec<String> {
        state
            .legal_moves(state.active_color())
            .iter()
            .map(Move::to_uci)
            .collect()
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let state = BoardState::starting_position();
        assert_eq!(state.legal_moves(Color::White).len(), 20);
        assert_eq!(state.legal_moves(Color::Black).len(), 20);
        assert!(state.has_legal_move(Color::White));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // White bishop on e2 is pinned by the rook on e8.
        let state: BoardState = "4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1".parse().unwrap();
        assert!(state.legal_moves_from(Square::E2).is_empty());
        assert_eq!(resolve(&state, "e2d3"), Err(MoveError::SelfCheck));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let state: BoardState = "3rk3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = legal_uci(&state);
        assert!(!moves.contains(&"e1d1".to_string()));
        assert!(!moves.contains(&"e1d2".to_string()));
        assert!(moves.contains(&"e1f1".to_string()));
    }

    #[test]
    fn must_answer_check() {
        let state: BoardState = "4k3/8/8/8/8/8/3P1P2/r3K3 w - - 0 1".parse().unwrap();
        assert!(state.is_in_check(Color::White));
        // f1 is covered once the king steps off the rank's ray.
        assert_eq!(legal_uci(&state), vec!["e1e2"]);
    }

    #[test]
    fn castling_through_attacked_square_is_illegal() {
        // Black rook on f8 covers f1, the kingside transit square.
        let state: BoardState = "4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        assert_eq!(resolve(&state, "e1g1"), Err(MoveError::SelfCheck));
        assert!(resolve(&state, "e1c1").is_ok());
    }

    #[test]
    fn castling_into_attack_is_illegal() {
        let state: BoardState = "4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        assert_eq!(resolve(&state, "e1g1"), Err(MoveError::SelfCheck));
    }

    #[test]
    fn queenside_rook_may_cross_attacked_square() {
        // b1 is attacked but the king never touches it.
        let state: BoardState = "1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1".parse().unwrap();
        let mv = resolve(&state, "e1c1").unwrap();
        assert_eq!(mv.kind(), MoveKind::CastleQueenside);
    }

    #[test]
    fn rejection_order() {
        let state = BoardState::starting_position();
        assert_eq!(
            resolve(&state, "e4e5"),
            Err(MoveError::EmptyOrigin { square: Square::E4 })
        );
        assert_eq!(
            resolve(&state, "e7e5"),
            Err(MoveError::WrongTurn { color: Color::Black })
        );
        assert_eq!(
            resolve(&state, "d1d2"),
            Err(MoveError::FriendlyCapture { square: Square::D2 })
        );
        assert_eq!(
            resolve(&state, "e2e5"),
            Err(MoveError::IllegalDestination {
                from: Square::E2,
                to: Square::E5
            })
        );
    }

    #[test]
    fn promotion_requires_piece_choice() {
        let state: BoardState = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(matches!(
            resolve(&state, "a7a8"),
            Err(MoveError::IllegalDestination { .. })
        ));
        let mv = resolve(&state, "a7a8r").unwrap();
        assert_eq!(mv.promotion_piece(), Some(PieceKind::Rook));
        assert_eq!(mv.kind(), MoveKind::Promotion);
    }

    #[test]
    fn validate_returns_canonical_move() {
        let state: BoardState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        // Caller labels the en passant capture as a plain move.
        let sloppy = Move::new(Square::E5, Square::D6, Piece::new(PieceKind::Pawn, Color::White), None);
        let mv = state.validate(&sloppy).unwrap();
        assert_eq!(mv.kind(), MoveKind::EnPassant);
        assert_eq!(mv.captured().map(|p| p.kind()), Some(PieceKind::Pawn));
    }

    #[test]
    fn en_passant_that_exposes_king_is_illegal() {
        // Capturing d5 en passant would open the fifth rank to the rook.
        let state: BoardState = "4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 1".parse().unwrap();
        assert_eq!(resolve(&state, "e5d6"), Err(MoveError::SelfCheck));
    }
}
