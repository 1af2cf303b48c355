//! State transition: copy-make application of an accepted move.

use crate::board::Board;
use crate::board_state::BoardState;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement after `mv`, including castling, en passant and promotion
/// side effects. `board` is left untouched.
pub(crate) fn place(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    let mover = mv.piece();
    let color = mover.color();

    next.set(mv.from(), None);
    next.set(mv.to(), Some(mover.moved()));

    match mv.kind() {
        MoveKind::EnPassant => {
            if let Some(victim) = mv.to().offset(-color.forward(), 0) {
                next.set(victim, None);
            }
        }
        MoveKind::CastleKingside | MoveKind::CastleQueenside => {
            if let Some(side) = mv.kind().castle_side() {
                let row = mv.from().row();
                let rook = next.take(Square::at(row, side.rook_from_col()));
                next.set(Square::at(row, side.rook_to_col()), rook.map(Piece::moved));
            }
        }
        MoveKind::Promotion => {
            let kind = mv.promotion_piece().unwrap_or(PieceKind::Queen);
            next.set(mv.to(), Some(Piece::new(kind, color).moved()));
        }
        MoveKind::Normal | MoveKind::Capture | MoveKind::DoublePawnPush => {}
    }
    next
}

impl BoardState {
    /// Apply `mv` and return the resulting state. `self` is not modified.
    ///
    /// `mv` is expected to come from [`BoardState::validate`] or
    /// [`BoardState::legal_moves`]; nothing is re-checked here.
    pub fn apply(&self, mv: &Move) -> BoardState {
        let mover = mv.piece();
        let board = place(self.board(), mv);

        let en_passant = match mv.kind() {
            MoveKind::DoublePawnPush => mv.from().offset(mover.color().forward(), 0),
            _ => None,
        };

        let halfmove_clock = if mover.kind() == PieceKind::Pawn || mv.is_capture() {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        };

        let fullmove_number = match self.active_color() {
            Color::Black => self.fullmove_number().saturating_add(1),
            Color::White => self.fullmove_number(),
        };

        let castling = self.castling().after_move(mover, mv.from(), mv.to());

        BoardState::successor(self, board, castling, en_passant, halfmove_clock, fullmove_number, *mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::board_state::BoardState;
    use crate::color::Color;
    use crate::notation::CoordinateMove;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn play(state: &BoardState, uci: &str) -> BoardState {
        let coords: CoordinateMove = uci.parse().unwrap();
        let mv = state.resolve(&coords).unwrap();
        state.apply(&mv)
    }

    #[test]
    fn pawn_push_e2e4() {
        let start = BoardState::starting_position();
        let next = play(&start, "e2e4");
        assert_eq!(next.piece_at(Square::E2), None);
        let pawn = next.piece_at(Square::E4).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert!(pawn.has_moved());
        assert_eq!(next.active_color(), Color::Black);
        assert_eq!(next.en_passant(), Some(Square::E3));
        assert_eq!(next.halfmove_clock(), 0);
        assert_eq!(next.fullmove_number(), 1);
        assert_eq!(next.history().len(), 1);
        assert_eq!(next.to_string(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        // the earlier snapshot is untouched
        assert_eq!(start, BoardState::starting_position());
    }

    #[test]
    fn en_passant_target_lasts_one_ply() {
        let state = play(&BoardState::starting_position(), "e2e4");
        let state = play(&state, "g8f6");
        assert_eq!(state.en_passant(), None);
    }

    #[test]
    fn quiet_moves_tick_clock_and_fullmove() {
        let state = play(&BoardState::starting_position(), "g1f3");
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.fullmove_number(), 1);
        let state = play(&state, "b8c6");
        assert_eq!(state.halfmove_clock(), 2);
        assert_eq!(state.fullmove_number(), 2);
    }

    #[test]
    fn capture_resets_clock() {
        let state: BoardState = "4k3/8/8/3p4/8/8/8/3RK3 w - - 7 30".parse().unwrap();
        let next = play(&state, "d1d5");
        assert_eq!(next.halfmove_clock(), 0);
        assert_eq!(next.piece_at(Square::D5).map(|p| p.kind()), Some(PieceKind::Rook));
    }

    #[test]
    fn en_passant_removes_victim() {
        let state: BoardState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let next = play(&state, "e5d6");
        assert_eq!(next.piece_at(Square::D5), None);
        assert_eq!(next.piece_at(Square::D6).map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(next.piece_at(Square::E5), None);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let state: BoardState = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let next = play(&state, "e1g1");
        assert_eq!(next.piece_at(Square::G1).map(|p| p.kind()), Some(PieceKind::King));
        let rook = next.piece_at(Square::F1).unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert!(rook.has_moved());
        assert_eq!(next.piece_at(Square::H1), None);
        assert_eq!(next.castling().to_fen(), "kq");
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let state: BoardState = "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1".parse().unwrap();
        let next = play(&state, "e8c8");
        assert_eq!(next.piece_at(Square::C8).map(|p| p.kind()), Some(PieceKind::King));
        assert_eq!(next.piece_at(Square::D8).map(|p| p.kind()), Some(PieceKind::Rook));
        assert_eq!(next.piece_at(Square::A8), None);
        assert_eq!(next.castling().to_fen(), "KQ");
        assert_eq!(next.fullmove_number(), 2);
    }

    #[test]
    fn promotion_replaces_pawn() {
        let state: BoardState = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let next = play(&state, "a7a8n");
        let knight = next.piece_at(Square::A8).unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.color(), Color::White);
        assert!(knight.has_moved());
    }

    #[test]
    fn capturing_unmoved_rook_clears_right() {
        let state: BoardState = "r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1".parse().unwrap();
        let next = play(&state, "g2h1");
        assert_eq!(next.castling().to_fen(), "Qkq");
    }

    #[test]
    fn history_accumulates() {
        let state = play(&BoardState::starting_position(), "d2d4");
        let state = play(&state, "d7d5");
        let moves: Vec<String> = state.history().iter().map(|mv| mv.to_uci()).collect();
        assert_eq!(moves, vec!["d2d4", "d7d5"]);
    }
}
