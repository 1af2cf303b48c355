//! King steps and castling.

use crate::board_state::BoardState;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::step_targets;

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// King steps, plus castling when the king is unmoved and not in check.
///
/// Castling needs the right, an own rook on its corner and empty squares in
/// between. Whether the king crosses or lands on an attacked square is left
/// to the legality filter.
pub(super) fn gen_king(state: &BoardState, from: Square, king: Piece, list: &mut Vec<Move>) {
    let board = state.board();
    let color = king.color();
    super::push_targets(board, from, king, step_targets(board, from, color, &KING_STEPS), list);

    if king.has_moved() || state.is_in_check(color) {
        return;
    }

    let row = from.row();
    for side in CastleSide::ALL {
        if !state.castling().has(color, side) {
            continue;
        }
        let rook_ready = board
            .piece_at(CastleRights::rook_home(color, side))
            .is_some_and(|p| p.is(PieceKind::Rook, color));
        let path_clear = side
            .between_cols()
            .iter()
            .all(|&col| board.piece_at(Square::at(row, col)).is_none());
        if rook_ready && path_clear {
            let to = Square::at(row, side.king_to_col());
            list.push(Move::with_kind(from, to, king, None, side.move_kind()));
        }
    }
}
