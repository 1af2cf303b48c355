//! Pawn pushes, captures, en passant and promotion.

use crate::board_state::BoardState;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The two forward diagonals of a `color` pawn on `from`.
pub(crate) fn capture_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    [-1, 1]
        .into_iter()
        .filter_map(move |dc| from.offset(color.forward(), dc))
}

/// Push a move onto `to`, expanded into one move per promotion piece when
/// `to` is on the last rank.
fn push_advance(from: Square, to: Square, pawn: Piece, captured: Option<Piece>, list: &mut Vec<Move>) {
    if to.row() == pawn.color().promotion_row() {
        list.extend(
            PieceKind::PROMOTIONS
                .into_iter()
                .map(|kind| Move::promotion(from, to, pawn, captured, kind)),
        );
    } else {
        list.push(Move::new(from, to, pawn, captured));
    }
}

pub(super) fn gen_pawn(state: &BoardState, from: Square, pawn: Piece, list: &mut Vec<Move>) {
    let board = state.board();
    let color = pawn.color();
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0)
        && board.piece_at(one).is_none()
    {
        push_advance(from, one, pawn, None, list);

        if from.row() == color.pawn_row()
            && let Some(two) = from.offset(2 * forward, 0)
            && board.piece_at(two).is_none()
        {
            list.push(Move::with_kind(from, two, pawn, None, MoveKind::DoublePawnPush));
        }
    }

    for to in capture_squares(from, color) {
        match board.piece_at(to) {
            Some(target) if target.color() != color => push_advance(from, to, pawn, Some(target), list),
            Some(_) => {}
            None if state.en_passant() == Some(to) => {
                // The victim stands beside the capturing pawn, one row behind the target.
                let victim = to
                    .offset(-forward, 0)
                    .and_then(|sq| board.piece_at(sq))
                    .filter(|p| p.is(PieceKind::Pawn, !color));
                if victim.is_some() {
                    list.push(Move::with_kind(from, to, pawn, victim, MoveKind::EnPassant));
                }
            }
            None => {}
        }
    }
}
