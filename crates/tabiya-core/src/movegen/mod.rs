//! Pseudo-legal move generation: piece movement and occupancy rules only,
//! never king safety.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::board_state::BoardState;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::pawns::capture_squares as pawn_capture_squares;

use self::king::{KING_STEPS, gen_king};
use self::knights::KNIGHT_JUMPS;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS, ray_targets};

/// Destinations of a fixed-offset piece: on the board and not friendly.
pub(crate) fn step_targets<'a>(
    board: &'a Board,
    from: Square,
    color: Color,
    offsets: &'a [(i8, i8)],
) -> impl Iterator<Item = Square> + 'a {
    offsets
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(move |&sq| board.piece_at(sq).is_none_or(|p| p.color() != color))
}

/// Push a quiet move or capture for every target square.
fn push_targets(board: &Board, from: Square, piece: Piece, targets: impl Iterator<Item = Square>, list: &mut Vec<Move>) {
    list.extend(targets.map(|to| Move::new(from, to, piece, board.piece_at(to))));
}

/// Pseudo-legal moves of `piece` standing on `from`.
pub(crate) fn gen_piece(state: &BoardState, from: Square, piece: Piece, list: &mut Vec<Move>) {
    let board = state.board();
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(state, from, piece, list),
        PieceKind::Knight => push_targets(board, from, piece, step_targets(board, from, color, &KNIGHT_JUMPS), list),
        PieceKind::Bishop => push_targets(board, from, piece, ray_targets(board, from, color, &BISHOP_DIRS), list),
        PieceKind::Rook => push_targets(board, from, piece, ray_targets(board, from, color, &ROOK_DIRS), list),
        PieceKind::Queen => push_targets(board, from, piece, ray_targets(board, from, color, &QUEEN_DIRS), list),
        PieceKind::King => gen_king(state, from, piece, list),
    }
}

/// Return `true` if `piece` on `from` could capture on `target`.
///
/// Same reach as generation, minus the moves that can never capture: pawn
/// pushes and castling. Pawns attack their forward diagonals whether or not
/// anything stands there.
pub(crate) fn attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawn_capture_squares(from, color).any(|sq| sq == target),
        PieceKind::Knight => step_targets(board, from, color, &KNIGHT_JUMPS).any(|sq| sq == target),
        PieceKind::Bishop => ray_targets(board, from, color, &BISHOP_DIRS).any(|sq| sq == target),
        PieceKind::Rook => ray_targets(board, from, color, &ROOK_DIRS).any(|sq| sq == target),
        PieceKind::Queen => ray_targets(board, from, color, &QUEEN_DIRS).any(|sq| sq == target),
        PieceKind::King => step_targets(board, from, color, &KING_STEPS).any(|sq| sq == target),
    }
}

impl BoardState {
    /// Pseudo-legal moves of the piece on `from`; empty if the square is empty.
    pub fn pseudo_legal_moves_from(&self, from: Square) -> Vec<Move> {
        let mut list = Vec::new();
        if let Some(piece) = self.piece_at(from) {
            gen_piece(self, from, piece, &mut list);
        }
        list
    }

    /// Pseudo-legal moves of every `color` piece, in scan order.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut list = Vec::with_capacity(64);
        for (from, piece) in self.board().pieces_of(color) {
            gen_piece(self, from, piece, &mut list);
        }
        list
    }
}
