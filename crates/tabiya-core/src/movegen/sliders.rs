//! Ray-casting for rooks, bishops and queens.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares reachable along each direction: every empty square up to the
/// first occupied one, which is included only if it holds an enemy piece.
pub(crate) fn ray_targets<'a>(
    board: &'a Board,
    from: Square,
    color: Color,
    dirs: &'a [(i8, i8)],
) -> impl Iterator<Item = Square> + 'a {
    dirs.iter().flat_map(move |&(dr, dc)| {
        let mut cur = Some(from);
        std::iter::from_fn(move || {
            let next = cur?.offset(dr, dc)?;
            match board.piece_at(next) {
                None => cur = Some(next),
                Some(piece) if piece.color() != color => cur = None,
                Some(_) => return None,
            }
            Some(next)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{ROOK_DIRS, ray_targets};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn ray_includes_enemy_then_stops() {
        let board = Board::empty()
            .with_piece(Square::A1, Piece::new(PieceKind::Rook, Color::White))
            .with_piece(Square::A3, Piece::new(PieceKind::Knight, Color::Black))
            .with_piece(Square::C1, Piece::new(PieceKind::Bishop, Color::White));
        let mut targets: Vec<Square> = ray_targets(&board, Square::A1, Color::White, &ROOK_DIRS).collect();
        targets.sort();
        let mut expected = vec![Square::A2, Square::A3, Square::B1];
        expected.sort();
        assert_eq!(targets, expected);
    }
}
