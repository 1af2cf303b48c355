//! The 8x8 piece grid.

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement only: which piece, if any, stands on each square.
///
/// Speculative placements work on a copy; a held `Board` never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Board {
        Board::default()
    }

    /// The standard initial setup.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.set(Square::at(color.home_row(), col as u8), Some(Piece::new(kind, color)));
                board.set(
                    Square::at(color.pawn_row(), col as u8),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Return a copy of this board with `piece` placed on `sq`.
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set(sq, Some(piece));
        self
    }

    /// Every occupied square with its piece, in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding a piece of `color`, in scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of `color`'s king, or `None` if it is missing.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Rank-by-rank placement, top row first: empty runs become digits and
    /// ranks are separated by '/'.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0u8..8 {
            let mut empty = 0u8;
            for col in 0u8..8 {
                match self.piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Check structural integrity: one king per color, no pawn on a back rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        if let Some((square, _)) = self
            .pieces()
            .find(|(sq, piece)| piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
        {
            return Err(BoardError::PawnOnBackRank { square });
        }
        Ok(())
    }
}
