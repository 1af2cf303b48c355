//! Moves as immutable facts: what moved, what it took and how.

use std::fmt;
use std::time::SystemTime;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a move, which selects its side effects when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
    DoublePawnPush,
}

impl MoveKind {
    /// The wing of a castling move, `None` for every other kind.
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveKind::CastleKingside => Some(CastleSide::KingSide),
            MoveKind::CastleQueenside => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// A chess move.
///
/// `piece` is the mover as it stood before the move. Equality compares the
/// move itself and ignores `created_at` and the check annotations.
#[derive(Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
    promotion: Option<PieceKind>,
    is_check: bool,
    is_checkmate: bool,
    created_at: SystemTime,
}

impl Move {
    /// Create a quiet move, or a capture when `captured` is set.
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        let kind = if captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Normal
        };
        Move::with_kind(from, to, piece, captured, kind)
    }

    /// Create a move of an explicit kind.
    pub fn with_kind(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            kind,
            promotion: None,
            is_check: false,
            is_checkmate: false,
            created_at: SystemTime::now(),
        }
    }

    /// Create a pawn move onto the last rank that becomes `promotion`.
    pub fn promotion(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: PieceKind,
    ) -> Move {
        Move {
            promotion: Some(promotion),
            ..Move::with_kind(from, to, piece, captured, MoveKind::Promotion)
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn promotion_piece(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Return `true` if the move left the opponent in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    /// Return `true` if the move ended the game by checkmate.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[inline]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Copy of this move carrying check annotations.
    pub(crate) fn annotated(self, is_check: bool, is_checkmate: bool) -> Move {
        Move {
            is_check,
            is_checkmate,
            ..self
        }
    }

    /// Coordinate notation: origin, destination, optional promotion letter.
    pub fn to_uci(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.piece == other.piece
            && self.captured == other.captured
            && self.kind == other.kind
            && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} kind={:?}", self, self.piece, self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, " captures={captured}")?;
        }
        write!(f, ")")
    }
}
