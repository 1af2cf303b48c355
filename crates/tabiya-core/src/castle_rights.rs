//! Castling rights: four monotonic flags.

use std::fmt;

use crate::chess_move::MoveKind;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which wing a castle goes toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the king lands on.
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook starts on.
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on. The king passes over it on the way.
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns between king and rook that must be empty.
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// The move type a castle toward this side carries.
    pub const fn move_kind(self) -> MoveKind {
        match self {
            CastleSide::KingSide => MoveKind::CastleKingside,
            CastleSide::QueenSide => MoveKind::CastleQueenside,
        }
    }
}

/// Castling rights: bit 0 = white king side, 1 = white queen side,
/// 2 = black king side, 3 = black queen side.
///
/// Rights are only ever removed while a game is played.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four rights, as at game start.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Rights as four independent flags.
    pub const fn from_flags(
        white_king: bool,
        white_queen: bool,
        black_king: bool,
        black_queen: bool,
    ) -> CastleRights {
        CastleRights(
            white_king as u8
                | (white_queen as u8) << 1
                | (black_king as u8) << 2
                | (black_queen as u8) << 3,
        )
    }

    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }

    /// Return `true` if no right remains.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Return `true` if `color` keeps at least one right.
    #[inline]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastleSide::KingSide) || self.has(color, CastleSide::QueenSide)
    }

    /// Drop the right of `color` toward `side`.
    #[inline]
    pub const fn without(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::bit(color, side))
    }

    /// Drop both rights of `color`.
    #[inline]
    pub const fn without_color(self, color: Color) -> CastleRights {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    /// The corner a rook must start from for `color` to castle toward `side`.
    pub const fn rook_home(color: Color, side: CastleSide) -> Square {
        Square::at(color.home_row(), side.rook_from_col())
    }

    /// Drop any right whose rook home is `sq`.
    fn without_rook_home(self, sq: Square) -> CastleRights {
        let mut rights = self;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if Self::rook_home(color, side) == sq {
                    rights = rights.without(color, side);
                }
            }
        }
        rights
    }

    /// Rights after `piece` moves from `from` to `to`.
    ///
    /// A king move drops both rights of its color. Either endpoint landing on
    /// a rook home drops that corner's right, which also covers a rook being
    /// captured where it stands.
    pub fn after_move(self, piece: Piece, from: Square, to: Square) -> CastleRights {
        let rights = if piece.kind() == PieceKind::King {
            self.without_color(piece.color())
        } else {
            self
        };
        rights.without_rook_home(from).without_rook_home(to)
    }

    /// Parse the FEN castling field ("KQkq", "Kq", "-", ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut bits = 0;
        for c in s.chars() {
            bits |= match c {
                'K' => Self::bit(Color::White, CastleSide::KingSide),
                'Q' => Self::bit(Color::White, CastleSide::QueenSide),
                'k' => Self::bit(Color::Black, CastleSide::KingSide),
                'q' => Self::bit(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
        }
        Ok(CastleRights(bits))
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ]
        .into_iter()
        .filter(|&(color, side, _)| self.has(color, side))
        .map(|(_, _, c)| c)
        .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
