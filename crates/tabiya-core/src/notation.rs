//! Coordinate notation ("e2e4", "e7e8q") decoupled from any position.

use std::fmt;
use std::str::FromStr;

use crate::chess_move::Move;
use crate::error::NotationError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The position-independent part of a move: where from, where to, and the
/// promotion choice. This is what travels over a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl CoordinateMove {
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> CoordinateMove {
        CoordinateMove {
            from,
            to,
            promotion,
        }
    }
}

impl From<&Move> for CoordinateMove {
    fn from(mv: &Move) -> CoordinateMove {
        CoordinateMove::new(mv.from(), mv.to(), mv.promotion_piece())
    }
}

impl FromStr for CoordinateMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<CoordinateMove, NotationError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(NotationError::BadLength {
                text: s.to_string(),
            });
        }
        let square = |part: &str| {
            Square::from_algebraic(part).ok_or_else(|| NotationError::BadSquare {
                text: part.to_string(),
            })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => {
                let kind = PieceKind::from_fen_char(c)
                    .filter(|k| c.is_ascii_lowercase() && PieceKind::PROMOTIONS.contains(k))
                    .ok_or(NotationError::BadPromotion { character: c })?;
                Some(kind)
            }
        };
        Ok(CoordinateMove::new(from, to, promotion))
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}
