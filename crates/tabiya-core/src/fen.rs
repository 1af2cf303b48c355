//! FEN parsing and serialization for [`BoardState`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::board_state::BoardState;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse the placement field into a board of unmoved pieces.
fn parse_placement(field: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRankCount { found: rows.len() });
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            if col >= 8 {
                return Err(FenError::BadRankLength {
                    row,
                    length: col + 1,
                });
            }
            board.set(Square::at(row as u8, col as u8), Some(piece));
            col += 1;
        }
        if col != 8 {
            return Err(FenError::BadRankLength { row, length: col });
        }
    }
    Ok(board)
}

/// Mark pieces as moved where the placement and rights prove it.
///
/// Pawns off their start row have moved. A king counts as unmoved only on
/// its home square while its side keeps a right, and a rook only on a corner
/// whose right is still set.
fn infer_moved(board: Board, castling: CastleRights) -> Board {
    let mut out = board;
    for (sq, piece) in board.pieces() {
        let color = piece.color();
        let unmoved = match piece.kind() {
            PieceKind::Pawn => sq.row() == color.pawn_row(),
            PieceKind::King => {
                sq == Square::at(color.home_row(), 4) && castling.has_any(color)
            }
            PieceKind::Rook => CastleSide::ALL
                .into_iter()
                .any(|side| castling.has(color, side) && sq == CastleRights::rook_home(color, side)),
            _ => true,
        };
        if !unmoved {
            out.set(sq, Some(piece.moved()));
        }
    }
    out
}

impl FromStr for BoardState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<BoardState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;
        board.validate()?;

        let active_color = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };

        let halfmove_clock = fields[4].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

        let fullmove_number = fields[5].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fields[5].to_string(),
        })?;

        Ok(BoardState::from_parts(
            infer_moved(board, castling),
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.placement(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
