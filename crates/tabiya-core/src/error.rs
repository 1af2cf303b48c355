//! Error types for position parsing, notation and move rejection.

use crate::color::Color;
use crate::outcome::GameResult;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {row} describes {length} squares, expected 8")]
    BadRankLength {
        /// Row index, 0 being the eighth rank.
        row: usize,
        length: usize,
    },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a piece placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: Color, count: usize },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank { square: Square },
}

/// Errors from parsing coordinate notation such as "e7e8q".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("coordinate move must be 4 or 5 characters: \"{text}\"")]
    BadLength { text: String },
    #[error("invalid square: \"{text}\"")]
    BadSquare { text: String },
    #[error("invalid promotion piece: '{character}'")]
    BadPromotion { character: char },
}

/// Why a submitted move was refused. Rejections are ordinary results, never
/// fatal: the position is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {square}")]
    EmptyOrigin { square: Square },
    #[error("it is not {color}'s turn")]
    WrongTurn { color: Color },
    #[error("{square} holds a friendly piece")]
    FriendlyCapture { square: Square },
    #[error("{from}{to} is not a legal destination")]
    IllegalDestination { from: Square, to: Square },
    #[error("move would leave the king in check")]
    SelfCheck,
    #[error("game is over: {result}")]
    GameOver { result: GameResult },
    /// The move text could not be read at all.
    #[error(transparent)]
    Notation(#[from] NotationError),
}

impl MoveError {
    /// Stable symbolic reason, suitable for transports.
    pub const fn reason(&self) -> &'static str {
        match self {
            MoveError::EmptyOrigin { .. } => "empty-origin",
            MoveError::WrongTurn { .. } => "wrong-turn",
            MoveError::FriendlyCapture { .. } => "friendly-capture",
            MoveError::IllegalDestination { .. } => "illegal-destination",
            MoveError::SelfCheck => "self-check",
            MoveError::GameOver { .. } => "game-over",
            MoveError::Notation(_) => "bad-notation",
        }
    }
}
