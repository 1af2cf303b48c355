//! Chess rules: position model, legal move generation, move application and
//! game outcome.

mod attack;
mod board;
mod board_state;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod legality;
mod make_move;
mod movegen;
mod notation;
mod outcome;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::Board;
pub use board_state::{BoardState, PositionKey};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, NotationError};
pub use fen::STARTING_FEN;
pub use game::{Accepted, Game};
pub use notation::CoordinateMove;
pub use outcome::{FIFTY_MOVE_PLIES, GameResult, REPETITION_LIMIT};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
