//! Session protocol errors.

use tabiya_core::{FenError, MoveError};

/// Errors that can occur during session protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        #[source]
        source: FenError,
    },

    /// A move in the `position` command's move list was refused.
    #[error("invalid move {uci_move}: {source}")]
    InvalidMove {
        uci_move: String,
        #[source]
        source: MoveError,
    },

    /// A command was given without its required argument.
    #[error("{command} requires an argument")]
    MissingArgument { command: &'static str },

    /// The depth value in `perft` could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth { value: String },

    /// `setoption` without the `name <Name> value <v>` shape.
    #[error("malformed setoption command")]
    MalformedOption,

    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue { name: String, value: String },

    /// An I/O error occurred while reading input or writing a reply.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
