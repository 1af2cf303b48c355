//! Session command parsing.

use tabiya_core::{BoardState, CoordinateMove, Game, MoveError};

use crate::error::SessionError;

/// Options adjustable via `setoption name <Name> value <v>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the FEN after every accepted `move`.
    EchoFen(bool),
    /// Complete a bare pawn move onto the last rank with a queen.
    AutoQueen(bool),
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `newgame` -- reset to the starting position.
    NewGame,
    /// `position` -- a game set up from a position plus optional moves.
    Position(Game),
    /// `move <uci>` -- submit one move. The text is kept raw so a bad
    /// move can be answered with `rejected`.
    Move(String),
    /// `legal` -- list legal moves for the side to move.
    Legal,
    /// `fen` -- print the current position.
    Fen,
    /// `key` -- print the repetition key of the current position.
    Key,
    /// `result` -- print the game result.
    Result,
    /// `draw` -- record a draw by agreement.
    Draw,
    /// `abandon` -- record an abandoned game.
    Abandon,
    /// `perft <depth>` -- count leaf nodes.
    Perft(usize),
    /// `setoption name <Name> value <v>`.
    SetOption(SessionOption),
    /// `quit` -- stop the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "newgame" => Ok(Command::NewGame),
        "legal" => Ok(Command::Legal),
        "fen" => Ok(Command::Fen),
        "key" => Ok(Command::Key),
        "result" => Ok(Command::Result),
        "draw" => Ok(Command::Draw),
        "abandon" => Ok(Command::Abandon),
        "quit" => Ok(Command::Quit),
        "move" => args
            .first()
            .map(|m| Command::Move(m.to_string()))
            .ok_or(SessionError::MissingArgument { command: "move" }),
        "perft" => parse_perft(args),
        "position" => parse_position(args),
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, SessionError> {
    let (state, rest) = match tokens.first() {
        Some(&"startpos") => (BoardState::starting_position(), &tokens[1..]),
        Some(&"fen") => {
            // FEN is 6 space-separated fields
            let fields = tokens.len().saturating_sub(1).min(6);
            let fen = tokens[1..=fields].join(" ");
            let state: BoardState = fen
                .parse()
                .map_err(|source| SessionError::InvalidFen { fen: fen.clone(), source })?;
            (state, &tokens[1 + fields..])
        }
        _ => return Err(SessionError::MalformedPosition),
    };

    let mut game = Game::from_state(state);

    // Apply moves if present: "moves e2e4 d7d5 ..."
    if let Some((&"moves", moves)) = rest.split_first() {
        for uci_move in moves {
            game.submit_uci(uci_move).map_err(|source| SessionError::InvalidMove {
                uci_move: uci_move.to_string(),
                source,
            })?;
        }
    }

    Ok(Command::Position(game))
}

fn parse_perft(tokens: &[&str]) -> Result<Command, SessionError> {
    let value = tokens
        .first()
        .ok_or(SessionError::MissingArgument { command: "perft" })?;
    value
        .parse()
        .map(Command::Perft)
        .map_err(|_| SessionError::InvalidDepth {
            value: value.to_string(),
        })
}

/// Parse `name <Name> value <v>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, SessionError> {
    let [name_kw, name, value_kw, value] = tokens else {
        return Err(SessionError::MalformedOption);
    };
    if *name_kw != "name" || *value_kw != "value" {
        return Err(SessionError::MalformedOption);
    }

    let flag = match *value {
        "true" => true,
        "false" => false,
        _ => {
            return Err(SessionError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "echofen" => SessionOption::EchoFen(flag),
        "autoqueen" => SessionOption::AutoQueen(flag),
        _ => {
            return Err(SessionError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}

/// Parse move text for the `move` command.
pub(crate) fn parse_move(text: &str) -> Result<CoordinateMove, MoveError> {
    Ok(text.parse()?)
}
