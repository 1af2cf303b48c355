//! Synchronous session loop: one command in, zero or more reply lines out.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tabiya_core::{CoordinateMove, Game, PieceKind, perft};

use crate::command::{Command, SessionOption, parse_command, parse_move};
use crate::error::SessionError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print `fen <FEN>` after every accepted move.
    pub echo_fen: bool,
    /// Treat a four-character pawn move onto the last rank as a queen
    /// promotion.
    pub auto_queen: bool,
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game driven by text commands, writing replies to `out`.
pub struct Session<W: Write> {
    game: Game,
    config: SessionConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with the starting position and default options.
    pub fn new(out: W) -> Self {
        Self::with_config(out, SessionConfig::default())
    }

    pub fn with_config(out: W, config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Consume the session and hand back its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Malformed commands are logged and answered with an `error` line;
    /// only I/O failures end the loop early.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), SessionError> {
        info!("tabiya session starting");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match self.handle_line(trimmed) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e @ SessionError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(self.out, "error {e}")?;
                }
            }
        }
        self.out.flush()?;
        info!("tabiya session shutting down");
        Ok(())
    }

    /// Parse and execute one line.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, SessionError> {
        match parse_command(line)? {
            Command::NewGame => self.game = Game::new(),
            Command::Position(game) => self.game = game,
            Command::Move(text) => self.handle_move(&text)?,
            Command::Legal => self.handle_legal()?,
            Command::Fen => writeln!(self.out, "fen {}", self.game.state())?,
            Command::Key => writeln!(self.out, "key {}", self.game.state().position_key())?,
            Command::Result => self.write_result()?,
            Command::Draw => {
                self.game.agree_draw();
                self.write_result()?;
            }
            Command::Abandon => {
                self.game.abandon();
                self.write_result()?;
            }
            Command::Perft(depth) => {
                let nodes = perft(self.game.state(), depth);
                writeln!(self.out, "perft {depth} {nodes}")?;
            }
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    debug!(%name, "ignoring unknown command");
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_move(&mut self, text: &str) -> Result<(), SessionError> {
        let submitted = match parse_move(text) {
            Ok(coords) => {
                let coords = self.complete_promotion(coords);
                self.game.submit_coordinates(&coords)
            }
            Err(e) => Err(e),
        };

        match submitted {
            Ok(accepted) => {
                writeln!(self.out, "ok {} {}", accepted.mv, accepted.result)?;
                if self.config.echo_fen {
                    writeln!(self.out, "fen {}", self.game.state())?;
                }
            }
            Err(e) => writeln!(self.out, "rejected {text} {}", e.reason())?,
        }
        Ok(())
    }

    /// Add a queen promotion to a bare pawn move onto the last rank when
    /// `AutoQueen` is on.
    fn complete_promotion(&self, coords: CoordinateMove) -> CoordinateMove {
        if !self.config.auto_queen || coords.promotion.is_some() {
            return coords;
        }
        let state = self.game.state();
        let us = state.active_color();
        let is_pawn = state
            .piece_at(coords.from)
            .is_some_and(|p| p.is(PieceKind::Pawn, us));
        if is_pawn && coords.to.row() == us.promotion_row() {
            CoordinateMove {
                promotion: Some(PieceKind::Queen),
                ..coords
            }
        } else {
            coords
        }
    }

    fn handle_legal(&mut self) -> Result<(), SessionError> {
        let moves: Vec<String> = self.game.legal_moves().iter().map(|m| m.to_uci()).collect();
        if moves.is_empty() {
            writeln!(self.out, "legal")?;
        } else {
            writeln!(self.out, "legal {}", moves.join(" "))?;
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: SessionOption) {
        match option {
            SessionOption::EchoFen(on) => self.config.echo_fen = on,
            SessionOption::AutoQueen(on) => self.config.auto_queen = on,
        }
        debug!(?option, "option set");
    }

    fn write_result(&mut self) -> Result<(), SessionError> {
        writeln!(self.out, "result {}", self.game.result())?;
        Ok(())
    }
}
