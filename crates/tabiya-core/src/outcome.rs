//! Outcome evaluation: decisive results and automatic draws.

use std::fmt;

use crate::board_state::BoardState;
use crate::color::Color;
use crate::piece_kind::PieceKind;

/// The state of a game as seen from outside.
///
/// `DrawAgreement` and `Abandoned` are never produced by
/// [`BoardState::evaluate`]; only a caller can record them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
    DrawStalemate,
    DrawInsufficientMaterial,
    DrawThreefoldRepetition,
    DrawFiftyMoveRule,
    DrawAgreement,
    Abandoned,
}

impl GameResult {
    #[inline]
    pub const fn is_ongoing(self) -> bool {
        matches!(self, GameResult::Ongoing)
    }

    /// Return `true` for every kind of draw.
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameResult::DrawStalemate
                | GameResult::DrawInsufficientMaterial
                | GameResult::DrawThreefoldRepetition
                | GameResult::DrawFiftyMoveRule
                | GameResult::DrawAgreement
        )
    }

    /// The winning side of a decisive result.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    /// A win for `color`.
    pub const fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Stable lowercase token, e.g. `draw-fifty-move-rule`.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::Ongoing => "ongoing",
            GameResult::WhiteWins => "white-wins",
            GameResult::BlackWins => "black-wins",
            GameResult::DrawStalemate => "draw-stalemate",
            GameResult::DrawInsufficientMaterial => "draw-insufficient-material",
            GameResult::DrawThreefoldRepetition => "draw-threefold-repetition",
            GameResult::DrawFiftyMoveRule => "draw-fifty-move-rule",
            GameResult::DrawAgreement => "draw-agreement",
            GameResult::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plies without a pawn move or capture that end the game.
pub const FIFTY_MOVE_PLIES: u16 = 100;

/// Occurrences of one position that end the game.
pub const REPETITION_LIMIT: u32 = 3;

impl BoardState {
    /// Classify this position for the side to move.
    ///
    /// Checkmate and stalemate take precedence over the automatic draws,
    /// so a mate delivered on the hundredth quiet ply still wins.
    pub fn evaluate(&self) -> GameResult {
        let us = self.active_color();
        if !self.has_legal_move(us) {
            return if self.is_in_check(us) {
                GameResult::win_for(!us)
            } else {
                GameResult::DrawStalemate
            };
        }
        if self.halfmove_clock() >= FIFTY_MOVE_PLIES {
            return GameResult::DrawFiftyMoveRule;
        }
        if self.has_insufficient_material() {
            return GameResult::DrawInsufficientMaterial;
        }
        if self.repetition_count() >= REPETITION_LIMIT {
            return GameResult::DrawThreefoldRepetition;
        }
        GameResult::Ongoing
    }

    /// Bare kings, or a lone bishop or knight against a bare king.
    ///
    /// Two knights or same-colored bishops are not covered.
    pub fn has_insufficient_material(&self) -> bool {
        let mut extras = self
            .board()
            .pieces()
            .filter(|(_, piece)| piece.kind() != PieceKind::King);
        match (extras.next(), extras.next()) {
            (None, _) => true,
            (Some((_, piece)), None) => piece.kind().is_minor(),
            _ => false,
        }
    }
}
