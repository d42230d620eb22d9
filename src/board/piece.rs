use std::fmt;
use std::sync::Arc;

use crate::rules::piece_rules::PieceRules;
use crate::rules::move_definition::MoveDefinition;

use super::color::Color;

/// A piece on the board: a shared handle to its configured rules, the color
/// it plays for, and a counter of moves it has made. The counter backs the
/// "first move" and "has not moved" preconditions and is incremented exactly
/// once per accepted move by the orchestration layer, never by the
/// interpreter.
#[derive(Clone, Debug)]
pub struct Piece {
    rules: Arc<PieceRules>,
    color: Color,
    move_count: u32,
}

impl Piece {
    pub fn new(rules: Arc<PieceRules>, color: Color) -> Self {
        Self {
            rules,
            color,
            move_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.rules.name
    }

    pub fn notation(&self) -> &str {
        &self.rules.notation
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn display_character(&self) -> char {
        match self.color {
            Color::White => self.rules.display.white,
            Color::Black => self.rules.display.black,
        }
    }

    pub fn moves(&self) -> &[MoveDefinition] {
        &self.rules.moves
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    pub fn record_move(&mut self) {
        self.move_count += 1;
    }
}

// Pieces are equal on identity: name plus color. The move counter is
// bookkeeping, not identity.
impl PartialEq for Piece {
    fn eq(&self, other: &Piece) -> bool {
        self.rules.name == other.rules.name && self.color == other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.name())
    }
}

/// Occupied-space filter: an optional piece-name filter combined with an
/// optional "is this color" or "is not this color" filter.
#[derive(Clone, Copy, Default, Debug)]
pub struct PieceSearch<'a> {
    name: Option<&'a str>,
    color: Option<Color>,
    not_color: Option<Color>,
}

impl<'a> PieceSearch<'a> {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn excluding_color(mut self, color: Color) -> Self {
        self.not_color = Some(color);
        self
    }

    pub fn matches(&self, piece: &Piece) -> bool {
        if let Some(name) = self.name {
            if piece.name() != name {
                return false;
            }
        }
        if let Some(color) = self.color {
            if piece.color() != color {
                return false;
            }
        }
        if let Some(not_color) = self.not_color {
            if piece.color() == not_color {
                return false;
            }
        }
        true
    }
}
