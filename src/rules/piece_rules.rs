use common::coordinate::Position;

use crate::board::color::Color;

use super::move_definition::MoveDefinition;

/// Per-color board glyphs for a piece type.
#[derive(Clone, Copy, Debug)]
pub struct DisplayCharacters {
    pub white: char,
    pub black: char,
}

/// Where a piece type starts the game.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub color: Color,
    pub position: Position,
}

/// The declarative description of one piece type: identity, glyphs, its
/// move grammar, and starting placements. Shared immutably by every live
/// piece of the type.
#[derive(Clone, Debug)]
pub struct PieceRules {
    pub name: String,
    pub notation: String,
    pub display: DisplayCharacters,
    pub moves: Vec<MoveDefinition>,
    pub starting_positions: Vec<Placement>,
}
