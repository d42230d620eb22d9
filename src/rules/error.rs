use thiserror::Error;

use crate::board::color::Color;

/// Configuration problems caught during setup, never during play.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulesError {
    #[error("a game needs exactly two players, got {found}")]
    IncompletePlayerRoster { found: usize },
    #[error("more than one player claims the color {color}")]
    DuplicatePlayerColor { color: Color },
    #[error("more than one player claims turn order {order}")]
    DuplicatePlayerOrder { order: usize },
    #[error("at least one piece type must be configured")]
    NoPiecesConfigured,
    #[error("duplicate piece name {name:?}")]
    DuplicatePieceName { name: String },
    #[error("duplicate piece notation {notation:?}")]
    DuplicatePieceNotation { notation: String },
    #[error("duplicate display character {character:?}")]
    DuplicateDisplayCharacter { character: char },
    #[error("{context} references unknown piece {name:?}")]
    UnknownPieceReference {
        context: &'static str,
        name: String,
    },
}
