pub mod classic;
pub mod condition;
pub mod error;
pub mod move_definition;
pub mod piece_rules;

use rustc_hash::FxHashSet;

use crate::board::color::Color;
use crate::game::end_conditions::{DrawCondition, WinCondition};

use self::error::RulesError;
use self::move_definition::MoveDefinition;
use self::piece_rules::PieceRules;

#[derive(Clone, Copy, Debug)]
pub struct BoardDimensions {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub color: Color,
    pub order: usize,
}

/// The full declarative description of a game variant. `validate` enforces
/// the identity invariants the engine assumes afterwards; geometric problems
/// (bad dimensions, colliding placements) surface when the board is built.
#[derive(Clone, Debug)]
pub struct GameRules {
    pub board: BoardDimensions,
    pub players: Vec<Player>,
    pub pieces: Vec<PieceRules>,
    pub win_conditions: Vec<WinCondition>,
    pub draw_conditions: Vec<DrawCondition>,
}

impl GameRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        self.validate_players()?;
        self.validate_piece_identities()?;
        self.validate_piece_references()?;
        Ok(())
    }

    fn validate_players(&self) -> Result<(), RulesError> {
        if self.players.len() != 2 {
            return Err(RulesError::IncompletePlayerRoster {
                found: self.players.len(),
            });
        }
        let mut colors = FxHashSet::default();
        let mut orders = FxHashSet::default();
        for player in &self.players {
            if !colors.insert(player.color) {
                return Err(RulesError::DuplicatePlayerColor {
                    color: player.color,
                });
            }
            if !orders.insert(player.order) {
                return Err(RulesError::DuplicatePlayerOrder {
                    order: player.order,
                });
            }
        }
        Ok(())
    }

    fn validate_piece_identities(&self) -> Result<(), RulesError> {
        if self.pieces.is_empty() {
            return Err(RulesError::NoPiecesConfigured);
        }
        let mut names = FxHashSet::default();
        let mut notations = FxHashSet::default();
        let mut characters = FxHashSet::default();
        for piece in &self.pieces {
            if !names.insert(piece.name.as_str()) {
                return Err(RulesError::DuplicatePieceName {
                    name: piece.name.clone(),
                });
            }
            if !notations.insert(piece.notation.as_str()) {
                return Err(RulesError::DuplicatePieceNotation {
                    notation: piece.notation.clone(),
                });
            }
            for &character in &[piece.display.white, piece.display.black] {
                if !characters.insert(character) {
                    return Err(RulesError::DuplicateDisplayCharacter { character });
                }
            }
        }
        Ok(())
    }

    // every name a move definition or win condition points at must be a
    // configured piece type
    fn validate_piece_references(&self) -> Result<(), RulesError> {
        let names: FxHashSet<&str> = self.pieces.iter().map(|p| p.name.as_str()).collect();
        let check = |context: &'static str, name: &str| -> Result<(), RulesError> {
            if names.contains(name) {
                Ok(())
            } else {
                Err(RulesError::UnknownPieceReference {
                    context,
                    name: name.to_string(),
                })
            }
        };
        for piece in &self.pieces {
            for definition in &piece.moves {
                match definition {
                    MoveDefinition::Promotion(promotion) => {
                        for target in &promotion.targets {
                            check("promotion target", target)?;
                        }
                    }
                    MoveDefinition::Castle(castle) => {
                        for route in &castle.routes {
                            check("castle target", &route.target_piece)?;
                        }
                    }
                    MoveDefinition::Standard(_) | MoveDefinition::Jump(_) => {}
                }
            }
        }
        for condition in &self.win_conditions {
            if let WinCondition::Checkmate { royal_piece } = condition {
                check("checkmate condition", royal_piece)?;
            }
        }
        Ok(())
    }
}
