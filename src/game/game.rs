use std::sync::Arc;

use common::coordinate::Position;
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::RectangularBoard;
use crate::chess_move::MoveRecord;
use crate::move_generation::check::StateVerifier;
use crate::move_generation::{apply_candidate, legal_moves, GeneratedMoves};
use crate::rules::error::RulesError;
use crate::rules::piece_rules::PieceRules;
use crate::rules::GameRules;

use super::end_conditions::{DrawCondition, Outcome, WinCondition};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("no legal move from {origin} to {destination}")]
    InvalidMove {
        origin: Position,
        destination: Position,
    },
    #[error("it is not {color}'s turn")]
    NotYourTurn { color: Color },
    #[error("the game is already over")]
    GameOver,
    #[error("moving to {destination} requires choosing a promotion piece")]
    PromotionChoiceRequired { destination: Position },
    #[error("{name:?} is not a valid promotion choice for this move")]
    InvalidPromotionTarget { name: String },
    #[error("expected exactly one {color} {name} on the board, found {found}")]
    RoyalPieceMiscount {
        name: String,
        color: Color,
        found: usize,
    },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("rules error: {0}")]
    Rules(#[from] RulesError),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won { winner: Color },
    Drawn,
}

/// Thin orchestration over the core: sequences turns, resolves requested
/// moves against the interpreter's legal set, mutates the live board, keeps
/// history, and classifies the game after every accepted move.
pub struct Game {
    board: RectangularBoard,
    piece_rules: FxHashMap<String, Arc<PieceRules>>,
    turn_order: Vec<Color>,
    turn: usize,
    history: Vec<MoveRecord>,
    win_conditions: Vec<WinCondition>,
    draw_conditions: Vec<DrawCondition>,
    status: GameStatus,
}

impl Game {
    /// Validates the rules, builds the starting board, and registers one
    /// board-state verifier per configured royal piece.
    pub fn new(rules: GameRules) -> Result<Self, GameError> {
        rules.validate()?;
        let GameRules {
            board: dimensions,
            mut players,
            pieces,
            win_conditions,
            draw_conditions,
        } = rules;

        let mut piece_rules = FxHashMap::default();
        let mut placements = Vec::new();
        for piece in pieces {
            let handle = Arc::new(piece);
            for placement in &handle.starting_positions {
                placements.push((
                    Piece::new(Arc::clone(&handle), placement.color),
                    placement.position,
                ));
            }
            piece_rules.insert(handle.name.clone(), handle);
        }

        let mut board = RectangularBoard::new(dimensions.width, dimensions.height, placements)?;
        for condition in &win_conditions {
            if let WinCondition::Checkmate { royal_piece } = condition {
                board.register_verifier(StateVerifier::for_royal_piece(royal_piece.clone()));
            }
        }

        players.sort_by_key(|player| player.order);
        let turn_order = players.iter().map(|player| player.color).collect();

        Ok(Self {
            board,
            piece_rules,
            turn_order,
            turn: 0,
            history: Vec::new(),
            win_conditions,
            draw_conditions,
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &RectangularBoard {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.turn_order[self.turn % self.turn_order.len()]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Legal moves for the piece on `origin`, whoever it belongs to.
    pub fn legal_moves_from(&self, origin: Position) -> Result<GeneratedMoves, GameError> {
        legal_moves(&self.board, origin, self.history.last())
    }

    /// Resolves and executes one move for the player to act. `promote_to`
    /// names the replacement piece when (and only when) the destination is a
    /// promotion trigger. Every validation happens before the first board
    /// mutation, so a rejected move leaves no trace.
    pub fn make_move(
        &mut self,
        origin: Position,
        destination: Position,
        promote_to: Option<&str>,
    ) -> Result<MoveRecord, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let mover = self
            .board
            .piece_at(origin)
            .ok_or(BoardError::EmptyOriginSpace { origin })?;
        let color = mover.color();
        let piece_name = mover.name().to_string();
        if color != self.current_player() {
            return Err(GameError::NotYourTurn { color });
        }

        let generated = self.legal_moves_from(origin)?;
        let candidate = generated
            .candidates
            .into_iter()
            .find(|candidate| candidate.destination == destination)
            .ok_or(GameError::InvalidMove {
                origin,
                destination,
            })?;

        let promoted_to = match (&candidate.promotion_targets, promote_to) {
            (Some(targets), Some(name)) if targets.iter().any(|t| t == name) => {
                Some(name.to_string())
            }
            (Some(_), Some(name)) | (None, Some(name)) => {
                return Err(GameError::InvalidPromotionTarget {
                    name: name.to_string(),
                })
            }
            (Some(_), None) => return Err(GameError::PromotionChoiceRequired { destination }),
            (None, None) => None,
        };

        let record = MoveRecord {
            name: candidate.name.clone(),
            kind: candidate.kind,
            piece_name,
            color,
            origin,
            destination,
            capture_at: candidate.capture_at,
            promoted_to: promoted_to.clone(),
            castle: candidate.castle.clone(),
        };

        apply_candidate(&mut self.board, &candidate)?;
        if let Some(piece) = self.board.piece_at_mut(destination) {
            piece.record_move();
        }
        if let Some(castle) = &record.castle {
            if let Some(partner) = self.board.piece_at_mut(castle.destination) {
                partner.record_move();
            }
        }
        if let Some(target_name) = &promoted_to {
            self.replace_with(target_name, color, destination)?;
        }

        debug!("accepted move: {}", record);
        self.history.push(record.clone());
        self.turn += 1;
        self.update_status()?;
        Ok(record)
    }

    /// Resignation: an explicit player action, immediately ending the game
    /// in the opponent's favor.
    pub fn resign(&mut self, color: Color) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        self.status = GameStatus::Won {
            winner: color.opposite(),
        };
        Ok(self.status)
    }

    fn replace_with(
        &mut self,
        piece_name: &str,
        color: Color,
        position: Position,
    ) -> Result<(), GameError> {
        let handle = self.piece_rules.get(piece_name).cloned().ok_or_else(|| {
            GameError::Rules(RulesError::UnknownPieceReference {
                context: "promotion target",
                name: piece_name.to_string(),
            })
        })?;
        self.board.remove_piece(position)?;
        self.board.put_piece(Piece::new(handle, color), position)?;
        Ok(())
    }

    fn update_status(&mut self) -> Result<(), GameError> {
        let to_move = self.current_player();
        for condition in &self.win_conditions {
            if let Some(outcome) =
                condition.evaluate(&self.board, to_move, self.history.last())?
            {
                debug!("win condition {:?} decided: {:?}", condition, outcome);
                self.status = status_from(outcome);
                return Ok(());
            }
        }
        for condition in &self.draw_conditions {
            if let Some(outcome) =
                condition.evaluate(&self.board, to_move, self.history.last())?
            {
                debug!("draw condition {:?} decided: {:?}", condition, outcome);
                self.status = status_from(outcome);
                return Ok(());
            }
        }
        Ok(())
    }
}

fn status_from(outcome: Outcome) -> GameStatus {
    match outcome {
        Outcome::Victory { winner } => GameStatus::Won { winner },
        Outcome::Draw => GameStatus::Drawn,
    }
}
