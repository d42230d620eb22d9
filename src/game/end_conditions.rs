use crate::board::color::Color;
use crate::board::piece::PieceSearch;
use crate::board::RectangularBoard;
use crate::chess_move::MoveRecord;
use crate::game::GameError;
use crate::move_generation::{check, legal_moves};

/// A decision reached by a win or draw evaluator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Victory { winner: Color },
    Draw,
}

/// Win evaluators, run after each move in the order the rules list them.
/// The first decision ends the game.
#[derive(Clone, Debug)]
pub enum WinCondition {
    /// The player about to move has no pieces left.
    AllPiecesCaptured,
    /// The player about to move has their royal piece in check and no legal
    /// move that escapes it.
    Checkmate { royal_piece: String },
    /// Resignation is an explicit player action, never a per-turn predicate.
    Resign,
}

impl WinCondition {
    /// `None` is the no-decision sentinel: evaluation continues down the
    /// configured list.
    pub fn evaluate(
        &self,
        board: &RectangularBoard,
        to_move: Color,
        previous: Option<&MoveRecord>,
    ) -> Result<Option<Outcome>, GameError> {
        match self {
            WinCondition::AllPiecesCaptured => {
                let remaining = board.piece_spaces(&PieceSearch::any().with_color(to_move));
                if remaining.is_empty() {
                    Ok(Some(Outcome::Victory {
                        winner: to_move.opposite(),
                    }))
                } else {
                    Ok(None)
                }
            }
            WinCondition::Checkmate { royal_piece } => {
                if !check::piece_is_in_check(board, royal_piece, to_move)? {
                    return Ok(None);
                }
                if side_has_legal_move(board, to_move, previous)? {
                    return Ok(None);
                }
                Ok(Some(Outcome::Victory {
                    winner: to_move.opposite(),
                }))
            }
            WinCondition::Resign => Ok(None),
        }
    }
}

/// Draw evaluators, run after the win evaluators. Repetition and move-count
/// clocks are configuration the engine does not implement.
#[derive(Clone, Debug)]
pub enum DrawCondition {
    /// The player about to move has no legal move at all.
    Stalemate,
}

impl DrawCondition {
    pub fn evaluate(
        &self,
        board: &RectangularBoard,
        to_move: Color,
        previous: Option<&MoveRecord>,
    ) -> Result<Option<Outcome>, GameError> {
        match self {
            DrawCondition::Stalemate => {
                if side_has_legal_move(board, to_move, previous)? {
                    Ok(None)
                } else {
                    Ok(Some(Outcome::Draw))
                }
            }
        }
    }
}

fn side_has_legal_move(
    board: &RectangularBoard,
    color: Color,
    previous: Option<&MoveRecord>,
) -> Result<bool, GameError> {
    for space in board.piece_spaces(&PieceSearch::any().with_color(color)) {
        let generated = legal_moves(board, space.position(), previous)?;
        if !generated.candidates.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
