use common::coordinate::Position;

use crate::board::piece::Piece;
use crate::board::RectangularBoard;
use crate::chess_move::MoveRecord;
use crate::game::GameError;
use crate::rules::condition::MoveCondition;

use super::check;

/// What the interpreter is being asked for. Threat enumeration runs without
/// previous-move context and must not re-enter the threat detector, so the
/// safety condition is vacuously true there.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum EvaluationMode {
    Moves,
    Threats,
}

/// Uniform predicate over the whole condition set: every condition must hold
/// against the current board and move history.
pub(super) fn conditions_met(
    conditions: &[MoveCondition],
    board: &RectangularBoard,
    piece: &Piece,
    origin: Position,
    previous: Option<&MoveRecord>,
    mode: EvaluationMode,
) -> Result<bool, GameError> {
    for condition in conditions {
        if !condition_met(condition, board, piece, origin, previous, mode)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn condition_met(
    condition: &MoveCondition,
    board: &RectangularBoard,
    piece: &Piece,
    origin: Position,
    previous: Option<&MoveRecord>,
    mode: EvaluationMode,
) -> Result<bool, GameError> {
    match condition {
        MoveCondition::FirstMove => Ok(!piece.has_moved()),
        MoveCondition::OtherPieceUnmoved {
            piece_name,
            position,
        } => Ok(board.piece_at(*position).map_or(false, |other| {
            other.name() == piece_name && other.color() == piece.color() && !other.has_moved()
        })),
        MoveCondition::PreviousMove {
            move_name,
            piece_name,
            location,
        } => {
            let previous = match previous {
                Some(record) => record,
                None => return Ok(false),
            };
            if let Some(name) = move_name {
                if &previous.name != name {
                    return Ok(false);
                }
            }
            if let Some(name) = piece_name {
                if &previous.piece_name != name {
                    return Ok(false);
                }
            }
            if let Some(location) = location {
                match location.from_origin(origin, piece.color()) {
                    Some(expected) if expected == previous.destination => {}
                    _ => return Ok(false),
                }
            }
            Ok(true)
        }
        MoveCondition::SpacesNotThreatened { spaces } => {
            if mode == EvaluationMode::Threats {
                return Ok(true);
            }
            let resolved: Vec<Position> = spaces
                .iter()
                .filter_map(|offset| offset.from_origin(origin, piece.color()))
                .filter(|position| board.in_bounds(*position))
                .collect();
            Ok(!check::are_spaces_threatened(&resolved, board, piece.color())?)
        }
    }
}
