pub mod check;
pub mod targets;

mod conditions;


use common::coordinate::Position;
use log::debug;

use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::RectangularBoard;
use crate::chess_move::MoveRecord;
use crate::game::GameError;

pub use self::targets::{generate_moves, CandidateMove, GeneratedMoves};

/// Candidates from [`generate_moves`] filtered through speculative
/// validation: each one is raw-applied to a duplicate board, and survives
/// only if every registered verifier accepts the result for the mover's
/// color. The threatened-square set passes through unfiltered.
pub fn legal_moves(
    board: &RectangularBoard,
    origin: Position,
    previous: Option<&MoveRecord>,
) -> Result<GeneratedMoves, GameError> {
    let generated = generate_moves(board, origin, previous)?;
    let mover_color = board
        .piece_at(origin)
        .ok_or(BoardError::EmptyOriginSpace { origin })?
        .color();

    let mut legal = Vec::with_capacity(generated.candidates.len());
    'candidates: for candidate in generated.candidates {
        let mut speculative = board.duplicate()?;
        apply_candidate(&mut speculative, &candidate)?;
        for verifier in board.verifiers() {
            if !verifier.verify(&speculative, mover_color)? {
                debug!("dropping candidate {} -> {}: leaves {} {} attacked",
                    candidate.origin, candidate.destination, mover_color, verifier.royal_piece());
                continue 'candidates;
            }
        }
        legal.push(candidate);
    }

    Ok(GeneratedMoves {
        candidates: legal,
        threatened: generated.threatened,
    })
}

/// Raw application of a candidate through the board's primitives: alternate
/// capture removal, the relocation itself, and the castle partner's
/// relocation. Move counters and promotion replacement stay with the
/// orchestration layer; neither affects whether the mover's own royal piece
/// is left attacked.
pub(crate) fn apply_candidate(
    board: &mut RectangularBoard,
    candidate: &CandidateMove,
) -> Result<Option<Piece>, BoardError> {
    let mut captured = None;
    if let Some(capture_at) = candidate.capture_at {
        if capture_at != candidate.destination {
            captured = board.remove_piece(capture_at)?;
        }
    }
    if let Some(piece) = board.move_piece(candidate.origin, candidate.destination)? {
        captured = Some(piece);
    }
    if let Some(castle) = &candidate.castle {
        board.move_piece(castle.origin, castle.destination)?;
    }
    Ok(captured)
}
