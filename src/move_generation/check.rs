use common::coordinate::Position;

use crate::board::color::Color;
use crate::board::piece::PieceSearch;
use crate::board::RectangularBoard;
use crate::game::GameError;

use super::targets::generate_attack_moves;

/// Whether the single {name, color} piece on the board is attacked. Finding
/// zero or several such pieces is a configuration invariant violation, not a
/// gameplay outcome. Scans every opposing piece's generated candidates; no
/// caching, correctness over speed at engine-scale boards.
pub fn piece_is_in_check(
    board: &RectangularBoard,
    piece_name: &str,
    color: Color,
) -> Result<bool, GameError> {
    let royal_spaces =
        board.piece_spaces(&PieceSearch::any().with_name(piece_name).with_color(color));
    if royal_spaces.len() != 1 {
        return Err(GameError::RoyalPieceMiscount {
            name: piece_name.to_string(),
            color,
            found: royal_spaces.len(),
        });
    }
    let royal_position = royal_spaces[0].position();

    for space in board.piece_spaces(&PieceSearch::any().excluding_color(color)) {
        let generated = generate_attack_moves(board, space.position())?;
        if generated
            .candidates
            .iter()
            .any(|candidate| candidate.destination == royal_position)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether any opposing piece threatens at least one of the given spaces.
/// Gates castling-style safety preconditions.
pub fn are_spaces_threatened(
    spaces: &[Position],
    board: &RectangularBoard,
    defending_color: Color,
) -> Result<bool, GameError> {
    if spaces.is_empty() {
        return Ok(false);
    }
    for space in board.piece_spaces(&PieceSearch::any().excluding_color(defending_color)) {
        let generated = generate_attack_moves(board, space.position())?;
        if spaces
            .iter()
            .any(|position| generated.threatened.contains(position))
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// A board-state predicate bound to a royal piece name: a hypothetical
/// post-move board is legal for a color precisely when that color's royal
/// piece is not left in check.
#[derive(Clone, Debug)]
pub struct StateVerifier {
    royal_piece: String,
}

impl StateVerifier {
    pub fn for_royal_piece(royal_piece: impl Into<String>) -> Self {
        Self {
            royal_piece: royal_piece.into(),
        }
    }

    pub fn royal_piece(&self) -> &str {
        &self.royal_piece
    }

    pub fn verify(&self, board: &RectangularBoard, color: Color) -> Result<bool, GameError> {
        Ok(!piece_is_in_check(board, &self.royal_piece, color)?)
    }
}
