//! Shared fixtures: pieces and boards built from the classic rules.

use std::sync::Arc;

use common::coordinate::Position;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::RectangularBoard;
use crate::move_generation::check::StateVerifier;
use crate::rules::classic;

/// Routes `log` output through the test harness when RUST_LOG is set.
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn at(notation: &str) -> Position {
    Position::from_notation(notation).unwrap()
}

pub(crate) fn classic_piece(name: &str, color: Color) -> Piece {
    let rules = classic::classic()
        .pieces
        .into_iter()
        .find(|piece| piece.name == name)
        .unwrap_or_else(|| panic!("no classic piece named {:?}", name));
    Piece::new(Arc::new(rules), color)
}

/// An 8x8 board with the given (piece name, color, square) placements.
pub(crate) fn board_with(placements: &[(&str, Color, &str)]) -> RectangularBoard {
    let placements = placements
        .iter()
        .map(|(name, color, square)| (classic_piece(name, *color), at(square)))
        .collect();
    RectangularBoard::new(8, 8, placements).unwrap()
}

/// Same, with a king-safety verifier registered.
pub(crate) fn board_with_royal(placements: &[(&str, Color, &str)]) -> RectangularBoard {
    let mut board = board_with(placements);
    board.register_verifier(StateVerifier::for_royal_piece("king"));
    board
}
