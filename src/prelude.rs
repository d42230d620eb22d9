pub use crate::board::color::Color;
pub use crate::board::piece::{Piece, PieceSearch};
pub use crate::board::RectangularBoard;
pub use crate::chess_move::{MoveKind, MoveRecord};
pub use crate::game::{Game, GameError, GameStatus};
pub use crate::move_generation::{generate_moves, legal_moves, GeneratedMoves};
pub use crate::rules::GameRules;
pub use common::coordinate::Position;
