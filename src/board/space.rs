use common::coordinate::Position;

use super::piece::Piece;

/// One square of the board: a fixed position and at most one piece.
/// Occupancy is mutated only through the board's placement and raw-move
/// primitives.
#[derive(Clone, Debug)]
pub struct Space {
    position: Position,
    piece: Option<Piece>,
}

impl Space {
    pub(super) fn new(position: Position) -> Self {
        Self {
            position,
            piece: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    pub(super) fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    pub(super) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Places a piece, returning whatever stood here before.
    pub(super) fn put_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }
}
