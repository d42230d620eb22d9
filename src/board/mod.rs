pub mod color;
pub mod error;
pub mod piece;
pub mod space;

mod display;


use common::coordinate::{Position, MAX_BOARD_EXTENT};
use log::debug;

use crate::game::GameError;
use crate::move_generation::check::StateVerifier;

use self::error::BoardError;
use self::piece::{Piece, PieceSearch};
use self::space::Space;

/// A fixed-size rectangular grid of spaces. The board owns piece occupancy
/// and the raw movement primitive; everything rule-shaped (legality, move
/// counters, turn order) belongs to the layers above.
#[derive(Debug)]
pub struct RectangularBoard {
    width: usize,
    height: usize,
    spaces: Vec<Space>,
    verifiers: Vec<StateVerifier>,
}

impl RectangularBoard {
    /// Builds a board and applies the initial placements through the same
    /// validation used during play.
    pub fn new(
        width: usize,
        height: usize,
        placements: Vec<(Piece, Position)>,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width > MAX_BOARD_EXTENT || height > MAX_BOARD_EXTENT {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let mut spaces = Vec::with_capacity(width * height);
        for rank in 0..height {
            for file in 0..width {
                spaces.push(Space::new(Position::new(file, rank)));
            }
        }
        let mut board = Self {
            width,
            height,
            spaces,
            verifiers: Vec::new(),
        };
        for (piece, position) in placements {
            board.put_piece(piece, position)?;
        }
        Ok(board)
    }

    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::new(width, height, Vec::new())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.file() < self.width && position.rank() < self.height
    }

    fn checked_index(&self, position: Position) -> Result<usize, BoardError> {
        if !self.in_bounds(position) {
            return Err(BoardError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.rank() * self.width + position.file())
    }

    /// Space lookup by raw zero-based indices.
    pub fn space(&self, position: Position) -> Result<&Space, BoardError> {
        let index = self.checked_index(position)?;
        Ok(&self.spaces[index])
    }

    /// Space lookup by human coordinates such as "h5" or "aa12".
    pub fn space_at_notation(&self, notation: &str) -> Result<&Space, BoardError> {
        let position = Position::from_notation(notation)?;
        self.space(position)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        if !self.in_bounds(position) {
            return None;
        }
        self.spaces[position.rank() * self.width + position.file()].piece()
    }

    pub(crate) fn piece_at_mut(&mut self, position: Position) -> Option<&mut Piece> {
        if !self.in_bounds(position) {
            return None;
        }
        self.spaces[position.rank() * self.width + position.file()].piece_mut()
    }

    /// All occupied spaces matching the filter.
    pub fn piece_spaces(&self, search: &PieceSearch) -> Vec<&Space> {
        self.spaces
            .iter()
            .filter(|space| space.piece().map_or(false, |piece| search.matches(piece)))
            .collect()
    }

    pub fn occupied_spaces(&self) -> Vec<&Space> {
        self.piece_spaces(&PieceSearch::any())
    }

    pub fn put_piece(&mut self, piece: Piece, position: Position) -> Result<(), BoardError> {
        let index = self.checked_index(position)?;
        if self.spaces[index].is_occupied() {
            return Err(BoardError::SpaceOccupied { position });
        }
        self.spaces[index].put_piece(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, position: Position) -> Result<Option<Piece>, BoardError> {
        let index = self.checked_index(position)?;
        Ok(self.spaces[index].take_piece())
    }

    /// Unconditional relocation: moves whatever stands on `origin` onto
    /// `destination`, silently capturing any occupant, and returns the
    /// captured piece. Performs no legality checks and leaves move counters
    /// untouched; both are the caller's responsibility.
    pub fn move_piece(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> Result<Option<Piece>, BoardError> {
        let origin_index = self.checked_index(origin)?;
        let destination_index = self.checked_index(destination)?;
        let piece = self.spaces[origin_index]
            .take_piece()
            .ok_or(BoardError::EmptyOriginSpace { origin })?;
        Ok(self.spaces[destination_index].put_piece(piece))
    }

    pub fn register_verifier(&mut self, verifier: StateVerifier) {
        self.verifiers.push(verifier);
    }

    pub fn verifiers(&self) -> &[StateVerifier] {
        &self.verifiers
    }

    /// An independent board of identical configuration whose occupancy
    /// mirrors the live occupied spaces; the placements re-run the normal
    /// construction path. Registered verifiers carry over.
    pub fn duplicate(&self) -> Result<Self, BoardError> {
        let placements = self
            .spaces
            .iter()
            .filter_map(|space| space.piece().cloned().map(|piece| (piece, space.position())))
            .collect();
        let mut board = Self::new(self.width, self.height, placements)?;
        board.verifiers = self.verifiers.clone();
        Ok(board)
    }

    /// Speculatively applies the raw move on a duplicate and asks every
    /// registered verifier whether the resulting board is legal for the
    /// mover's color. With no verifiers registered this is unconditionally
    /// true (no-check variants).
    pub fn verify_move_position_valid(
        &self,
        origin: Position,
        destination: Position,
    ) -> Result<bool, GameError> {
        let mover_color = self
            .piece_at(origin)
            .ok_or(BoardError::EmptyOriginSpace { origin })?
            .color();
        let mut speculative = self.duplicate()?;
        speculative.move_piece(origin, destination)?;
        for verifier in &self.verifiers {
            if !verifier.verify(&speculative, mover_color)? {
                debug!(
                    "rejecting {} -> {}: verifier {:?} failed for {}",
                    origin, destination, verifier, mover_color
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}
