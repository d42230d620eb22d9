use thiserror::Error;

use common::coordinate::{CoordinateError, Position, MAX_BOARD_EXTENT};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error(
        "board dimensions must be positive and at most {}, got {width}x{height}",
        MAX_BOARD_EXTENT
    )]
    InvalidDimensions { width: usize, height: usize },
    #[error("cannot place a piece on {position}, the space is already occupied")]
    SpaceOccupied { position: Position },
    #[error("position {position} is outside the {width}x{height} board")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("cannot move from {origin}, the space is empty")]
    EmptyOriginSpace { origin: Position },
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}
