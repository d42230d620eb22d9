pub mod file_letter;
pub mod position;

pub use file_letter::{file_letter_to_index, index_to_file_letter, CoordinateError, MAX_BOARD_EXTENT};
pub use position::Position;
