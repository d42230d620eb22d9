pub mod board;
pub mod chess_move;
pub mod game;
pub mod move_generation;
pub mod rules;

pub mod prelude;

#[cfg(test)]
pub(crate) mod test_helpers;
