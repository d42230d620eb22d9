pub mod end_conditions;
pub mod game;

#[cfg(test)]
mod tests;

pub use self::game::{Game, GameError, GameStatus};
