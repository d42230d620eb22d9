use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::coordinate::file_letter::{
    file_letter_to_index, index_to_file_letter, CoordinateError,
};

static NOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-z]{1,2})([0-9]+)$").unwrap());

/// A space address in zero-based internal form. The human-facing form is
/// file letter plus one-based rank number ("a1", "aa12"). Bounds against a
/// particular board are the board's concern, not the position's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Position {
    file: usize,
    rank: usize,
}

impl Position {
    pub fn new(file: usize, rank: usize) -> Self {
        Self { file, rank }
    }

    /// Builds a position from human coordinates: file letters and a
    /// one-based rank number.
    pub fn from_coordinates(file_letter: &str, rank: usize) -> Result<Self, CoordinateError> {
        if rank == 0 {
            return Err(CoordinateError::InvalidRankNumber {
                rank: rank.to_string(),
            });
        }
        Ok(Self {
            file: file_letter_to_index(file_letter)?,
            rank: rank - 1,
        })
    }

    /// Parses combined notation such as "h5" or "aa12".
    pub fn from_notation(notation: &str) -> Result<Self, CoordinateError> {
        let caps = NOTATION_RE
            .captures(notation)
            .ok_or_else(|| CoordinateError::MalformedNotation {
                notation: notation.to_string(),
            })?;
        let rank: usize = caps[2]
            .parse()
            .map_err(|_| CoordinateError::InvalidRankNumber {
                rank: caps[2].to_string(),
            })?;
        Self::from_coordinates(&caps[1], rank)
    }

    pub fn file(&self) -> usize {
        self.file
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Human-facing notation. Fails only if the file index exceeds the
    /// supported board extent.
    pub fn notation(&self) -> Result<String, CoordinateError> {
        Ok(format!("{}{}", index_to_file_letter(self.file)?, self.rank + 1))
    }

    /// The position displaced by a relative (file, rank) offset, or `None`
    /// when the offset would leave the lower or left board edge.
    pub fn offset(&self, file: i32, rank: i32) -> Option<Self> {
        let file = checked_add(self.file, file)?;
        let rank = checked_add(self.rank, rank)?;
        Some(Self { file, rank })
    }
}

fn checked_add(base: usize, delta: i32) -> Option<usize> {
    if delta.is_negative() {
        base.checked_sub(delta.unsigned_abs() as usize)
    } else {
        base.checked_add(delta as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation() {
            Ok(notation) => write!(f, "{}", notation),
            Err(_) => write!(f, "(file {}, rank {})", self.file, self.rank),
        }
    }
}
