use std::fmt;

use common::coordinate::Position;

use crate::board::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveKind {
    Standard,
    Jump,
    Promotion,
    Castle,
}

/// The paired relocation a castle-type move carries along.
#[derive(Clone, PartialEq, Debug)]
pub struct CastlePartner {
    pub piece_name: String,
    pub origin: Position,
    pub destination: Position,
}

/// The result of successfully resolving a move. Mutating the board and
/// answering "what was the previous move" (en passant eligibility) both read
/// from this record.
#[derive(Clone, PartialEq, Debug)]
pub struct MoveRecord {
    /// The configured move's name, e.g. "double_advance".
    pub name: String,
    pub kind: MoveKind,
    pub piece_name: String,
    pub color: Color,
    pub origin: Position,
    pub destination: Position,
    /// Where the captured piece actually stood. Differs from `destination`
    /// for en-passant-style captures; `None` when nothing was captured.
    pub capture_at: Option<Position>,
    /// Replacement piece name chosen for a promotion.
    pub promoted_to: Option<String>,
    pub castle: Option<CastlePartner>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.color, self.piece_name, self.origin, self.destination
        )?;
        if let Some(capture_at) = self.capture_at {
            write!(f, " capturing at {}", capture_at)?;
        }
        if let Some(promoted_to) = &self.promoted_to {
            write!(f, " promoting to {}", promoted_to)?;
        }
        if let Some(castle) = &self.castle {
            write!(
                f,
                " with {} {} {}",
                castle.piece_name, castle.origin, castle.destination
            )?;
        }
        Ok(())
    }
}
