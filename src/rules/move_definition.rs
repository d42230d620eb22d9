use common::coordinate::Position;

use crate::board::color::Color;

use super::condition::MoveCondition;

/// A relative (file, rank) displacement in the mover's own frame: positive
/// rank is the direction that color considers forward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Offset {
    pub file: i32,
    pub rank: i32,
}

impl Offset {
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub fn oriented(&self, color: Color) -> Self {
        Self {
            file: self.file,
            rank: self.rank * color.orientation(),
        }
    }

    /// Resolves the offset against a board position for the given color.
    /// `None` when it would leave the lower or left edge.
    pub fn from_origin(&self, origin: Position, color: Color) -> Option<Position> {
        let oriented = self.oriented(color);
        origin.offset(oriented.file, oriented.rank)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapturePolicy {
    /// The destination may be empty or hold an enemy piece.
    Allowed,
    /// The move never captures; occupied destinations are off limits.
    Forbidden,
    /// The move exists only as a capture.
    Required,
}

/// The closed set of move shapes the interpreter understands. Adding a new
/// shape means a new variant and a new match arm in the interpreter, never a
/// new inheritance branch.
#[derive(Clone, Debug)]
pub enum MoveDefinition {
    Standard(StandardMove),
    Jump(JumpMove),
    Promotion(PromotionMove),
    Castle(CastleMove),
}

/// Sliding movement: walk each direction up to `max_spaces` (or the board
/// edge when `None`), honoring `min_spaces`; the first occupied space blocks
/// further travel.
#[derive(Clone, Debug)]
pub struct StandardMove {
    pub name: String,
    pub directions: Vec<Offset>,
    pub min_spaces: usize,
    pub max_spaces: Option<usize>,
    pub capture: CapturePolicy,
    /// Credits the capture to a square other than the destination; the piece
    /// standing there is the one removed (en-passant-style captures).
    /// Origin-relative and oriented.
    pub capture_at: Option<Offset>,
    pub conditions: Vec<MoveCondition>,
}

/// Fixed-offset movement: every offset is checked independently, pieces in
/// between do not block.
#[derive(Clone, Debug)]
pub struct JumpMove {
    pub name: String,
    pub offsets: Vec<Offset>,
    pub capture: CapturePolicy,
    pub conditions: Vec<MoveCondition>,
}

/// Standard geometry whose destinations inside `trigger_spaces` additionally
/// require the caller to pick one of `targets` as the replacement piece.
#[derive(Clone, Debug)]
pub struct PromotionMove {
    pub name: String,
    pub directions: Vec<Offset>,
    pub min_spaces: usize,
    pub max_spaces: Option<usize>,
    pub capture: CapturePolicy,
    pub trigger_spaces: Vec<Position>,
    pub targets: Vec<String>,
    pub conditions: Vec<MoveCondition>,
}

/// A fixed origin/destination pair per color, with a named target piece that
/// relocates in lockstep.
#[derive(Clone, Debug)]
pub struct CastleMove {
    pub name: String,
    pub routes: Vec<CastleRoute>,
}

#[derive(Clone, Debug)]
pub struct CastleRoute {
    pub color: Color,
    pub origin: Position,
    pub destination: Position,
    pub target_piece: String,
    pub target_origin: Position,
    pub target_destination: Position,
    pub conditions: Vec<MoveCondition>,
}
