use common::coordinate::Position;

use super::move_definition::Offset;

/// Preconditions gating whether a configured move is currently offered.
/// Each is evaluated through one uniform predicate over (board, piece,
/// origin, previous move); new conditions are new variants.
#[derive(Clone, Debug)]
pub enum MoveCondition {
    /// The acting piece has never moved.
    FirstMove,
    /// A named friendly piece stands unmoved on a specific board position.
    OtherPieceUnmoved {
        piece_name: String,
        position: Position,
    },
    /// The immediately preceding move matches this pattern. `location` is an
    /// origin-relative, oriented offset compared against the previous move's
    /// destination. Absent fields match anything; with no previous move the
    /// condition fails.
    PreviousMove {
        move_name: Option<String>,
        piece_name: Option<String>,
        location: Option<Offset>,
    },
    /// None of these origin-relative, oriented squares is currently
    /// threatened by an opposing piece.
    SpacesNotThreatened { spaces: Vec<Offset> },
}
