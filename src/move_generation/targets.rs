use common::coordinate::Position;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::RectangularBoard;
use crate::chess_move::{CastlePartner, MoveKind};
use crate::game::GameError;
use crate::rules::move_definition::{
    CapturePolicy, CastleMove, CastleRoute, JumpMove, MoveDefinition, Offset, PromotionMove,
};

use super::conditions::{conditions_met, EvaluationMode};

/// One concrete move the interpreter offers for a piece.
#[derive(Clone, PartialEq, Debug)]
pub struct CandidateMove {
    /// The configured move's name, carried into the move record.
    pub name: String,
    pub kind: MoveKind,
    pub origin: Position,
    pub destination: Position,
    /// Square the capture is credited to: the destination for ordinary
    /// captures, elsewhere for en-passant-style ones, `None` for quiet moves.
    pub capture_at: Option<Position>,
    /// `Some` when the destination is a promotion trigger; the caller must
    /// choose one of these replacement piece names.
    pub promotion_targets: Option<Vec<String>>,
    pub castle: Option<CastlePartner>,
}

impl CandidateMove {
    pub fn is_capture(&self) -> bool {
        self.capture_at.is_some()
    }
}

/// The interpreter's output aggregate for one piece: every candidate move,
/// plus the squares the piece threatens. The two differ: a pawn's forward
/// push is a candidate but threatens nothing, while its diagonal attack
/// squares are threatened even when empty.
#[derive(Default, Debug)]
pub struct GeneratedMoves {
    pub candidates: Vec<CandidateMove>,
    pub threatened: FxHashSet<Position>,
}

impl GeneratedMoves {
    /// Legal non-capture destinations.
    pub fn destinations(&self) -> Vec<Position> {
        self.candidates
            .iter()
            .filter(|c| !c.is_capture())
            .map(|c| c.destination)
            .collect()
    }

    /// Legal capture destinations.
    pub fn capture_destinations(&self) -> Vec<Position> {
        self.candidates
            .iter()
            .filter(|c| c.is_capture())
            .map(|c| c.destination)
            .collect()
    }

    /// Castle-type special move descriptors.
    pub fn castles(&self) -> Vec<&CandidateMove> {
        self.candidates
            .iter()
            .filter(|c| c.castle.is_some())
            .collect()
    }

    pub fn candidate_to(&self, destination: Position) -> Option<&CandidateMove> {
        self.candidates.iter().find(|c| c.destination == destination)
    }
}

/// Interprets the declarative move list of the piece standing on `origin`
/// against the current board and the previous move record. Produces raw
/// candidates; king-safety filtering happens in [`super::legal_moves`].
pub fn generate_moves(
    board: &RectangularBoard,
    origin: Position,
    previous: Option<&crate::chess_move::MoveRecord>,
) -> Result<GeneratedMoves, GameError> {
    generate(board, origin, previous, EvaluationMode::Moves)
}

/// Generation as seen by the check and threat detectors. Safety
/// preconditions are irrelevant to whether a piece attacks a square, and
/// evaluating them from inside the threat scan would recurse back into it,
/// so every condition runs in threat mode here. Castle-type moves never
/// capture and never threaten a square; they are skipped outright.
pub(super) fn generate_attack_moves(
    board: &RectangularBoard,
    origin: Position,
) -> Result<GeneratedMoves, GameError> {
    generate(board, origin, None, EvaluationMode::Threats)
}

fn generate(
    board: &RectangularBoard,
    origin: Position,
    previous: Option<&crate::chess_move::MoveRecord>,
    mode: EvaluationMode,
) -> Result<GeneratedMoves, GameError> {
    let piece = board
        .piece_at(origin)
        .ok_or(BoardError::EmptyOriginSpace { origin })?;
    let mut generated = GeneratedMoves::default();

    for definition in piece.moves() {
        match definition {
            MoveDefinition::Standard(standard) => {
                let profile = SlideProfile {
                    name: &standard.name,
                    kind: MoveKind::Standard,
                    directions: &standard.directions,
                    min_spaces: standard.min_spaces,
                    max_spaces: standard.max_spaces,
                    capture: standard.capture,
                    capture_at: standard.capture_at,
                    promotion: None,
                };
                let gates =
                    Gates::evaluate(&standard.conditions, board, piece, origin, previous, mode)?;
                walk_targets(board, piece, origin, &profile, gates, &mut generated);
            }
            MoveDefinition::Promotion(promotion) => {
                let profile = SlideProfile {
                    name: &promotion.name,
                    kind: MoveKind::Promotion,
                    directions: &promotion.directions,
                    min_spaces: promotion.min_spaces,
                    max_spaces: promotion.max_spaces,
                    capture: promotion.capture,
                    capture_at: None,
                    promotion: Some(promotion),
                };
                let gates =
                    Gates::evaluate(&promotion.conditions, board, piece, origin, previous, mode)?;
                walk_targets(board, piece, origin, &profile, gates, &mut generated);
            }
            MoveDefinition::Jump(jump) => {
                let gates = Gates::evaluate(&jump.conditions, board, piece, origin, previous, mode)?;
                jump_targets(board, piece, origin, jump, gates, &mut generated);
            }
            MoveDefinition::Castle(castle) => {
                if mode == EvaluationMode::Moves {
                    castle_targets(board, piece, origin, castle, previous, &mut generated)?;
                }
            }
        }
    }

    Ok(generated)
}

/// Whether a definition may currently offer moves, and whether it counts
/// toward the threatened-square map. The moves gate follows the caller's
/// evaluation mode: attack-map generation evaluates it in threat mode too,
/// since safety preconditions never change what a piece attacks and must
/// not recurse into the threat detector itself.
#[derive(Clone, Copy)]
struct Gates {
    moves: bool,
    threats: bool,
}

impl Gates {
    fn evaluate(
        conditions: &[crate::rules::condition::MoveCondition],
        board: &RectangularBoard,
        piece: &Piece,
        origin: Position,
        previous: Option<&crate::chess_move::MoveRecord>,
        mode: EvaluationMode,
    ) -> Result<Self, GameError> {
        Ok(Self {
            moves: conditions_met(conditions, board, piece, origin, previous, mode)?,
            threats: conditions_met(
                conditions,
                board,
                piece,
                origin,
                previous,
                EvaluationMode::Threats,
            )?,
        })
    }
}

struct SlideProfile<'a> {
    name: &'a str,
    kind: MoveKind,
    directions: &'a [Offset],
    min_spaces: usize,
    max_spaces: Option<usize>,
    capture: CapturePolicy,
    capture_at: Option<Offset>,
    promotion: Option<&'a PromotionMove>,
}

fn walk_targets(
    board: &RectangularBoard,
    piece: &Piece,
    origin: Position,
    profile: &SlideProfile<'_>,
    gates: Gates,
    generated: &mut GeneratedMoves,
) {
    if !gates.moves && !gates.threats {
        return;
    }
    let color = piece.color();
    for direction in profile.directions {
        let step = direction.oriented(color);
        let mut current = origin;
        let mut distance: usize = 0;
        loop {
            distance += 1;
            if let Some(max) = profile.max_spaces {
                if distance > max {
                    break;
                }
            }
            current = match current.offset(step.file, step.rank) {
                Some(next) if board.in_bounds(next) => next,
                _ => break,
            };
            let reached_min = distance >= profile.min_spaces;
            match board.piece_at(current) {
                None => {
                    if reached_min {
                        // an empty square capture-capable moves could land on
                        // still bars the enemy king from it
                        if gates.threats && profile.capture != CapturePolicy::Forbidden {
                            generated.threatened.insert(current);
                        }
                        if gates.moves {
                            push_empty_destination(board, piece, origin, current, profile, generated);
                        }
                    }
                }
                Some(occupant) => {
                    // occupied spaces block further travel regardless of owner
                    if reached_min && profile.capture != CapturePolicy::Forbidden {
                        if gates.threats {
                            generated.threatened.insert(current);
                        }
                        if gates.moves && occupant.color() != color {
                            push_candidate(profile, origin, current, Some(current), generated);
                        }
                    }
                    break;
                }
            }
        }
    }
}

fn push_empty_destination(
    board: &RectangularBoard,
    piece: &Piece,
    origin: Position,
    destination: Position,
    profile: &SlideProfile<'_>,
    generated: &mut GeneratedMoves,
) {
    // alternate capture square: the removed piece stands beside the
    // destination rather than on it
    if profile.capture != CapturePolicy::Forbidden {
        if let Some(offset) = profile.capture_at {
            let victim_square = offset
                .from_origin(origin, piece.color())
                .filter(|square| {
                    board
                        .piece_at(*square)
                        .map_or(false, |victim| victim.color() != piece.color())
                });
            if let Some(square) = victim_square {
                push_candidate(profile, origin, destination, Some(square), generated);
                return;
            }
        }
    }
    if profile.capture != CapturePolicy::Required {
        push_candidate(profile, origin, destination, None, generated);
    }
}

fn push_candidate(
    profile: &SlideProfile<'_>,
    origin: Position,
    destination: Position,
    capture_at: Option<Position>,
    generated: &mut GeneratedMoves,
) {
    let promotion_targets = profile.promotion.and_then(|promotion| {
        if promotion.trigger_spaces.contains(&destination) {
            Some(promotion.targets.clone())
        } else {
            None
        }
    });
    generated.candidates.push(CandidateMove {
        name: profile.name.to_string(),
        kind: profile.kind,
        origin,
        destination,
        capture_at,
        promotion_targets,
        castle: None,
    });
}

fn jump_targets(
    board: &RectangularBoard,
    piece: &Piece,
    origin: Position,
    jump: &JumpMove,
    gates: Gates,
    generated: &mut GeneratedMoves,
) {
    if !gates.moves && !gates.threats {
        return;
    }
    let color = piece.color();
    let destinations: SmallVec<[Position; 8]> = jump
        .offsets
        .iter()
        .filter_map(|offset| offset.from_origin(origin, color))
        .filter(|destination| board.in_bounds(*destination))
        .collect();
    for destination in destinations {
        match board.piece_at(destination) {
            None => {
                if gates.threats && jump.capture != CapturePolicy::Forbidden {
                    generated.threatened.insert(destination);
                }
                if gates.moves && jump.capture != CapturePolicy::Required {
                    generated.candidates.push(CandidateMove {
                        name: jump.name.clone(),
                        kind: MoveKind::Jump,
                        origin,
                        destination,
                        capture_at: None,
                        promotion_targets: None,
                        castle: None,
                    });
                }
            }
            Some(occupant) => {
                if jump.capture == CapturePolicy::Forbidden {
                    continue;
                }
                if gates.threats {
                    generated.threatened.insert(destination);
                }
                if gates.moves && occupant.color() != color {
                    generated.candidates.push(CandidateMove {
                        name: jump.name.clone(),
                        kind: MoveKind::Jump,
                        origin,
                        destination,
                        capture_at: Some(destination),
                        promotion_targets: None,
                        castle: None,
                    });
                }
            }
        }
    }
}

fn castle_targets(
    board: &RectangularBoard,
    piece: &Piece,
    origin: Position,
    castle: &CastleMove,
    previous: Option<&crate::chess_move::MoveRecord>,
    generated: &mut GeneratedMoves,
) -> Result<(), GameError> {
    for route in &castle.routes {
        if route.color != piece.color() || route.origin != origin {
            continue;
        }
        let target_present = board.piece_at(route.target_origin).map_or(false, |target| {
            target.name() == route.target_piece && target.color() == piece.color()
        });
        if !target_present {
            continue;
        }
        if !transit_clear(board, route) {
            continue;
        }
        if !conditions_met(
            &route.conditions,
            board,
            piece,
            origin,
            previous,
            EvaluationMode::Moves,
        )? {
            continue;
        }
        generated.candidates.push(CandidateMove {
            name: castle.name.clone(),
            kind: MoveKind::Castle,
            origin,
            destination: route.destination,
            capture_at: None,
            promotion_targets: None,
            castle: Some(CastlePartner {
                piece_name: route.target_piece.clone(),
                origin: route.target_origin,
                destination: route.target_destination,
            }),
        });
    }
    Ok(())
}

// every space strictly between the two origins must be empty, and both
// destinations must hold nothing but the two pieces that are about to vacate
fn transit_clear(board: &RectangularBoard, route: &CastleRoute) -> bool {
    for between in spaces_between(route.origin, route.target_origin) {
        if board.piece_at(between).is_some() {
            return false;
        }
    }
    for destination in &[route.destination, route.target_destination] {
        if *destination == route.origin || *destination == route.target_origin {
            continue;
        }
        if board.piece_at(*destination).is_some() {
            return false;
        }
    }
    true
}

fn spaces_between(a: Position, b: Position) -> Vec<Position> {
    let mut spaces = Vec::new();
    if a.rank() == b.rank() {
        let (low, high) = if a.file() < b.file() {
            (a.file(), b.file())
        } else {
            (b.file(), a.file())
        };
        for file in low + 1..high {
            spaces.push(Position::new(file, a.rank()));
        }
    } else if a.file() == b.file() {
        let (low, high) = if a.rank() < b.rank() {
            (a.rank(), b.rank())
        } else {
            (b.rank(), a.rank())
        };
        for rank in low + 1..high {
            spaces.push(Position::new(a.file(), rank));
        }
    }
    spaces
}
