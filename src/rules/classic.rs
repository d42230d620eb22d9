//! Standard chess expressed entirely as configuration. Doubles as the
//! reference for writing variants: every move shape and condition the
//! interpreter understands appears here at least once.

use common::coordinate::Position;

use crate::board::color::Color;
use crate::game::end_conditions::{DrawCondition, WinCondition};

use super::condition::MoveCondition;
use super::move_definition::{
    CapturePolicy, CastleMove, CastleRoute, JumpMove, MoveDefinition, Offset, PromotionMove,
    StandardMove,
};
use super::piece_rules::{DisplayCharacters, PieceRules, Placement};
use super::{BoardDimensions, GameRules, Player};

const PROMOTION_TARGETS: [&str; 4] = ["queen", "rook", "bishop", "knight"];

fn at(notation: &str) -> Position {
    Position::from_notation(notation).expect("classic preset square literals are valid")
}

fn rank_placements(rank_white: usize, rank_black: usize, files: &[usize]) -> Vec<Placement> {
    let mut placements = Vec::new();
    for &file in files {
        placements.push(Placement {
            color: Color::White,
            position: Position::new(file, rank_white),
        });
        placements.push(Placement {
            color: Color::Black,
            position: Position::new(file, rank_black),
        });
    }
    placements
}

fn slider(name: &str, directions: Vec<Offset>) -> MoveDefinition {
    MoveDefinition::Standard(StandardMove {
        name: name.to_string(),
        directions,
        min_spaces: 1,
        max_spaces: None,
        capture: CapturePolicy::Allowed,
        capture_at: None,
        conditions: Vec::new(),
    })
}

fn orthogonals() -> Vec<Offset> {
    vec![
        Offset::new(1, 0),
        Offset::new(-1, 0),
        Offset::new(0, 1),
        Offset::new(0, -1),
    ]
}

fn diagonals() -> Vec<Offset> {
    vec![
        Offset::new(1, 1),
        Offset::new(1, -1),
        Offset::new(-1, 1),
        Offset::new(-1, -1),
    ]
}

fn promotion_spaces() -> Vec<Position> {
    // both back ranks; a pawn only ever reaches the one ahead of it
    let mut spaces = Vec::new();
    for file in 0..8 {
        spaces.push(Position::new(file, 7));
        spaces.push(Position::new(file, 0));
    }
    spaces
}

fn promotion_target_names() -> Vec<String> {
    PROMOTION_TARGETS.iter().map(|s| s.to_string()).collect()
}

fn en_passant(file_direction: i32) -> MoveDefinition {
    MoveDefinition::Standard(StandardMove {
        name: "en_passant".to_string(),
        directions: vec![Offset::new(file_direction, 1)],
        min_spaces: 1,
        max_spaces: Some(1),
        capture: CapturePolicy::Required,
        capture_at: Some(Offset::new(file_direction, 0)),
        conditions: vec![MoveCondition::PreviousMove {
            move_name: Some("double_advance".to_string()),
            piece_name: Some("pawn".to_string()),
            location: Some(Offset::new(file_direction, 0)),
        }],
    })
}

fn pawn() -> PieceRules {
    PieceRules {
        name: "pawn".to_string(),
        notation: "P".to_string(),
        display: DisplayCharacters {
            white: 'P',
            black: 'p',
        },
        moves: vec![
            MoveDefinition::Promotion(PromotionMove {
                name: "advance".to_string(),
                directions: vec![Offset::new(0, 1)],
                min_spaces: 1,
                max_spaces: Some(1),
                capture: CapturePolicy::Forbidden,
                trigger_spaces: promotion_spaces(),
                targets: promotion_target_names(),
                conditions: Vec::new(),
            }),
            MoveDefinition::Standard(StandardMove {
                name: "double_advance".to_string(),
                directions: vec![Offset::new(0, 1)],
                min_spaces: 2,
                max_spaces: Some(2),
                capture: CapturePolicy::Forbidden,
                capture_at: None,
                conditions: vec![MoveCondition::FirstMove],
            }),
            MoveDefinition::Promotion(PromotionMove {
                name: "capture".to_string(),
                directions: vec![Offset::new(-1, 1), Offset::new(1, 1)],
                min_spaces: 1,
                max_spaces: Some(1),
                capture: CapturePolicy::Required,
                trigger_spaces: promotion_spaces(),
                targets: promotion_target_names(),
                conditions: Vec::new(),
            }),
            en_passant(-1),
            en_passant(1),
        ],
        starting_positions: rank_placements(1, 6, &[0, 1, 2, 3, 4, 5, 6, 7]),
    }
}

fn rook() -> PieceRules {
    PieceRules {
        name: "rook".to_string(),
        notation: "R".to_string(),
        display: DisplayCharacters {
            white: 'R',
            black: 'r',
        },
        moves: vec![slider("slide", orthogonals())],
        starting_positions: rank_placements(0, 7, &[0, 7]),
    }
}

fn knight() -> PieceRules {
    PieceRules {
        name: "knight".to_string(),
        notation: "N".to_string(),
        display: DisplayCharacters {
            white: 'N',
            black: 'n',
        },
        moves: vec![MoveDefinition::Jump(JumpMove {
            name: "jump".to_string(),
            offsets: vec![
                Offset::new(1, 2),
                Offset::new(2, 1),
                Offset::new(2, -1),
                Offset::new(1, -2),
                Offset::new(-1, -2),
                Offset::new(-2, -1),
                Offset::new(-2, 1),
                Offset::new(-1, 2),
            ],
            capture: CapturePolicy::Allowed,
            conditions: Vec::new(),
        })],
        starting_positions: rank_placements(0, 7, &[1, 6]),
    }
}

fn bishop() -> PieceRules {
    PieceRules {
        name: "bishop".to_string(),
        notation: "B".to_string(),
        display: DisplayCharacters {
            white: 'B',
            black: 'b',
        },
        moves: vec![slider("slide", diagonals())],
        starting_positions: rank_placements(0, 7, &[2, 5]),
    }
}

fn queen() -> PieceRules {
    let mut directions = orthogonals();
    directions.extend(diagonals());
    PieceRules {
        name: "queen".to_string(),
        notation: "Q".to_string(),
        display: DisplayCharacters {
            white: 'Q',
            black: 'q',
        },
        moves: vec![slider("slide", directions)],
        starting_positions: rank_placements(0, 7, &[3]),
    }
}

fn castle_route(
    color: Color,
    origin: &str,
    destination: &str,
    rook_origin: &str,
    rook_destination: &str,
    transit: Vec<Offset>,
) -> CastleRoute {
    CastleRoute {
        color,
        origin: at(origin),
        destination: at(destination),
        target_piece: "rook".to_string(),
        target_origin: at(rook_origin),
        target_destination: at(rook_destination),
        conditions: vec![
            MoveCondition::FirstMove,
            MoveCondition::OtherPieceUnmoved {
                piece_name: "rook".to_string(),
                position: at(rook_origin),
            },
            MoveCondition::SpacesNotThreatened { spaces: transit },
        ],
    }
}

fn king() -> PieceRules {
    let mut step_directions = orthogonals();
    step_directions.extend(diagonals());
    let kingside_transit = vec![Offset::new(0, 0), Offset::new(1, 0), Offset::new(2, 0)];
    let queenside_transit = vec![Offset::new(0, 0), Offset::new(-1, 0), Offset::new(-2, 0)];
    PieceRules {
        name: "king".to_string(),
        notation: "K".to_string(),
        display: DisplayCharacters {
            white: 'K',
            black: 'k',
        },
        moves: vec![
            MoveDefinition::Standard(StandardMove {
                name: "step".to_string(),
                directions: step_directions,
                min_spaces: 1,
                max_spaces: Some(1),
                capture: CapturePolicy::Allowed,
                capture_at: None,
                conditions: Vec::new(),
            }),
            MoveDefinition::Castle(CastleMove {
                name: "castle_kingside".to_string(),
                routes: vec![
                    castle_route(Color::White, "e1", "g1", "h1", "f1", kingside_transit.clone()),
                    castle_route(Color::Black, "e8", "g8", "h8", "f8", kingside_transit),
                ],
            }),
            MoveDefinition::Castle(CastleMove {
                name: "castle_queenside".to_string(),
                routes: vec![
                    castle_route(Color::White, "e1", "c1", "a1", "d1", queenside_transit.clone()),
                    castle_route(Color::Black, "e8", "c8", "a8", "d8", queenside_transit),
                ],
            }),
        ],
        starting_positions: rank_placements(0, 7, &[4]),
    }
}

/// Standard 8x8 chess.
pub fn classic() -> GameRules {
    GameRules {
        board: BoardDimensions {
            width: 8,
            height: 8,
        },
        players: vec![
            Player {
                color: Color::White,
                order: 0,
            },
            Player {
                color: Color::Black,
                order: 1,
            },
        ],
        pieces: vec![pawn(), rook(), knight(), bishop(), queen(), king()],
        win_conditions: vec![
            WinCondition::AllPiecesCaptured,
            WinCondition::Checkmate {
                royal_piece: "king".to_string(),
            },
            WinCondition::Resign,
        ],
        draw_conditions: vec![DrawCondition::Stalemate],
    }
}
