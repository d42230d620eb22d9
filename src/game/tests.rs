use common::coordinate::Position;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::chess_move::MoveKind;
use crate::rules::classic;
use crate::rules::piece_rules::Placement;
use crate::rules::GameRules;
use crate::test_helpers::{at, init_test_logger};

use super::end_conditions::WinCondition;
use super::{Game, GameError, GameStatus};

/// Classic rules with the starting positions replaced wholesale.
fn with_placements(placements: &[(&str, Color, &str)]) -> GameRules {
    let mut rules = classic::classic();
    for piece in &mut rules.pieces {
        piece.starting_positions = placements
            .iter()
            .filter(|(name, _, _)| *name == piece.name)
            .map(|(_, color, square)| Placement {
                color: *color,
                position: at(square),
            })
            .collect();
    }
    rules
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for (origin, destination) in moves {
        game.make_move(at(origin), at(destination), None)
            .unwrap_or_else(|err| panic!("{} -> {} rejected: {}", origin, destination, err));
    }
}

#[test]
fn test_new_game_state() {
    let game = Game::new(classic::classic()).unwrap();
    assert_eq!(Color::White, game.current_player());
    assert_eq!(GameStatus::InProgress, game.status());
    assert_eq!(32, game.board().occupied_spaces().len());
    assert!(game.history().is_empty());
    assert!(game.last_move().is_none());
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new(classic::classic()).unwrap();
    assert_eq!(
        Err(GameError::NotYourTurn { color: Color::Black }),
        game.make_move(at("e7"), at("e5"), None)
    );
    game.make_move(at("e2"), at("e4"), None).unwrap();
    assert_eq!(Color::Black, game.current_player());
    assert_eq!(
        Err(GameError::NotYourTurn { color: Color::White }),
        game.make_move(at("d2"), at("d4"), None)
    );
}

#[test]
fn test_accepted_move_is_recorded() {
    let mut game = Game::new(classic::classic()).unwrap();
    let record = game.make_move(at("e2"), at("e4"), None).unwrap();
    assert_eq!("double_advance", record.name);
    assert_eq!("pawn", record.piece_name);
    assert_eq!(None, record.capture_at);
    assert_eq!(1, game.history().len());
    assert_eq!(Some(&record), game.last_move());
    assert_eq!(1, game.board().piece_at(at("e4")).unwrap().move_count());
}

#[test]
fn test_unreachable_destination_is_rejected() {
    let mut game = Game::new(classic::classic()).unwrap();
    assert_eq!(
        Err(GameError::InvalidMove {
            origin: at("e2"),
            destination: at("e5")
        }),
        game.make_move(at("e2"), at("e5"), None)
    );
    assert!(game.board().piece_at(at("e2")).is_some());
    assert!(game.history().is_empty());
}

#[test]
fn test_empty_origin_is_rejected() {
    let mut game = Game::new(classic::classic()).unwrap();
    assert_eq!(
        Err(GameError::Board(BoardError::EmptyOriginSpace {
            origin: at("d4")
        })),
        game.make_move(at("d4"), at("d5"), None)
    );
}

#[test]
fn test_move_exposing_own_king_is_rejected() {
    let mut game = Game::new(with_placements(&[
        ("king", Color::White, "e1"),
        ("rook", Color::White, "e4"),
        ("rook", Color::Black, "e8"),
        ("king", Color::Black, "h8"),
    ]))
    .unwrap();
    assert_eq!(
        Err(GameError::InvalidMove {
            origin: at("e4"),
            destination: at("a4")
        }),
        game.make_move(at("e4"), at("a4"), None)
    );
    // the rejection happens before any board mutation
    assert_eq!("rook", game.board().piece_at(at("e4")).unwrap().name());
    assert_eq!(Color::White, game.current_player());
    assert!(game.history().is_empty());
}

#[test]
fn test_rook_skirmish_to_total_capture() {
    init_test_logger();
    let mut rules = with_placements(&[
        ("rook", Color::White, "a1"),
        ("rook", Color::White, "h1"),
        ("rook", Color::Black, "a8"),
        ("rook", Color::Black, "h8"),
    ]);
    rules.pieces.retain(|piece| piece.name == "rook");
    rules.win_conditions = vec![WinCondition::AllPiecesCaptured];
    rules.draw_conditions = Vec::new();
    let mut game = Game::new(rules).unwrap();

    let capture = game.make_move(at("a1"), at("a8"), None).unwrap();
    assert_eq!(Some(at("a8")), capture.capture_at);
    play(&mut game, &[("h8", "h5")]);
    let capture = game.make_move(at("h1"), at("h5"), None).unwrap();
    assert_eq!(Some(at("h5")), capture.capture_at);

    let survivors = game.board().occupied_spaces();
    assert_eq!(2, survivors.len());
    for space in &survivors {
        let piece = space.piece().unwrap();
        assert_eq!("rook", piece.name());
        assert_eq!(Color::White, piece.color());
    }
    assert!(game.board().piece_at(at("a8")).is_some());
    assert!(game.board().piece_at(at("h5")).is_some());
    assert_eq!(
        GameStatus::Won {
            winner: Color::White
        },
        game.status()
    );
}

#[test]
fn test_en_passant_over_the_board() {
    let mut game = Game::new(classic::classic()).unwrap();
    play(
        &mut game,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    let record = game.make_move(at("e5"), at("d6"), None).unwrap();
    assert_eq!("en_passant", record.name);
    assert_eq!(Some(at("d5")), record.capture_at);
    assert!(game.board().piece_at(at("d5")).is_none());
    let pawn = game.board().piece_at(at("d6")).unwrap();
    assert_eq!("pawn", pawn.name());
    assert_eq!(Color::White, pawn.color());
}

#[test]
fn test_en_passant_expires_after_one_turn() {
    let mut game = Game::new(classic::classic()).unwrap();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("d7", "d5"),
            ("e4", "e5"),
            ("a7", "a6"),
        ],
    );
    // the double advance is two moves old by now
    assert!(matches!(
        game.make_move(at("e5"), at("d6"), None),
        Err(GameError::InvalidMove { .. })
    ));
}

#[test]
fn test_castling_over_the_board() {
    let mut game = Game::new(classic::classic()).unwrap();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
        ],
    );
    let record = game.make_move(at("e1"), at("g1"), None).unwrap();
    assert_eq!(MoveKind::Castle, record.kind);
    let partner = record.castle.as_ref().unwrap();
    assert_eq!(at("h1"), partner.origin);
    assert_eq!(at("f1"), partner.destination);

    let king = game.board().piece_at(at("g1")).unwrap();
    assert_eq!("king", king.name());
    assert_eq!(1, king.move_count());
    let rook = game.board().piece_at(at("f1")).unwrap();
    assert_eq!("rook", rook.name());
    assert_eq!(1, rook.move_count());
    assert!(game.board().piece_at(at("e1")).is_none());
    assert!(game.board().piece_at(at("h1")).is_none());
}

#[test]
fn test_fools_mate_is_checkmate() {
    init_test_logger();
    let mut game = Game::new(classic::classic()).unwrap();
    play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert_eq!(
        GameStatus::Won {
            winner: Color::Black
        },
        game.status()
    );
    assert_eq!(
        Err(GameError::GameOver),
        game.make_move(at("e2"), at("e4"), None)
    );
}

#[test]
fn test_stalemate_is_a_draw() {
    let mut game = Game::new(with_placements(&[
        ("king", Color::White, "b6"),
        ("queen", Color::White, "h7"),
        ("king", Color::Black, "a8"),
    ]))
    .unwrap();
    game.make_move(at("h7"), at("c7"), None).unwrap();
    // the cornered king is not in check but has nowhere left to go
    assert_eq!(GameStatus::Drawn, game.status());
}

#[test]
fn test_promotion_demands_a_choice() {
    let mut game = Game::new(with_placements(&[
        ("pawn", Color::White, "g7"),
        ("king", Color::White, "e1"),
        ("king", Color::Black, "a5"),
    ]))
    .unwrap();

    assert_eq!(
        Err(GameError::PromotionChoiceRequired {
            destination: at("g8")
        }),
        game.make_move(at("g7"), at("g8"), None)
    );
    assert_eq!(
        Err(GameError::InvalidPromotionTarget {
            name: "king".to_string()
        }),
        game.make_move(at("g7"), at("g8"), Some("king"))
    );
    // the rejections leave the pawn in place with white to move
    assert_eq!("pawn", game.board().piece_at(at("g7")).unwrap().name());
    assert_eq!(Color::White, game.current_player());

    let record = game.make_move(at("g7"), at("g8"), Some("queen")).unwrap();
    assert_eq!(Some("queen".to_string()), record.promoted_to);
    let queen = game.board().piece_at(at("g8")).unwrap();
    assert_eq!("queen", queen.name());
    assert_eq!(Color::White, queen.color());
    // the replacement starts a fresh history of its own
    assert_eq!(0, queen.move_count());
}

#[test]
fn test_promotion_choice_on_an_ordinary_move_is_rejected() {
    let mut game = Game::new(classic::classic()).unwrap();
    assert_eq!(
        Err(GameError::InvalidPromotionTarget {
            name: "queen".to_string()
        }),
        game.make_move(at("e2"), at("e4"), Some("queen"))
    );
}

#[test]
fn test_resignation_ends_the_game() {
    let mut game = Game::new(classic::classic()).unwrap();
    assert_eq!(
        GameStatus::Won {
            winner: Color::Black
        },
        game.resign(Color::White).unwrap()
    );
    assert_eq!(
        Err(GameError::GameOver),
        game.make_move(at("e2"), at("e4"), None)
    );
    assert_eq!(Err(GameError::GameOver), game.resign(Color::Black));
}

#[test]
fn test_legal_moves_from_any_square() {
    let game = Game::new(classic::classic()).unwrap();
    let knight_moves = game.legal_moves_from(at("b1")).unwrap();
    let mut destinations: Vec<Position> = knight_moves
        .candidates
        .iter()
        .map(|c| c.destination)
        .collect();
    destinations.sort();
    let mut expected = vec![at("c3"), at("a3")];
    expected.sort();
    assert_eq!(expected, destinations);
}
