// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scenario tests driving the controller over the real rules engine.

use rookery_core::controller::{ClickOutcome, GameController};
use rookery_core::rules::{RulesProvider, ShakmatyRules};
use rookery_core::{GameStatus, PieceColor, PieceKind, SquareCoord, BOARD_SIZE};

fn sq(name: &str) -> SquareCoord {
    name.parse().expect("test square")
}

fn click(ctrl: &mut GameController<ShakmatyRules>, name: &str) -> ClickOutcome {
    ctrl.handle_square_click(sq(name)).expect("legal click")
}

#[test]
fn pawn_has_single_and_double_push_from_start() {
    let rules = ShakmatyRules::new();
    let mut targets = rules.legal_targets(sq("e2"));
    targets.sort_by_key(|s| (s.rank, s.file));
    assert_eq!(targets, vec![sq("e3"), sq("e4")]);
}

#[test]
fn e2_then_e4_moves_the_pawn_and_flips_the_turn() {
    let mut ctrl = GameController::new(ShakmatyRules::new());
    assert_eq!(click(&mut ctrl, "e2"), ClickOutcome::Selected);
    assert_eq!(click(&mut ctrl, "e4"), ClickOutcome::Moved);

    assert_eq!(ctrl.piece_at(sq("e2")), None);
    let pawn = ctrl.piece_at(sq("e4")).expect("pawn arrived");
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert_eq!(pawn.color, PieceColor::White);
    assert_eq!(ctrl.side_to_move(), PieceColor::Black);
    assert_eq!(ctrl.status(), GameStatus::Ongoing);
    assert_eq!(ctrl.selection(), None);
}

#[test]
fn opponent_piece_cannot_be_selected() {
    let mut ctrl = GameController::new(ShakmatyRules::new());
    assert_eq!(click(&mut ctrl, "e7"), ClickOutcome::Ignored);
    assert_eq!(ctrl.selection(), None);
}

#[test]
fn fools_mate_reaches_checkmate_with_no_targets_left() {
    let mut ctrl = GameController::new(ShakmatyRules::new());
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        assert_eq!(click(&mut ctrl, from), ClickOutcome::Selected);
        assert_eq!(click(&mut ctrl, to), ClickOutcome::Moved);
    }
    assert_eq!(ctrl.status(), GameStatus::Checkmate);
    assert_eq!(ctrl.side_to_move(), PieceColor::White);

    // The mated side never gets legal targets again
    for file in 0..BOARD_SIZE {
        for rank in 0..BOARD_SIZE {
            let square = SquareCoord::new(file, rank);
            if ctrl
                .piece_at(square)
                .is_some_and(|p| p.color == PieceColor::White)
            {
                assert!(
                    ctrl.rules().legal_targets(square).is_empty(),
                    "{square} still has targets after mate"
                );
            }
        }
    }
}

#[test]
fn check_is_reported_between_moves() {
    let rules = ShakmatyRules::from_fen("4k3/8/8/8/8/8/4R3/4K3 b - - 0 1").unwrap();
    assert_eq!(rules.status(), GameStatus::Check);
}

#[test]
fn stalemate_is_reported() {
    let rules = ShakmatyRules::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(rules.status(), GameStatus::Stalemate);
}

#[test]
fn pawn_auto_promotes_to_queen() {
    let rules = ShakmatyRules::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mut ctrl = GameController::new(rules);

    assert_eq!(click(&mut ctrl, "a7"), ClickOutcome::Selected);
    // All four promotion moves collapse into one clickable destination
    assert_eq!(
        ctrl.legal_targets()
            .iter()
            .filter(|&&t| t == sq("a8"))
            .count(),
        1
    );
    assert_eq!(click(&mut ctrl, "a8"), ClickOutcome::Moved);

    let promoted = ctrl.piece_at(sq("a8")).expect("promoted piece");
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.color, PieceColor::White);
}

#[test]
fn castling_is_played_by_clicking_the_king_destination() {
    let rules = ShakmatyRules::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mut ctrl = GameController::new(rules);

    assert_eq!(click(&mut ctrl, "e1"), ClickOutcome::Selected);
    assert!(ctrl.is_target(sq("g1")), "kingside castle not offered");
    assert!(ctrl.is_target(sq("c1")), "queenside castle not offered");

    assert_eq!(click(&mut ctrl, "g1"), ClickOutcome::Moved);
    assert_eq!(ctrl.piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(ctrl.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(ctrl.piece_at(sq("e1")), None);
    assert_eq!(ctrl.piece_at(sq("h1")), None);
}

#[test]
fn en_passant_capture_is_offered_and_applied() {
    let rules = ShakmatyRules::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mut ctrl = GameController::new(rules);

    assert_eq!(click(&mut ctrl, "e5"), ClickOutcome::Selected);
    assert!(ctrl.is_target(sq("d6")), "en passant not offered");

    assert_eq!(click(&mut ctrl, "d6"), ClickOutcome::Moved);
    assert_eq!(ctrl.piece_at(sq("d6")).map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(ctrl.piece_at(sq("d5")), None, "captured pawn still present");
}

#[test]
fn selection_in_terminal_position_yields_no_targets() {
    // Mated side may still click its pieces; no targets are produced.
    let rules =
        ShakmatyRules::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    let mut ctrl = GameController::new(rules);
    assert_eq!(ctrl.status(), GameStatus::Checkmate);

    assert_eq!(click(&mut ctrl, "e1"), ClickOutcome::Selected);
    assert!(ctrl.legal_targets().is_empty());
}
