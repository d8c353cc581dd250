use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_initial_position_not_in_check() {
    let pos = GameState::new();
    assert!(!pos.is_in_check(Color::White));
    assert!(!pos.is_in_check(Color::Black));
}

#[test]
fn test_check_by_each_piece_kind() {
    for (attacker, square) in [
        (Type::Queen, "e7"),
        (Type::Rook, "a1"),
        (Type::Bishop, "h4"),
        (Type::Knight, "f3"),
        (Type::Pawn, "d2"),
    ] {
        let mut pos = empty_board();
        place_piece(&mut pos, "e1", Color::White, Type::King);
        place_piece(&mut pos, square, Color::Black, attacker);
        assert!(is_in_check(&pos, Color::White), "{:?} on {} should give check", attacker, square);
    }
}

#[test]
fn test_blocked_slider_gives_no_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);
    place_piece(&mut pos, "e5", Color::Black, Type::Pawn);
    assert!(!pos.is_in_check(Color::White), "Own pawn shields the king");
}

#[test]
fn test_pawn_does_not_check_straight_ahead() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", Color::White, Type::King);
    place_piece(&mut pos, "e5", Color::Black, Type::Pawn);
    assert!(!pos.is_in_check(Color::White));

    // a black pawn behind the king attacks away from it
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", Color::White, Type::King);
    place_piece(&mut pos, "d3", Color::Black, Type::Pawn);
    assert!(!pos.is_in_check(Color::White));
}

#[test]
fn test_discovered_check_after_move() {
    let mut pos = play_line(&["e2e4", "e7e5", "d2d4", "d8h4", "d4e5", "h4e4"]);
    assert!(pos.is_in_check(Color::White), "Queen on e4 checks e1 through the empty e-file");
    let moves = pos.legal_moves();
    assert!(moves.iter().all(|mv| !pos.apply(*mv).is_in_check(Color::White)));
    play(&mut pos, "f1e2");
    assert!(!pos.is_in_check(Color::White));
}

#[test]
fn test_check_restricts_to_evasions() {
    let pos = GameState::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1").unwrap();
    let moves = pos.legal_moves();
    // Kxd2 or Kf1; d1/e2/f2/d2 are covered by the queen except the capture
    let targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
    assert!(targets.contains(&"d2".to_string()));
    assert!(targets.contains(&"f1".to_string()));
    assert!(!targets.contains(&"e2".to_string()));
    assert!(!targets.contains(&"f2".to_string()));
    assert!(!targets.contains(&"d1".to_string()));
}
