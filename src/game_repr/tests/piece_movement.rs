use super::*;

// ==================== KNIGHT / SLIDER MOVEMENT TESTS ====================

#[test]
fn test_knight_moves_from_center_and_corner() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::White, Type::Knight);
    assert_eq!(pos.legal_moves_from(sq("d4")).len(), 8);

    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::Knight);
    let moves = pos.legal_moves_from(sq("a1"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "a1", "b3"));
    assert!(has_move(&moves, "a1", "c2"));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let pos = GameState::new();
    let moves = pos.legal_moves_from(sq("g1"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "g1", "f3"));
    assert!(has_move(&moves, "g1", "h3"));
}

#[test]
fn test_rook_stops_at_blockers() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::White, Type::Rook);
    place_piece(&mut pos, "d6", Color::Black, Type::Pawn);
    place_piece(&mut pos, "f4", Color::White, Type::Pawn);

    let moves = pos.legal_moves_from(sq("d4"));
    assert!(has_move(&moves, "d4", "d5"));
    assert!(has_move(&moves, "d4", "d6"), "Enemy blocker can be captured");
    assert!(!has_move(&moves, "d4", "d7"), "Rook cannot pass an enemy piece");
    assert!(has_move(&moves, "d4", "e4"));
    assert!(!has_move(&moves, "d4", "f4"), "Rook cannot capture own piece");
    assert!(!has_move(&moves, "d4", "g4"), "Rook cannot pass own piece");
    // d5 d6 | d3 d2 d1 | e4 | c4 b4 a4
    assert_eq!(moves.len(), 9);
}

#[test]
fn test_bishop_stays_on_diagonals() {
    let mut pos = empty_board();
    place_piece(&mut pos, "c1", Color::White, Type::Bishop);
    let moves = pos.legal_moves_from(sq("c1"));
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| (m.to.rank() + m.to.file()) % 2 == 0), "Bishop keeps its colour");
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::White, Type::Queen);
    assert_eq!(pos.legal_moves_from(sq("d4")).len(), 27);
}

#[test]
fn test_sliders_never_pass_a_blocker() {
    // every slider move in the opening and a busy middlegame has a clear path
    for fen in [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ] {
        let pos = GameState::from_fen(fen).unwrap();
        for mv in pos.legal_moves() {
            if mv.piece.piece_type.is_slider() {
                assert!(is_path_clear(&pos.board, mv.from, mv.to), "{} jumps a piece in {}", mv, fen);
            }
        }
    }
}

#[test]
fn test_pinned_piece_moves_along_pin_only() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e4", Color::White, Type::Rook);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);

    let moves = pos.legal_moves_from(sq("e4"));
    assert!(moves.iter().all(|m| m.to.file() == 4), "Pinned rook must stay on the e-file");
    assert!(has_move(&moves, "e4", "e8"));
    assert_eq!(moves.len(), 6);
}

#[test]
fn test_empty_square_and_wrong_side_yield_nothing() {
    let pos = GameState::new();
    assert!(legal_moves_from(&pos, sq("e4")).is_empty());
    assert!(legal_moves_from(&pos, sq("e7")).is_empty(), "Black pieces cannot move on White's turn");
    assert_eq!(legal_moves_from(&pos, sq("e2")).len(), 2);
}
