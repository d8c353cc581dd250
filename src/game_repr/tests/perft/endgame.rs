use super::*;

// ==================== ENDGAME POSITION PERFT TESTS ====================
// Position 3: Tests en passant and pawn promotion in endgame
// FEN: 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1

#[test]
fn test_perft_endgame_depth_1() {
    let pos = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(pos.perft(1), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    let pos = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(pos.perft(2), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    let pos = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(pos.perft(3), 2812);
}

#[test]
#[ignore = "slow; run with --ignored"]
fn test_perft_endgame_depth_4() {
    let pos = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(pos.perft(4), 43238);
}
