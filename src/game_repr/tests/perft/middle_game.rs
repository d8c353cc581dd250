use super::*;

// ==================== MIDDLE GAME WITH PROMOTION PERFT TESTS ====================
// Position 5: Tests immediate promotion scenarios
// FEN: rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8

#[test]
fn test_perft_middle_game_depth_1() {
    let pos = GameState::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8").unwrap();
    assert_eq!(pos.perft(1), 44);
}

#[test]
fn test_perft_middle_game_depth_2() {
    let pos = GameState::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8").unwrap();
    assert_eq!(pos.perft(2), 1486);
}

#[test]
fn test_perft_middle_game_depth_3() {
    let pos = GameState::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8").unwrap();
    assert_eq!(pos.perft(3), 62379);
}
