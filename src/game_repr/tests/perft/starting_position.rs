use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================
// Position 1: the initial position
// FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
#[ignore = "slow; run with --ignored"]
fn test_perft_starting_position_depth_4() {
    let pos = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(pos.perft(4), 197281);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = GameState::new();
    let divide = pos.divide(2);
    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|(_, n)| *n == 20));
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), pos.perft(2));
}
