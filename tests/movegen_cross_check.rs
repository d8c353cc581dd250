// Compare legal move generation against the `chess` crate, node by node

use std::collections::BTreeSet;
use std::str::FromStr;

use chess::MoveGen;
use chess_ai::game_repr::GameState;

fn ours(state: &GameState) -> BTreeSet<String> {
    state.legal_moves().iter().map(|mv| mv.to_coordinate()).collect()
}

fn reference(board: &chess::Board) -> BTreeSet<String> {
    MoveGen::new_legal(board).map(|mv| mv.to_string().to_lowercase()).collect()
}

/// Walk both trees in lockstep to `depth`, failing on the first node where
/// the move sets differ
fn walk(state: &GameState, board: &chess::Board, depth: u32, line: &mut Vec<String>) {
    let mine = ours(state);
    let theirs = reference(board);
    assert_eq!(mine, theirs, "move sets differ after {:?} ({})", line, state.to_fen());

    if depth == 0 {
        return;
    }

    for mv in state.legal_moves() {
        let text = mv.to_coordinate();
        let their_move = MoveGen::new_legal(board)
            .find(|m| m.to_string().to_lowercase() == text)
            .expect("move sets already compared equal");

        line.push(text);
        walk(&state.apply(mv), &board.make_move_new(their_move), depth - 1, line);
        line.pop();
    }
}

fn cross_check(fen: &str, depth: u32) {
    let state = GameState::from_fen(fen).unwrap();
    let board = chess::Board::from_str(fen).unwrap();
    walk(&state, &board, depth, &mut Vec::new());
}

#[test]
fn test_start_position() {
    cross_check("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 2);
}

#[test]
fn test_kiwipete() {
    cross_check("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2);
}

#[test]
fn test_en_passant_and_pins() {
    cross_check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3);
}

#[test]
fn test_promotions() {
    cross_check("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1", 2);
}

#[test]
fn test_castling_through_check() {
    cross_check("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 2);
    cross_check("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1", 1);
}
