use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board, White to move, no rights
pub fn empty_board() -> GameState {
    GameState::from_board(Board::empty(), Color::White)
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut GameState, square: &str, color: Color, piece_type: Type) {
    pos.board.place(sq(square), Piece::new(color, piece_type));
}

pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Helper function to count castling moves
pub fn count_castles(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.is_castle()).count()
}

pub fn count_en_passant(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.special == SpecialMove::EnPassant).count()
}

/// Play a move given in coordinate notation, as the side to move
pub fn play(pos: &mut GameState, text: &str) -> Move {
    let (from, to, promotion) = parse_coordinate(text).unwrap();
    let mv = pos
        .validate_move(from, to, promotion)
        .unwrap_or_else(|e| panic!("{} should be legal here: {}", text, e));
    pos.make_move(mv);
    mv
}

/// Play a sequence of coordinate moves from the initial position
pub fn play_line(line: &[&str]) -> GameState {
    let mut pos = GameState::new();
    for text in line {
        play(&mut pos, text);
    }
    pos
}

// ==================== TEST MODULES ====================

mod piece_movement;
mod check_detection;
mod perft;
