use super::super::tables::BISHOP_DIRECTIONS;
use super::super::{GameState, Piece, Square};
use super::MoveList;

impl GameState {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_moves_into(from, piece, &BISHOP_DIRECTIONS, moves);
    }
}
