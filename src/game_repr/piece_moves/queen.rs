use super::super::tables::QUEEN_DIRECTIONS;
use super::super::{GameState, Piece, Square};
use super::MoveList;

impl GameState {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_moves_into(from, piece, &QUEEN_DIRECTIONS, moves);
    }
}
