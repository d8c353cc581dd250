use super::super::tables::ROOK_DIRECTIONS;
use super::super::{GameState, Piece, Square};
use super::MoveList;

impl GameState {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_moves_into(from, piece, &ROOK_DIRECTIONS, moves);
    }
}
