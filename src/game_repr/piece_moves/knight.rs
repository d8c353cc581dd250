use super::super::tables::KNIGHT_ATTACKS;
use super::super::{GameState, Piece, Square};
use super::MoveList;

impl GameState {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.leap_moves_into(from, piece, KNIGHT_ATTACKS[from.index()], moves);
    }
}
