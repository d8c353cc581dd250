use super::super::attacks::is_attacked;
use super::super::tables::KING_ATTACKS;
use super::super::{CastleSide, GameState, Move, Piece, Square, SpecialMove, Type};
use super::MoveList;

impl GameState {
    /// Generate king moves, castling included, into a provided buffer
    pub fn king_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.leap_moves_into(from, piece, KING_ATTACKS[from.index()], moves);

        let color = piece.color;
        let home = Square::new(color.back_rank(), 4);
        if Some(from) != home {
            return;
        }

        // Can't castle out of check
        let opponent = color.opposite();
        if is_attacked(&self.board, from, opponent) {
            return;
        }

        for side in CastleSide::BOTH {
            if !self.castling.has(color, side) {
                continue;
            }

            let (rook_square, _) = side.rook_squares(color);
            let rook_present = self.board.piece_at(rook_square) == Some(Piece::new(color, Type::Rook));
            let squares_empty = side.between_squares(color).iter().all(|&sq| self.board.is_empty(sq));
            // the king may not pass through or land on an attacked square
            let king_safe = side
                .king_path(color)
                .iter()
                .all(|&sq| !is_attacked(&self.board, sq, opponent));

            if rook_present && squares_empty && king_safe {
                moves.push(
                    Move::new(from, side.king_target(color), piece, None)
                        .with_special(SpecialMove::Castle(side)),
                );
            }
        }
    }
}
