use super::super::{GameState, Move, Piece, Square, SpecialMove, Type};
use super::MoveList;

impl GameState {
    /// Generate pawn moves into a provided buffer.
    ///
    /// Reaching the far rank expands into one move per promotion piece.
    /// En passant is offered only to the side to move, since the target
    /// square expires after one ply.
    pub fn pawn_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = piece.color;
        let forward = color.forward();

        // pushes
        if let Some(one) = from.offset(forward, 0) {
            if self.board.is_empty(one) {
                push_pawn_move(moves, Move::new(from, one, piece, None));

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(forward, 0) {
                        if self.board.is_empty(two) {
                            moves.push(Move::new(from, two, piece, None));
                        }
                    }
                }
            }
        }

        // captures
        let en_passant = self.en_passant.filter(|_| color == self.side_to_move);
        for df in [-1, 1] {
            let Some(to) = from.offset(forward, df) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some(target) if target.color != color => {
                    push_pawn_move(moves, Move::new(from, to, piece, Some(target)));
                }
                None if en_passant == Some(to) => {
                    let victim_square = from.offset(0, df);
                    let victim = victim_square.and_then(|sq| self.board.piece_at(sq));
                    if let Some(victim) = victim.filter(|v| v.color != color && v.piece_type == Type::Pawn) {
                        moves.push(
                            Move::new(from, to, piece, Some(victim)).with_special(SpecialMove::EnPassant),
                        );
                    }
                }
                _ => {}
            }
        }
    }
}

/// Push `mv`, expanding it into the four promotions when it lands on the far rank
fn push_pawn_move(moves: &mut MoveList, mv: Move) {
    if mv.to.rank() == mv.piece.color.promotion_rank() {
        for kind in Type::PROMOTIONS {
            moves.push(mv.with_special(SpecialMove::Promotion(kind)));
        }
    } else {
        moves.push(mv);
    }
}
