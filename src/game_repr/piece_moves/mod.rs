//! Pseudo-legal move generation, one file per piece kind.
//!
//! Generators only look at geometry and occupancy. Whether a move leaves the
//! mover's own king attacked is decided later in `movegen`.

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{GameState, Move, Piece, Square};

/// Move buffer sized for a typical position without spilling to the heap
pub type MoveList = SmallVec<[Move; 64]>;

impl GameState {
    /// Slide from `from` along each direction until the edge or a blocker.
    /// An enemy blocker yields one capture; a friendly one yields nothing.
    pub(crate) fn slide_moves_into(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.board.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, None)),
                    Some(target) => {
                        if target.color != piece.color {
                            moves.push(Move::new(from, to, piece, Some(target)));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, df);
            }
        }
    }

    /// Single steps onto each target in `targets` that is empty or enemy
    pub(crate) fn leap_moves_into(&self, from: Square, piece: Piece, targets: u64, moves: &mut MoveList) {
        for to in super::tables::squares(targets) {
            match self.board.piece_at(to) {
                None => moves.push(Move::new(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::new(from, to, piece, Some(target)))
                }
                Some(_) => {}
            }
        }
    }
}
