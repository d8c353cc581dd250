use super::tables::{
    pawn_attackers_of, squares, BISHOP_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS, ROOK_DIRECTIONS,
};
use super::*;

/// True if any piece of `by` could move onto `square` in one step.
///
/// Pawns attack diagonally whether or not the square is occupied; sliders
/// respect blockers of either colour.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let holds = |sq: Square, kind: Type| board.piece_at(sq) == Some(Piece::new(by, kind));

    if squares(pawn_attackers_of(square, by)).any(|sq| holds(sq, Type::Pawn)) {
        return true;
    }
    if squares(KNIGHT_ATTACKS[square.index()]).any(|sq| holds(sq, Type::Knight)) {
        return true;
    }
    if squares(KING_ATTACKS[square.index()]).any(|sq| holds(sq, Type::King)) {
        return true;
    }

    slider_hits(board, square, by, &ROOK_DIRECTIONS, Type::Rook)
        || slider_hits(board, square, by, &BISHOP_DIRECTIONS, Type::Bishop)
}

/// Walk each direction to its first occupied square and test it for a
/// `kind` or queen of `by`
fn slider_hits(board: &Board, square: Square, by: Color, directions: &[(i8, i8)], kind: Type) -> bool {
    for &(dr, df) in directions {
        let mut cursor = square.offset(dr, df);
        while let Some(sq) = cursor {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == by && (piece.piece_type == kind || piece.piece_type == Type::Queen) {
                    return true;
                }
                break;
            }
            cursor = sq.offset(dr, df);
        }
    }
    false
}

/// True if every square strictly between `from` and `to` is empty.
///
/// The squares must share a rank, file or diagonal; otherwise there is no
/// path and the answer is `false`.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = to.rank() as i8 - from.rank() as i8;
    let df = to.file() as i8 - from.file() as i8;
    if from == to || !(dr == 0 || df == 0 || dr.abs() == df.abs()) {
        return false;
    }

    let (step_r, step_f) = (dr.signum(), df.signum());
    let mut cursor = from.offset(step_r, step_f);
    while let Some(sq) = cursor {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        cursor = sq.offset(step_r, step_f);
    }
    false
}

impl GameState {
    /// Checks if the king of the given color is currently in check.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Ok(king) => is_attacked(&self.board, king, color.opposite()),
            Err(_) => false,
        }
    }

    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&self, color: Color) -> bool {
        !self.legal_moves_for(color).is_empty()
    }
}

pub fn is_in_check(state: &GameState, color: Color) -> bool {
    state.is_in_check(color)
}

pub fn is_checkmate(state: &GameState, color: Color) -> bool {
    state.is_checkmate(color)
}

pub fn is_stalemate(state: &GameState, color: Color) -> bool {
    state.is_stalemate(color)
}
