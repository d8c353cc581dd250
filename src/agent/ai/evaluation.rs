// Position evaluation function
// Returns score in centipawns (positive = good for side to move)

use super::config::EvalWeights;
use super::piece_square_tables::pst_value;
use crate::game_repr::{Color, GameState, Type};

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Score of a drawn position (stalemate)
pub const DRAW_SCORE: i32 = 0;

/// Ranks (zero-based) on which a king counts as exposed: ranks 3 through 6
const EXPOSED_KING_RANKS: std::ops::RangeInclusive<u8> = 2..=5;

/// Static evaluation with the default weights
pub fn evaluate(state: &GameState) -> i32 {
    evaluate_with(state, &EvalWeights::default())
}

/// Evaluation from the side to move's point of view.
///
/// A side to move that is checkmated scores `-MATE_SCORE`, stalemate scores
/// `DRAW_SCORE`. Any other position gets the material and positional terms of
/// [`positional_score`].
pub fn evaluate_with(state: &GameState, weights: &EvalWeights) -> i32 {
    terminal_score(state, 0).unwrap_or_else(|| positional_score(state, weights))
}

/// Material plus, when enabled, piece-square bonuses and the exposed-king
/// penalty, for a position already known to have legal moves.
///
/// Terms are summed for White, subtracted for Black, and the total is
/// negated when Black is to move.
pub(crate) fn positional_score(state: &GameState, weights: &EvalWeights) -> i32 {
    let endgame = is_endgame(state);
    let mut score = 0;

    for (square, piece) in state.board.pieces() {
        let mut value = weights.value(piece.piece_type);
        if weights.use_piece_square_tables {
            value += pst_value(piece, square, endgame);
        }
        if piece.piece_type == Type::King && EXPOSED_KING_RANKS.contains(&square.rank()) {
            value -= weights.king_exposure_penalty;
        }

        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    match state.side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Score of a position with no legal moves, `ply` half-moves below the root.
///
/// Returns `None` while the side to move still has a move. Being mated
/// sooner is worse, so the mate score shrinks with `ply`.
pub fn terminal_score(state: &GameState, ply: u8) -> Option<i32> {
    if state.has_legal_moves(state.side_to_move) {
        return None;
    }
    Some(no_moves_score(state, ply))
}

/// Mate or draw score for a side that has already been found to have no moves
pub(crate) fn no_moves_score(state: &GameState, ply: u8) -> i32 {
    if state.is_in_check(state.side_to_move) {
        -(MATE_SCORE - ply as i32)
    } else {
        DRAW_SCORE
    }
}

/// Helper function to detect if a score represents a mate
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE - 100
}

/// Queens off the board: kings switch to their endgame table
fn is_endgame(state: &GameState) -> bool {
    state.board.count(Color::White, Type::Queen) == 0 && state.board.count(Color::Black, Type::Queen) == 0
}
