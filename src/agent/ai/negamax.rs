// Negamax Search with Alpha-Beta Pruning
//
// Negamax is a variant of the minimax algorithm that simplifies implementation
// by taking advantage of the zero-sum property of chess: max(a, b) = -min(-a, -b).
// Instead of separate maximizing and minimizing functions, we use one function
// that negates the score at each level.
//
// Every score is from the perspective of the side to move at that node.
// Moves are played on the one working state with make_move and taken back
// with unmake_move before the next sibling is tried.

use super::config::EvalWeights;
use super::evaluation::{no_moves_score, positional_score};
use super::move_ordering::order_moves;
use crate::game_repr::GameState;

use super::evaluation::{is_mate_score, MATE_SCORE};

/// Minimum score (worse than any mate)
pub const MIN_SCORE: i32 = -MATE_SCORE - 100;

/// Maximum score (better than any mate)
pub const MAX_SCORE: i32 = MATE_SCORE + 100;

/// Negamax search with alpha-beta pruning and the default evaluation weights.
///
/// # Arguments
///
/// * `state` - Working position; restored before returning
/// * `depth` - Remaining search depth (0 = evaluate)
/// * `alpha` - Lower bound (best score the side to move can already guarantee)
/// * `beta` - Upper bound (best score the opponent will allow)
/// * `ply` - Distance from the root, used to prefer shorter mates
///
/// # Returns
///
/// Score from the perspective of the side to move. Exact when it falls
/// strictly inside `(alpha, beta)`, a bound otherwise.
pub fn negamax(state: &mut GameState, depth: u8, alpha: i32, beta: i32, ply: u8) -> i32 {
    let mut nodes = 0;
    negamax_with(state, depth, alpha, beta, ply, &EvalWeights::default(), &mut nodes)
}

/// [`negamax`] with explicit weights and a node counter
pub fn negamax_with(
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    weights: &EvalWeights,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let mut moves = state.legal_moves();

    // No legal moves: checkmate or stalemate
    if moves.is_empty() {
        return no_moves_score(state, ply);
    }

    if depth == 0 {
        return positional_score(state, weights);
    }

    order_moves(&mut moves);

    let mut best = MIN_SCORE;
    for mv in moves {
        let undo = state.make_move(mv);
        let score = -negamax_with(state, depth - 1, -beta, -alpha, ply + 1, weights, nodes);
        state.unmake_move(mv, undo);

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Plain negamax without pruning.
///
/// Visits every node to `depth`; slow, and only meant for checking that
/// pruning does not change the result.
pub fn negamax_unpruned(state: &mut GameState, depth: u8, ply: u8, weights: &EvalWeights) -> i32 {
    let moves = state.legal_moves();

    if moves.is_empty() {
        return no_moves_score(state, ply);
    }

    if depth == 0 {
        return positional_score(state, weights);
    }

    let mut best = MIN_SCORE;
    for mv in moves {
        let undo = state.make_move(mv);
        let score = -negamax_unpruned(state, depth - 1, ply + 1, weights);
        state.unmake_move(mv, undo);
        best = best.max(score);
    }
    best
}

/// Get the number of moves until mate from a mate score
/// Returns None if not a mate score
pub fn mate_distance(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }

    if score > 0 {
        // We're checkmating opponent
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        // We're getting checkmated
        Some(-(MATE_SCORE + score + 1) / 2)
    }
}
