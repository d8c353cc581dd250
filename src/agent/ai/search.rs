// Iterative Deepening Search Orchestrator
//
// This module drives the root of the search. It searches depth 1, 2, ...
// up to the configured maximum, keeps the result of the last depth that
// completed, and stops early on a time budget or a forced mate.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use super::config::{EvalWeights, SearchConfig};
use super::evaluation::{is_mate_score, no_moves_score};
use super::move_ordering::order_moves;
use super::negamax::{negamax_with, MAX_SCORE, MIN_SCORE};
use crate::game_repr::{GameState, Move};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side to move
    pub score: i32,
    /// Deepest iteration that completed
    pub depth_reached: u8,
    pub nodes: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth_reached: 0,
            nodes: 0,
            time_ms: 0,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for the side to move, searching exactly `depth` plies with the
/// default evaluation weights.
///
/// Every root move is searched to `depth - 1` and negated; the highest score
/// wins. Root moves are searched in ordered move order (captures first by
/// MVV-LVA, otherwise generation order), and among equal scores the earliest
/// move in that order wins, not the earliest in raw generation order. A depth
/// of 0 is treated as 1.
pub fn compute_best_move(state: &GameState, depth: u8) -> SearchResult {
    let start_time = Instant::now();
    let mut result = search_root(state, depth.max(1), &EvalWeights::default());
    result.time_ms = start_time.elapsed().as_millis() as u64;
    result
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `state` - Current position to search
/// * `config` - Depth, time budget, parallelism and evaluation weights
///
/// # Returns
/// SearchResult of the deepest iteration that completed
pub fn iterative_deepening_search(state: &GameState, config: &SearchConfig) -> SearchResult {
    let start_time = Instant::now();
    let mut best_result = SearchResult::new();
    let mut total_nodes = 0u64;

    // Ensure we search at least depth 1
    let max_depth = config.max_depth.max(1);

    for depth in 1..=max_depth {
        // Check time limit before starting new depth
        if let Some(time_limit) = config.time_limit_ms {
            if depth > 1 && is_time_up(&start_time, time_limit) {
                debug!("time limit of {}ms reached before depth {}", time_limit, depth);
                break;
            }
        }

        let result = if config.parallel {
            search_root_parallel(state, depth, &config.weights)
        } else {
            search_root(state, depth, &config.weights)
        };

        total_nodes += result.nodes;
        best_result = SearchResult {
            nodes: total_nodes,
            time_ms: start_time.elapsed().as_millis() as u64,
            ..result
        };

        print_search_info(depth, &best_result);

        // No legal moves, or a forced mate already found: deeper adds nothing
        if best_result.best_move.is_none() || is_mate_score(best_result.score) {
            break;
        }
    }

    best_result
}

/// Root moves in the order they are searched
fn root_moves(state: &GameState) -> Vec<Move> {
    let mut moves = state.legal_moves();
    order_moves(&mut moves);
    moves.into_vec()
}

/// Result for a root with no legal moves
fn terminal_result(state: &GameState, depth: u8) -> SearchResult {
    SearchResult {
        score: no_moves_score(state, 0),
        depth_reached: depth,
        nodes: 1,
        ..SearchResult::new()
    }
}

/// Sequential root search at a fixed depth.
///
/// Alpha rises as better root moves are found, so later moves are searched
/// with a narrower window. A move is only taken when it scores strictly
/// higher, which keeps the first of equally good moves.
fn search_root(state: &GameState, depth: u8, weights: &EvalWeights) -> SearchResult {
    let moves = root_moves(state);
    if moves.is_empty() {
        return terminal_result(state, depth);
    }

    let mut search_state = state.clone();
    let mut nodes = 1u64;
    let mut alpha = MIN_SCORE;
    let mut best_score = MIN_SCORE;
    let mut best_move = None;

    for mv in moves {
        let undo = search_state.make_move(mv);
        let score = -negamax_with(&mut search_state, depth - 1, -MAX_SCORE, -alpha, 1, weights, &mut nodes);
        search_state.unmake_move(mv, undo);

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(score);
    }

    SearchResult {
        best_move,
        score: best_score,
        depth_reached: depth,
        nodes,
        time_ms: 0,
    }
}

/// Root search with one rayon task per root move.
///
/// Each task searches its own clone of the position with the full window,
/// so every root score is exact and the pick matches [`search_root`].
fn search_root_parallel(state: &GameState, depth: u8, weights: &EvalWeights) -> SearchResult {
    let moves = root_moves(state);
    if moves.is_empty() {
        return terminal_result(state, depth);
    }

    let scored: Vec<(Move, i32, u64)> = moves
        .par_iter()
        .map(|&mv| {
            let mut local = state.clone();
            let mut nodes = 0u64;
            local.make_move(mv);
            let score = -negamax_with(&mut local, depth - 1, MIN_SCORE, MAX_SCORE, 1, weights, &mut nodes);
            (mv, score, nodes)
        })
        .collect();

    // collect keeps the input order, so the first maximum is the same move
    // the sequential search would pick
    let mut result = SearchResult {
        depth_reached: depth,
        nodes: 1,
        ..SearchResult::new()
    };
    for (mv, score, nodes) in scored {
        result.nodes += nodes;
        if result.best_move.is_none() || score > result.score {
            result.score = score;
            result.best_move = Some(mv);
        }
    }
    result
}

/// Check if time limit has been exceeded
fn is_time_up(start_time: &Instant, time_limit_ms: u64) -> bool {
    start_time.elapsed().as_millis() as u64 >= time_limit_ms
}

/// Log search information for a completed depth
fn print_search_info(depth: u8, result: &SearchResult) {
    let nps = if result.time_ms > 0 {
        (result.nodes as f64 / result.time_ms as f64 * 1000.0) as u64
    } else {
        result.nodes
    };

    debug!(
        "depth {} score cp {} nodes {} time {} nps {} pv {}",
        depth,
        result.score,
        result.nodes,
        result.time_ms,
        nps,
        result.best_move.map_or_else(|| "-".to_string(), |mv| mv.to_coordinate())
    );
}
