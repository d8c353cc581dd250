// AI Agent - Negamax with Alpha-Beta Pruning
//
// This module implements a classical chess AI using the Negamax algorithm
// with alpha-beta pruning and iterative deepening.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Material, piece-square and king-exposure evaluation
// - Captures searched first (MVV-LVA) for earlier cutoffs
// - Optional parallel root search on the rayon pool

mod config;
mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod piece_square_tables;
mod search;


pub use config::{Difficulty, EvalWeights, SearchConfig};
pub use evaluation::{evaluate, evaluate_with, is_mate_score, terminal_score, DRAW_SCORE, MATE_SCORE};
pub use move_ordering::{order_moves, score_move};
pub use negamax::{mate_distance, negamax, negamax_unpruned, negamax_with, MAX_SCORE, MIN_SCORE};
pub use negamax_player::NegamaxPlayer;
pub use search::{compute_best_move, iterative_deepening_search, SearchResult};
