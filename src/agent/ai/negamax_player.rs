//! NegamaxPlayer - Classical chess AI using Negamax with Alpha-Beta pruning
//!
//! The player implements the [`Player`] trait and delegates move selection to
//! the search module's [`iterative_deepening_search`]. It owns no board: each
//! call to `get_move` receives the current [`GameState`] and searches a copy.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 3 (default)
//! - **Hard**: Depth 4
//! - **Expert**: Depth 5 with 5s time limit
//!
//! # Examples
//!
//! ```
//! use chess_ai::agent::ai::{Difficulty, NegamaxPlayer};
//! use chess_ai::agent::Player;
//! use chess_ai::game_repr::GameState;
//!
//! let mut ai = NegamaxPlayer::with_difficulty(Difficulty::Easy);
//! assert_eq!(ai.name(), "AI (Easy)");
//! let reply = ai.get_move(&GameState::new());
//! assert!(reply.is_some());
//! ```

use log::debug;

use super::config::{Difficulty, SearchConfig};
use super::search::{iterative_deepening_search, SearchResult};
use crate::agent::player::{GameResult, Player};
use crate::game_repr::{GameState, Move};

/// AI Player that uses Negamax algorithm with alpha-beta pruning
///
/// Deterministic: the same position and configuration always yield the same
/// move, whether or not the root is searched in parallel.
pub struct NegamaxPlayer {
    /// Difficulty the current `config` was derived from
    difficulty: Difficulty,

    /// Parameters handed to the search on every move
    config: SearchConfig,

    /// Display name for this AI player
    name: String,

    /// Statistics of the most recent search
    last_search: Option<SearchResult>,
}

impl NegamaxPlayer {
    /// Create a new NegamaxPlayer with custom difficulty and name
    pub fn new(difficulty: Difficulty, name: String) -> Self {
        Self {
            difficulty,
            config: SearchConfig::from_difficulty(difficulty),
            name,
            last_search: None,
        }
    }

    /// Create a new NegamaxPlayer named "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name)
    }

    /// Player with full control over the search parameters
    pub fn with_config(config: SearchConfig, name: String) -> Self {
        Self {
            difficulty: Difficulty::default(),
            config,
            name,
            last_search: None,
        }
    }

    /// Create a default NegamaxPlayer with Medium difficulty
    pub fn new_default() -> Self {
        Self::new(Difficulty::Medium, "AI (Negamax)".to_string())
    }

    /// Get the current difficulty level
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Set a new difficulty level
    ///
    /// Resets depth and time limit from the difficulty; the evaluation weights
    /// and the parallel flag are kept. The name is updated if it was
    /// auto-generated.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.config.max_depth = difficulty.max_depth();
        self.config.time_limit_ms = difficulty.time_limit_ms();
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    /// Search the root moves on the rayon pool
    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// Statistics of the most recent `get_move` call
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl Default for NegamaxPlayer {
    fn default() -> Self {
        Self::new_default()
    }
}

impl Player for NegamaxPlayer {
    /// Search the position and return the best move for the side to move.
    ///
    /// Blocks for the whole search; `None` only when there is no legal move.
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let result = iterative_deepening_search(state, &self.config);

        debug!(
            "[{}] searched to depth {}, {} nodes, score {}",
            self.name, result.depth_reached, result.nodes, result.score
        );

        let best = result.best_move;
        self.last_search = Some(result);
        best
    }

    fn opponent_moved(&mut self, mv: Move) {
        debug!("[{}] opponent played {}", self.name, mv);
    }

    fn game_ended(&mut self, result: GameResult) {
        debug!("[{}] game ended: {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
