//! Player trait and associated types for chess game agents.
//!
//! This module provides the core abstraction for entities that can provide chess moves.
//! The engine side is [`NegamaxPlayer`](crate::agent::ai::NegamaxPlayer); the human
//! side of the terminal game types moves directly into the [`Game`](crate::game::Game)
//! controller and needs no implementation of its own.
//!
//! # Synchronous Design
//!
//! The `get_move()` method is synchronous (blocking). A turn-based game simply
//! asks the player on move and waits for the answer.

use crate::game_repr::{Color, GameState, Move};

/// Result of a completed chess game.
///
/// This enum represents all possible game outcomes. It is passed to players
/// via `game_ended()` to notify them of the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated)
    WhiteWins,
    /// Black player won the game (White was checkmated)
    BlackWins,
    /// Game ended in a draw (insufficient material, 50-move rule, repetition)
    Draw,
    /// Game ended in stalemate (player to move has no legal moves but is not in check)
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// The winning color, if there is one
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw | GameResult::Stalemate => None,
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented. All other methods have default
/// implementations that can be overridden as needed.
pub trait Player {
    /// Request the next move for the side to move in `state`.
    ///
    /// # Return Value
    ///
    /// - `Some(Move)`: A legal move in `state`
    /// - `None`: The player has no move to offer (no legal moves, or resignation)
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Notify this player that the game has ended.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Get the display name of this player.
    ///
    /// # Default Implementation
    ///
    /// Returns `"Player"`.
    fn name(&self) -> &str {
        "Player"
    }
}
