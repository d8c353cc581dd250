//! Session configuration for a human-versus-computer game.

use crate::agent::ai::{Difficulty, SearchConfig};
use crate::game_repr::Color;

/// Who plays what, and how hard the computer tries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side the human plays; the computer takes the other one
    pub human_color: Color,
    pub difficulty: Difficulty,
    /// Search the computer's root moves in parallel
    pub parallel: bool,
    /// Board notation to start from instead of the standard position
    pub start_fen: Option<String>,
}

impl GameConfig {
    /// Human plays `human_color` against the computer at `difficulty`.
    pub fn new(human_color: Color, difficulty: Difficulty) -> Self {
        Self {
            human_color,
            difficulty,
            parallel: false,
            start_fen: None,
        }
    }

    pub fn ai_color(&self) -> Color {
        self.human_color.opposite()
    }

    /// Search parameters for the computer side
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            parallel: self.parallel,
            ..SearchConfig::from_difficulty(self.difficulty)
        }
    }
}

impl Default for GameConfig {
    /// Human as White against a Medium (depth 3) computer
    fn default() -> Self {
        Self::new(Color::White, Difficulty::Medium)
    }
}
