pub mod agent;
pub mod error;
pub mod game;
pub mod game_repr;

pub use error::{ChessError, ChessResult};
