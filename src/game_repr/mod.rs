mod attacks;
mod board;
mod fen;
mod movegen;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;
pub mod tables;
mod zobrist;

#[cfg(test)]
mod tests;

pub use attacks::*;
pub use board::*;
pub use fen::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::MoveList;
pub use position::*;
pub use square::*;
pub use zobrist::ZobristKeys;
