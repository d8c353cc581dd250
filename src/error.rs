//! Error types for the rules core and the game controller.
//!
//! Invalid external input (square names, board notation, move text, moves
//! that are not legal in the current position) is reported through
//! [`ChessError`] and is never applied to a position. `InvariantViolation`
//! marks a broken contract such as a side without a king; it cannot happen
//! for any position reached from the standard start by legal moves.

use crate::game_repr::Square;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square name outside `a1..h8`
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// Board notation that could not be parsed
    #[error("invalid board notation: {0}")]
    InvalidFen(String),

    /// Move text that is not in coordinate notation (`e2e4`, `e7e8q`)
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// No piece stands on the origin square
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the origin square belongs to the side not on move
    #[error("the piece on {0} belongs to the side not on move")]
    WrongSide(Square),

    /// The piece cannot legally reach the destination
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// The game has already ended
    #[error("the game is over")]
    GameOver,

    /// A structural contract of the board was broken
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
