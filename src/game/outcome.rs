use std::fmt;

use crate::agent::GameResult;
use crate::game_repr::{Color, GameState, Square, Type};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// A hundred half-moves without a capture or pawn move
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl GameOutcome {
    pub fn result(&self) -> GameResult {
        match self {
            GameOutcome::Checkmate { winner } => GameResult::from_winner(*winner),
            GameOutcome::Stalemate => GameResult::Stalemate,
            GameOutcome::InsufficientMaterial
            | GameOutcome::FiftyMoveRule
            | GameOutcome::ThreefoldRepetition => GameResult::Draw,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner),
            GameOutcome::Stalemate => f.write_str("Stalemate!"),
            GameOutcome::InsufficientMaterial => f.write_str("Draw by insufficient material"),
            GameOutcome::FiftyMoveRule => f.write_str("Draw by the fifty-move rule"),
            GameOutcome::ThreefoldRepetition => f.write_str("Draw by threefold repetition"),
        }
    }
}

/// Outcome decided by the position alone, for the side to move.
///
/// Checked in order: no legal moves (mate or stalemate), insufficient
/// material, fifty-move rule. Repetition needs the game's history and is
/// left to the caller.
pub fn position_outcome(state: &GameState) -> Option<GameOutcome> {
    let to_move = state.side_to_move;

    if !state.has_legal_moves(to_move) {
        return Some(if state.is_in_check(to_move) {
            GameOutcome::Checkmate {
                winner: to_move.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        });
    }

    if is_insufficient_material(state) {
        return Some(GameOutcome::InsufficientMaterial);
    }

    if state.halfmove_clock >= 100 {
        return Some(GameOutcome::FiftyMoveRule);
    }

    None
}

/// Neither side can possibly deliver checkmate.
///
/// # Insufficient Material Cases
///
/// - King vs King
/// - King and Bishop vs King
/// - King and Knight vs King
/// - King and Bishop vs King and Bishop, bishops on the same square colour
pub fn is_insufficient_material(state: &GameState) -> bool {
    let mut minors: [Vec<(Square, Type)>; 2] = [Vec::new(), Vec::new()];

    for (square, piece) in state.board.pieces() {
        match piece.piece_type {
            Type::King => {}
            Type::Knight | Type::Bishop => minors[piece.color.index()].push((square, piece.piece_type)),
            // any pawn, rook or queen can still mate
            Type::Pawn | Type::Rook | Type::Queen => return false,
        }
    }

    match (minors[0].as_slice(), minors[1].as_slice()) {
        ([], []) => true,
        ([_], []) | ([], [_]) => true,
        ([(white_sq, Type::Bishop)], [(black_sq, Type::Bishop)]) => square_shade(*white_sq) == square_shade(*black_sq),
        _ => false,
    }
}

/// 0 for dark squares, 1 for light squares
fn square_shade(square: Square) -> u8 {
    (square.rank() + square.file()) % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(fen: &str) -> Option<GameOutcome> {
        position_outcome(&GameState::from_fen(fen).unwrap())
    }

    #[test]
    fn test_checkmate_and_stalemate() {
        assert_eq!(
            outcome("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
            Some(GameOutcome::Checkmate { winner: Color::Black })
        );
        assert_eq!(outcome("7k/8/6Q1/8/8/8/8/K7 b - - 0 1"), Some(GameOutcome::Stalemate));
        assert_eq!(outcome("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"), None);
    }

    #[test]
    fn test_insufficient_material() {
        assert_eq!(outcome("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), Some(GameOutcome::InsufficientMaterial));
        assert_eq!(outcome("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1"), Some(GameOutcome::InsufficientMaterial));
        assert_eq!(outcome("4k3/8/8/8/8/8/8/1N2K3 b - - 0 1"), Some(GameOutcome::InsufficientMaterial));
        // bishops on c1 and f8 are both dark-squared
        assert_eq!(outcome("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1"), Some(GameOutcome::InsufficientMaterial));
        // c1 dark, c8 light
        assert_eq!(outcome("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1"), None);
        assert_eq!(outcome("4k3/8/8/8/8/8/8/1NN1K3 w - - 0 1"), None);
        assert_eq!(outcome("4k3/8/8/8/8/8/P7/4K3 w - - 0 1"), None);
    }

    #[test]
    fn test_fifty_move_rule() {
        assert_eq!(outcome("4k3/8/8/8/8/8/8/R3K3 w - - 99 80"), None);
        assert_eq!(outcome("4k3/8/8/8/8/8/8/R3K3 w - - 100 80"), Some(GameOutcome::FiftyMoveRule));
    }

    #[test]
    fn test_outcome_text_and_result() {
        let mate = GameOutcome::Checkmate { winner: Color::White };
        assert_eq!(mate.to_string(), "Checkmate! White wins!");
        assert_eq!(mate.result(), GameResult::WhiteWins);
        assert_eq!(GameOutcome::Stalemate.result(), GameResult::Stalemate);
        assert_eq!(GameOutcome::ThreefoldRepetition.result(), GameResult::Draw);
    }
}
