// Move ordering for alpha-beta: captures first, most valuable victim first

use std::cmp::Reverse;

use crate::game_repr::{Move, Type};

/// Get material value for MVV-LVA (Most Valuable Victim - Least Valuable Attacker)
fn piece_value_for_mvv_lva(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => 100,
        Type::Knight => 300,
        Type::Bishop => 330,
        Type::Rook => 500,
        Type::Queen => 900,
        Type::King => 10000,
    }
}

/// Ordering key of a single move; higher is searched earlier
pub fn score_move(mv: &Move) -> i32 {
    let mut score = 0;

    if let Some(victim) = mv.captured {
        // high victim value, low attacker value = good capture
        score += 10000 + piece_value_for_mvv_lva(victim.piece_type)
            - piece_value_for_mvv_lva(mv.piece.piece_type) / 10;
    }

    if let Some(kind) = mv.promotion() {
        score += 9000 + piece_value_for_mvv_lva(kind) / 10;
    }

    score
}

/// Sort in place, best first. The sort is stable, so equally scored moves
/// keep their generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(score_move(mv)));
}
