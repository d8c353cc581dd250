use std::sync::LazyLock;

use super::*;

/// Zobrist hashing constants for chess positions
///
/// One random 64-bit number per piece-square combination, castling right,
/// en-passant file and side to move. A position hashes to the XOR of the
/// numbers for everything present in it.
pub struct ZobristKeys {
    /// [piece_type][color][square]
    pub pieces: [[[u64; 64]; 2]; 6],
    /// [color * 2 + side]
    pub castling: [u64; 4],
    /// [file] - en passant file (0-7)
    pub en_passant: [u64; 8],
    /// Side to move (toggled in when it's black's turn)
    pub side_to_move: u64,
}

impl ZobristKeys {
    /// Generate Zobrist keys using a seeded random number generator
    /// This ensures the keys are random but reproducible
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x517cc1b727220a95);

        let mut pieces = [[[0u64; 64]; 2]; 6];
        for piece_type in &mut pieces {
            for color in piece_type {
                for square in color {
                    *square = rng.gen();
                }
            }
        }

        let mut castling = [0u64; 4];
        for castle in &mut castling {
            *castle = rng.gen();
        }

        let mut en_passant = [0u64; 8];
        for ep in &mut en_passant {
            *ep = rng.gen();
        }

        Self {
            pieces,
            castling,
            en_passant,
            side_to_move: rng.gen(),
        }
    }
}

/// Global Zobrist keys - initialized once using LazyLock
static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

impl GameState {
    /// Position key for repetition detection.
    ///
    /// Two states that agree on placement, side to move, castling rights and
    /// en-passant target hash the same; the clocks are ignored.
    pub fn zobrist_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0u64;

        for (square, piece) in self.board.pieces() {
            hash ^= keys.pieces[piece.piece_type.index()][piece.color.index()][square.index()];
        }

        for color in [Color::White, Color::Black] {
            for side in CastleSide::BOTH {
                if self.castling.has(color, side) {
                    hash ^= keys.castling[color.index() * 2 + side.index()];
                }
            }
        }

        if let Some(ep) = self.en_passant {
            hash ^= keys.en_passant[ep.file() as usize];
        }

        if self.side_to_move == Color::Black {
            hash ^= keys.side_to_move;
        }

        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(GameState::new().zobrist_hash(), GameState::new().zobrist_hash());
    }

    #[test]
    fn test_hash_follows_position() {
        let start = GameState::new();
        let mv = start.validate_move("g1".parse().unwrap(), "f3".parse().unwrap(), None).unwrap();
        let after = start.apply(mv);
        assert_ne!(start.zobrist_hash(), after.zobrist_hash());

        // knight out and back with both sides returns to the same key
        let mut state = after;
        for (from, to) in [("g8", "f6"), ("f3", "g1"), ("f6", "g8")] {
            let mv = state.validate_move(from.parse().unwrap(), to.parse().unwrap(), None).unwrap();
            state.make_move(mv);
        }
        assert_eq!(state.zobrist_hash(), start.zobrist_hash());
    }

    #[test]
    fn test_side_to_move_changes_hash() {
        let white = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let black = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_ne!(white.zobrist_hash(), black.zobrist_hash());
    }
}
