//! Precomputed target sets for the leaping pieces and sliding directions.
//!
//! A target set is a `u64` with bit `n` set for square index `n`
//! (a1 = bit 0). The tables are built at compile time.

use super::{Color, Square};

/// KNIGHT_ATTACKS[square] is the set of squares a knight on `square` reaches
pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&KNIGHT_OFFSETS);

/// KING_ATTACKS[square] is the set of squares adjacent to `square`
pub static KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&KING_OFFSETS);

/// PAWN_ATTACKS[color][square] is the set of squares a pawn of `color` on `square` attacks
pub static PAWN_ATTACKS: [[u64; 64]; 2] = generate_pawn_attacks();

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// (d_rank, d_file) steps along ranks and files
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// (d_rank, d_file) steps along diagonals
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const fn generate_leaper_attacks(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attack = 0u64;

        let mut i = 0;
        while i < 8 {
            let (dr, df) = offsets[i];
            let new_rank = rank + dr;
            let new_file = file + df;

            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                attack |= 1u64 << (new_rank * 8 + new_file) as u64;
            }

            i += 1;
        }

        attacks[sq] = attack;
        sq += 1;
    }

    attacks
}

const fn generate_pawn_attacks() -> [[u64; 64]; 2] {
    let mut attacks = [[0u64; 64]; 2];
    let mut sq = 0;

    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;

        let mut white_attack = 0u64;
        if rank < 7 {
            if file > 0 {
                white_attack |= 1u64 << (sq + 7);
            }
            if file < 7 {
                white_attack |= 1u64 << (sq + 9);
            }
        }
        attacks[0][sq] = white_attack;

        let mut black_attack = 0u64;
        if rank > 0 {
            if file > 0 {
                black_attack |= 1u64 << (sq - 9);
            }
            if file < 7 {
                black_attack |= 1u64 << (sq - 7);
            }
        }
        attacks[1][sq] = black_attack;

        sq += 1;
    }

    attacks
}

/// Squares from which a pawn of `color` would attack `target`
#[inline]
pub fn pawn_attackers_of(target: Square, color: Color) -> u64 {
    // a white pawn attacks upward, so it sits where a black pawn on `target` would attack
    PAWN_ATTACKS[color.opposite().index()][target.index()]
}

/// Pop the least significant bit from a set and return its square
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> Square {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    Square::from_index(sq)
}

/// Iterate the squares of a target set, a1 side first
pub fn squares(mut bb: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || if bb == 0 { None } else { Some(pop_lsb(&mut bb)) })
}
