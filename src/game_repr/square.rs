use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

/// A board square, stored as `rank * 8 + file` (a1 = 0, h8 = 63).
///
/// A `Square` is always on the board. Stepping off the edge is expressed by
/// [`Square::offset`] returning `None`, which is what terminates sliding scans.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Build a square from rank and file, both in `0..8`
    pub const fn new(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Build a square from a 0..64 index
    pub const fn from_index(idx: usize) -> Square {
        debug_assert!(idx < 64);
        Square(idx as u8)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by `(d_rank, d_file)`; `None` once the step leaves the board
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// All 64 squares, a1 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Square((rank - b'1') * 8 + (file - b'a')))
    }
}
