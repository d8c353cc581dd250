use std::fmt;

use super::{Color, Piece, Square, Type};
use crate::error::{ChessError, ChessResult};

/// 8x8 grid of optional pieces.
///
/// Pure data container: it knows nothing about legality. King squares are
/// cached on `place`/`remove` so `king_square` is a lookup.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    kings: [Option<Square>; 2],
}

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            kings: [None; 2],
        }
    }

    /// The standard initial position
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for color in [Color::White, Color::Black] {
                let back = Square::new(color.back_rank(), file).unwrap_or(Square::A1);
                let pawn = Square::new(color.pawn_start_rank(), file).unwrap_or(Square::A1);
                board.place(back, Piece::new(color, piece_type));
                board.place(pawn, Piece::new(color, Type::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    #[inline]
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        matches!(self.squares[square.index()], Some(p) if p.color == color)
    }

    /// Put `piece` on `square`, replacing whatever stood there
    pub fn place(&mut self, square: Square, piece: Piece) {
        if let Some(old) = self.squares[square.index()] {
            if old.piece_type == Type::King && self.kings[old.color.index()] == Some(square) {
                self.kings[old.color.index()] = None;
            }
        }
        if piece.piece_type == Type::King {
            self.kings[piece.color.index()] = Some(square);
        }
        self.squares[square.index()] = Some(piece);
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.squares[square.index()].take();
        if let Some(p) = piece {
            if p.piece_type == Type::King && self.kings[p.color.index()] == Some(square) {
                self.kings[p.color.index()] = None;
            }
        }
        piece
    }

    /// Square of the king of `color`.
    ///
    /// Fails with `InvariantViolation` when that side has no king, which only
    /// happens on hand-built boards.
    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        self.kings[color.index()]
            .ok_or_else(|| ChessError::InvariantViolation(format!("no {} king on the board", color)))
    }

    /// Occupied squares with their pieces, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|p| (Square::from_index(idx), p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn count(&self, color: Color, piece_type: Type) -> usize {
        self.pieces_of(color)
            .filter(|(_, p)| p.piece_type == piece_type)
            .count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map(|p| p.to_char())
                    .unwrap_or('.');
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
