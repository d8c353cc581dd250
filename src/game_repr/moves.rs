use std::fmt;

use super::{Color, Piece, Square, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        }
    }

    /// Destination of the king when castling on this side
    pub fn king_target(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        };
        Square::from_index(color.back_rank() as usize * 8 + file)
    }

    /// (rook origin, rook destination) for this side
    pub fn rook_squares(self, color: Color) -> (Square, Square) {
        let rank = color.back_rank() as usize * 8;
        match self {
            CastleSide::KingSide => (Square::from_index(rank + 7), Square::from_index(rank + 5)),
            CastleSide::QueenSide => (Square::from_index(rank), Square::from_index(rank + 3)),
        }
    }

    /// Squares that must be empty between king and rook
    pub fn between_squares(self, color: Color) -> &'static [Square] {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => &[Square::F1, Square::G1],
            (Color::White, CastleSide::QueenSide) => &[Square::D1, Square::C1, Square::B1],
            (Color::Black, CastleSide::KingSide) => &[Square::F8, Square::G8],
            (Color::Black, CastleSide::QueenSide) => &[Square::D8, Square::C8, Square::B8],
        }
    }

    /// Squares the king crosses or lands on; none of them may be attacked
    pub fn king_path(self, color: Color) -> [Square; 2] {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => [Square::F1, Square::G1],
            (Color::White, CastleSide::QueenSide) => [Square::D1, Square::C1],
            (Color::Black, CastleSide::KingSide) => [Square::F8, Square::G8],
            (Color::Black, CastleSide::QueenSide) => [Square::D8, Square::C8],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    None,
    EnPassant,
    Castle(CastleSide),
    Promotion(Type),
}

/// A fully described transition.
///
/// The moving and captured pieces are snapshots taken at generation time, so
/// a move can be undone without consulting the board it was made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub special: SpecialMove,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            special: SpecialMove::None,
        }
    }

    pub fn with_special(mut self, special: SpecialMove) -> Move {
        self.special = special;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.special, SpecialMove::Promotion(_))
    }

    pub fn promotion(&self) -> Option<Type> {
        match self.special {
            SpecialMove::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.special, SpecialMove::Castle(_))
    }

    /// Square the captured piece stands on; differs from `to` only for en passant
    pub fn capture_square(&self) -> Square {
        match self.special {
            SpecialMove::EnPassant => Square::from_index(self.from.rank() as usize * 8 + self.to.file() as usize),
            _ => self.to,
        }
    }

    /// Coordinate notation: `e2e4`, `e7e8q`
    pub fn to_coordinate(&self) -> String {
        match self.promotion() {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.letter().to_ascii_lowercase()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// History line in the form `wP e2 to e4`
    pub fn describe(&self) -> String {
        format!("{} {} to {}", self.piece.code(), self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coordinate())
    }
}

/// Parse coordinate notation into (from, to, promotion)
pub fn parse_coordinate(text: &str) -> crate::ChessResult<(Square, Square, Option<Type>)> {
    let text = text.trim();
    let invalid = || crate::ChessError::InvalidMoveText(text.to_string());
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(invalid());
    }
    let from: Square = text[0..2].parse().map_err(|_| invalid())?;
    let to: Square = text[2..4].parse().map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match Type::from_letter(c) {
            Some(kind) if Type::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(invalid()),
        },
    };
    Ok((from, to, promotion))
}
