use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Pieces a pawn may promote to, strongest first
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Type::Pawn => 0,
            Type::Knight => 1,
            Type::Bishop => 2,
            Type::Rook => 3,
            Type::Queen => 4,
            Type::King => 5,
        }
    }

    /// Upper-case letter used in board notation and move history
    pub const fn letter(self) -> char {
        match self {
            Type::Pawn => 'P',
            Type::Knight => 'N',
            Type::Bishop => 'B',
            Type::Rook => 'R',
            Type::Queen => 'Q',
            Type::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<Type> {
        match c.to_ascii_uppercase() {
            'P' => Some(Type::Pawn),
            'N' => Some(Type::Knight),
            'B' => Some(Type::Bishop),
            'R' => Some(Type::Rook),
            'Q' => Some(Type::Queen),
            'K' => Some(Type::King),
            _ => None,
        }
    }

    pub const fn is_slider(self) -> bool {
        matches!(self, Type::Bishop | Type::Rook | Type::Queen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank delta of a pawn push
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank of the king and rooks in the initial position
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Prefix used in move history, e.g. the `w` in `wP e2 to e4`
    pub const fn prefix(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Board-notation letter: upper case for White, lower case for Black
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = Type::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_type.letter(),
            Color::Black => self.piece_type.letter().to_ascii_lowercase(),
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    /// Two-letter code such as `wP` or `bK`
    pub fn code(&self) -> String {
        format!("{}{}", self.color.prefix(), self.piece_type.letter())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.prefix(), self.piece_type.letter())
    }
}
