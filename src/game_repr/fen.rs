use super::*;
use crate::error::{ChessError, ChessResult};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse board notation.
    ///
    /// Only the placement field is required. Missing trailing fields default
    /// to White to move, no castling, no en-passant target, clocks `0 1`.
    pub fn from_fen(fen: &str) -> ChessResult<GameState> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let invalid = |why: &str| ChessError::InvalidFen(format!("{}: {}", why, fen));

        let placement = parts.first().ok_or_else(|| invalid("empty"))?;
        let board = parse_placement(placement).map_err(|why| invalid(&why))?;

        let side_to_move = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(invalid("side to move must be w or b")),
        };

        let mut castling = CastlingRights::NONE;
        if let Some(field) = parts.get(2).filter(|f| **f != "-") {
            for c in field.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::KingSide),
                    'Q' => (Color::White, CastleSide::QueenSide),
                    'k' => (Color::Black, CastleSide::KingSide),
                    'q' => (Color::Black, CastleSide::QueenSide),
                    _ => return Err(invalid("bad castling field")),
                };
                castling.set(color, side, true);
            }
        }

        let en_passant = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(text) => Some(text.parse::<Square>().map_err(|_| invalid("bad en-passant square"))?),
        };

        let halfmove_clock = match parts.get(4) {
            None => 0,
            Some(text) => text.parse().map_err(|_| invalid("bad halfmove clock"))?,
        };
        let fullmove_number = match parts.get(5) {
            None => 1,
            Some(text) => text.parse().map_err(|_| invalid("bad fullmove number"))?,
        };

        if parts.len() > 6 {
            return Err(invalid("too many fields"));
        }

        Ok(GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Piece placement (starting from rank 8 down to rank 1)
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match Square::new(rank, file).and_then(|sq| self.board.piece_at(sq)) {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.castling.has(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&format!(" {}", castling));

        match self.en_passant {
            Some(sq) => fen.push_str(&format!(" {}", sq)),
            None => fen.push_str(" -"),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

fn parse_placement(placement: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("expected 8 ranks, found {}", ranks.len()));
    }

    let mut board = Board::empty();
    for (i, row) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file: u8 = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(format!("bad empty count '{}'", c));
                }
                file += skip as u8;
            } else {
                let piece = Piece::from_char(c).ok_or_else(|| format!("unknown piece '{}'", c))?;
                let square = Square::new(rank, file)
                    .ok_or_else(|| format!("rank {} is too long", rank + 1))?;
                if piece.piece_type == Type::King && board.king_square(piece.color).is_ok() {
                    return Err(format!("more than one {} king", piece.color));
                }
                board.place(square, piece);
                file += 1;
            }
            if file > 8 {
                return Err(format!("rank {} is too long", rank + 1));
            }
        }
        if file != 8 {
            return Err(format!("rank {} is too short", rank + 1));
        }
    }
    Ok(board)
}
