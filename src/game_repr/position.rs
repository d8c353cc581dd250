use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME STATE AND APPLYING / UNDOING MOVES
 */

/// Castling rights, one flag per (colour, side).
///
/// A right only says the king and that rook have not moved and the rook has
/// not been captured; the remaining castling conditions are checked at
/// generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights([bool; 4]);

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights([true; 4]);
    pub const NONE: CastlingRights = CastlingRights([false; 4]);

    #[inline]
    fn slot(color: Color, side: CastleSide) -> usize {
        color.index() * 2 + side.index()
    }

    #[inline]
    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.0[Self::slot(color, side)]
    }

    pub fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        self.0[Self::slot(color, side)] = value;
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.set(color, side, false);
    }

    pub fn revoke_all(&mut self, color: Color) {
        for side in CastleSide::BOTH {
            self.revoke(color, side);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&r| !r)
    }

    /// Drop the right tied to a rook home square, if `square` is one
    fn touch_corner(&mut self, square: Square) {
        match square {
            Square::H1 => self.revoke(Color::White, CastleSide::KingSide),
            Square::A1 => self.revoke(Color::White, CastleSide::QueenSide),
            Square::H8 => self.revoke(Color::Black, CastleSide::KingSide),
            Square::A8 => self.revoke(Color::Black, CastleSide::QueenSide),
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Everything `make_move` overwrites that cannot be recomputed from the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn may capture onto en passant; set only right after a double push
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard initial position, White to move
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Hand-built position with no castling rights and no en-passant target
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Apply a move in place and return what is needed to take it back.
    ///
    /// `mv` must have been generated for this exact state; the board is not
    /// consulted for the moving or captured piece.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        debug_assert_eq!(
            self.board.piece_at(mv.from),
            Some(mv.piece),
            "move {} does not match the board",
            mv
        );

        let undo = UndoInfo {
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };
        let color = mv.piece.color;

        if mv.is_capture() {
            self.board.remove(mv.capture_square());
        }
        self.board.remove(mv.from);

        match mv.special {
            SpecialMove::Promotion(kind) => {
                self.board.place(mv.to, Piece::new(color, kind));
            }
            SpecialMove::Castle(side) => {
                self.board.place(mv.to, mv.piece);
                let (rook_from, rook_to) = side.rook_squares(color);
                if let Some(rook) = self.board.remove(rook_from) {
                    self.board.place(rook_to, rook);
                }
            }
            SpecialMove::None | SpecialMove::EnPassant => {
                self.board.place(mv.to, mv.piece);
            }
        }

        // Rights: the king moving drops both, anything leaving or landing on
        // a rook home square drops that corner
        if mv.piece.piece_type == Type::King {
            self.castling.revoke_all(color);
        }
        self.castling.touch_corner(mv.from);
        self.castling.touch_corner(mv.to);

        self.en_passant = if mv.piece.piece_type == Type::Pawn
            && (mv.to.rank() as i8 - mv.from.rank() as i8).abs() == 2
        {
            mv.from.offset(color.forward(), 0)
        } else {
            None
        };

        if mv.piece.piece_type == Type::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opposite();

        undo
    }

    /// Exact inverse of `make_move` for the same `mv` and its `UndoInfo`
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        let color = mv.piece.color;

        self.board.remove(mv.to);
        if let SpecialMove::Castle(side) = mv.special {
            let (rook_from, rook_to) = side.rook_squares(color);
            if let Some(rook) = self.board.remove(rook_to) {
                self.board.place(rook_from, rook);
            }
        }
        self.board.place(mv.from, mv.piece);
        if let Some(captured) = mv.captured {
            self.board.place(mv.capture_square(), captured);
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.side_to_move = color;
    }

    /// Successor state; `self` is left untouched
    pub fn apply(&self, mv: Move) -> GameState {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

/// Successor of `state` after the legal move `mv`
pub fn apply_move(state: &GameState, mv: Move) -> GameState {
    state.apply(mv)
}
