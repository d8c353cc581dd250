use log::warn;

use super::attacks::is_attacked;
use super::piece_moves::MoveList;
use super::*;
use crate::error::{ChessError, ChessResult};

impl GameState {
    /// Pseudo-legal moves of the piece on `from` into `moves`
    fn piece_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(from, piece, moves),
            Type::Knight => self.knight_moves_into(from, piece, moves),
            Type::Bishop => self.bishop_moves_into(from, piece, moves),
            Type::Rook => self.rook_moves_into(from, piece, moves),
            Type::Queen => self.queen_moves_into(from, piece, moves),
            Type::King => self.king_moves_into(from, piece, moves),
        }
    }

    /// Every pseudo-legal move of `color`, in board order a1..h8
    pub fn pseudo_legal_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.board.pieces_of(color) {
            self.piece_moves_into(from, piece, &mut moves);
        }
        moves
    }

    /// Drop every move that leaves the mover's own king attacked.
    ///
    /// Each candidate is played on a scratch copy and taken back; the order of
    /// the surviving moves is preserved.
    fn retain_legal(&self, moves: &mut MoveList) {
        let mut scratch = self.clone();
        moves.retain(|mv| {
            let undo = scratch.make_move(*mv);
            let safe = match scratch.board.king_square(mv.piece.color) {
                Ok(king) => !is_attacked(&scratch.board, king, mv.piece.color.opposite()),
                Err(_) => true,
            };
            scratch.unmake_move(*mv, undo);
            safe
        });
    }

    /// All legal moves of `color`, whether or not it is that side's turn
    pub fn legal_moves_for(&self, color: Color) -> MoveList {
        let mut moves = self.pseudo_legal_moves_for(color);
        self.retain_legal(&mut moves);
        moves
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.side_to_move)
    }

    /// Legal moves of the piece on `from`; empty for an empty square
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.board.piece_at(from) {
            self.piece_moves_into(from, piece, &mut moves);
            self.retain_legal(&mut moves);
        }
        moves
    }

    /// Checks if a move is legal in the current position
    pub fn is_move_legal(&self, mv: Move) -> bool {
        mv.piece.color == self.side_to_move && self.legal_moves_from(mv.from).contains(&mv)
    }

    /// Resolve a (from, to, promotion) request into the legal move it names.
    ///
    /// A pawn reaching the far rank without a promotion piece promotes to a
    /// queen.
    pub fn validate_move(&self, from: Square, to: Square, promotion: Option<Type>) -> ChessResult<Move> {
        let piece = self.board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            warn!("rejected {}{}: {} piece on {} but {} to move", from, to, piece.color, from, self.side_to_move);
            return Err(ChessError::WrongSide(from));
        }

        let wanted = promotion.unwrap_or(Type::Queen);
        self.legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.to == to && mv.promotion().map_or(true, |kind| kind == wanted))
            .ok_or_else(|| {
                warn!("rejected illegal move {}{}", from, to);
                ChessError::IllegalMove { from, to }
            })
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.clone();
        perft_in_place(&mut pos, depth)
    }

    /// Perft count for each first-level move, keyed by coordinate text
    pub fn divide(&self, depth: u32) -> Vec<(String, u64)> {
        let mut pos = self.clone();
        let mut out = Vec::new();
        for mv in self.legal_moves() {
            let undo = pos.make_move(mv);
            let count = if depth > 1 { perft_in_place(&mut pos, depth - 1) } else { 1 };
            pos.unmake_move(mv, undo);
            out.push((mv.to_coordinate(), count));
        }
        out
    }
}

fn perft_in_place(pos: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.legal_moves();

    // Bulk counting at depth 1
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let undo = pos.make_move(mv);
        nodes += perft_in_place(pos, depth - 1);
        pos.unmake_move(mv, undo);
    }
    nodes
}

/// All legal moves for the side to move
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves().into_vec()
}

/// Legal moves of the piece on `square`.
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn legal_moves_from(state: &GameState, square: Square) -> Vec<Move> {
    match state.board.piece_at(square) {
        Some(piece) if piece.color == state.side_to_move => state.legal_moves_from(square).into_vec(),
        _ => Vec::new(),
    }
}
