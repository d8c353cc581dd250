//! Game controller: one game from the first move to its outcome.
//!
//! [`Game`] owns the current [`GameState`] and everything the rules core does
//! not track: the move history, the captured pieces of each side, the
//! positions seen so far for repetition, and the final [`GameOutcome`].
//! Every move goes through validation before it touches the position.
//!
//! # Example Flow
//!
//! ```text
//! [New game] -> [Human: play("e2e4")] -> [Validate] -> [Apply] -> [Check end]
//!   -> [Computer: play_player_move] -> [Search] -> [Apply] -> [Check end] ...
//! ```

mod config;
mod outcome;

pub use config::GameConfig;
pub use outcome::{is_insufficient_material, position_outcome, GameOutcome};

use log::{info, warn};

use crate::agent::{GameResult, Player};
use crate::error::{ChessError, ChessResult};
use crate::game_repr::{parse_coordinate, Color, GameState, Move, Piece, Square, Type, UndoInfo};

/// A game in progress or finished.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    /// Position the game started from, for `reset`
    initial: GameState,
    /// Played moves with what is needed to take each back
    played: Vec<(Move, UndoInfo)>,
    /// One line per move, e.g. `wP e2 to e4`
    history: Vec<String>,
    /// Pieces each colour has lost, indexed by `Color::index`
    captured: [Vec<Piece>; 2],
    /// Position keys after every move, starting with the initial position
    seen: Vec<u64>,
    outcome: Option<GameOutcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position, White to move
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_state(GameState::from_fen(fen)?))
    }

    /// Start from the configured position, or the standard one
    pub fn from_config(config: &GameConfig) -> ChessResult<Self> {
        match &config.start_fen {
            Some(fen) => Self::from_fen(fen),
            None => Ok(Self::new()),
        }
    }

    pub fn from_state(state: GameState) -> Self {
        let mut game = Self {
            seen: vec![state.zobrist_hash()],
            initial: state.clone(),
            state,
            played: Vec::new(),
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            outcome: None,
        };
        game.check_game_end();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// Move lines in play order, e.g. `wP e2 to e4`
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Played moves in order
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.played.iter().map(|(mv, _)| *mv)
    }

    /// Pieces of `color` that have been captured, in capture order
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn result(&self) -> Option<GameResult> {
        self.outcome.map(|outcome| outcome.result())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Side whose king is attacked right now, if any
    pub fn king_in_check(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&color| self.state.is_in_check(color))
    }

    /// Legal moves of the side to move's piece on `square`
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        crate::game_repr::legal_moves_from(&self.state, square)
    }

    /// Validate and play a move given by its squares.
    ///
    /// A pawn reaching the last rank without `promotion` becomes a queen.
    /// Nothing changes when the move is rejected.
    pub fn play(&mut self, from: Square, to: Square, promotion: Option<Type>) -> ChessResult<Move> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        let mv = self.state.validate_move(from, to, promotion)?;
        self.commit(mv);
        Ok(mv)
    }

    /// Play a move written in coordinate notation (`e2e4`, `e7e8n`)
    pub fn play_coordinate(&mut self, text: &str) -> ChessResult<Move> {
        let (from, to, promotion) = parse_coordinate(text)?;
        self.play(from, to, promotion)
    }

    /// Play an already generated move after checking it is legal here
    pub fn play_move(&mut self, mv: Move) -> ChessResult<()> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        if !self.state.is_move_legal(mv) {
            warn!("rejected illegal move {}", mv);
            return Err(ChessError::IllegalMove { from: mv.from, to: mv.to });
        }
        self.commit(mv);
        Ok(())
    }

    /// Ask `player` for a move in the current position and play it.
    ///
    /// Players are told about the end of the game through `game_ended`.
    pub fn play_player_move(&mut self, player: &mut dyn Player) -> ChessResult<Move> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        let mv = player.get_move(&self.state).ok_or(ChessError::GameOver)?;
        self.play_move(mv)?;
        if let Some(result) = self.result() {
            player.game_ended(result);
        }
        Ok(mv)
    }

    /// One turn between two players: `mover` picks and plays a move, then
    /// `opponent` is told about it. Both hear the result if the move ends
    /// the game.
    pub fn play_turn(&mut self, mover: &mut dyn Player, opponent: &mut dyn Player) -> ChessResult<Move> {
        let mv = self.play_player_move(mover)?;
        opponent.opponent_moved(mv);
        if let Some(result) = self.result() {
            opponent.game_ended(result);
        }
        Ok(mv)
    }

    /// Take back the last move; returns it, or `None` at the start
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, undo) = self.played.pop()?;
        self.state.unmake_move(mv, undo);
        self.history.pop();
        self.seen.pop();
        if let Some(victim) = mv.captured {
            self.captured[victim.color.index()].pop();
        }
        self.outcome = None;
        self.check_game_end();
        Some(mv)
    }

    /// Back to the starting position with an empty history
    pub fn reset(&mut self) {
        *self = Self::from_state(self.initial.clone());
    }

    fn commit(&mut self, mv: Move) {
        let undo = self.state.make_move(mv);
        self.played.push((mv, undo));
        self.history.push(mv.describe());
        if let Some(victim) = mv.captured {
            self.captured[victim.color.index()].push(victim);
        }
        self.seen.push(self.state.zobrist_hash());
        self.check_game_end();
    }

    /// Times the current position has occurred, this occurrence included
    fn repetitions(&self) -> usize {
        match self.seen.last() {
            Some(current) => self.seen.iter().filter(|&key| key == current).count(),
            None => 0,
        }
    }

    fn check_game_end(&mut self) {
        let outcome = position_outcome(&self.state).or_else(|| {
            (self.repetitions() >= 3).then_some(GameOutcome::ThreefoldRepetition)
        });

        if let Some(outcome) = outcome {
            info!("game over after {} moves: {}", self.played.len(), outcome);
        }
        self.outcome = outcome;
    }
}
