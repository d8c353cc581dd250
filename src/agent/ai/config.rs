//! Search and evaluation settings.
//!
//! [`Difficulty`] is the coarse knob exposed to players; [`SearchConfig`]
//! is what the search actually reads. Every difficulty maps onto a
//! `SearchConfig` through [`SearchConfig::from_difficulty`].

use crate::game_repr::Type;

/// AI difficulty levels that map to search depth and time controls
///
/// Each difficulty level defines the search parameters used by the Negamax algorithm:
/// - **Search depth**: How many plies ahead the AI looks
/// - **Time limit**: Maximum time allowed for move selection (None = unlimited)
///
/// Higher difficulty levels produce stronger play but take longer to compute moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Easy difficulty: Depth 2, no time limit
    ///
    /// Makes one-move tactics and answers immediate threats, little more.
    Easy,

    /// Medium difficulty: Depth 3, no time limit
    ///
    /// The classic setting for this game. Sees its own move, the reply, and
    /// its follow-up.
    #[default]
    Medium,

    /// Hard difficulty: Depth 4, no time limit
    ///
    /// Two full moves ahead. Expect a second or two per move in busy
    /// middlegames.
    Hard,

    /// Expert difficulty: Depth 5, 5 second time limit
    ///
    /// Deepest search. Iterative deepening stops starting new depths once the
    /// budget is spent.
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Get the maximum search depth for this difficulty level
    ///
    /// Returns the number of plies (half-moves) to search.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Get the time limit in milliseconds for this difficulty level
    ///
    /// Returns None for unlimited time, or Some(ms) for time-controlled search.
    pub fn time_limit_ms(&self) -> Option<u64> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => None,
            Difficulty::Hard => None,
            Difficulty::Expert => Some(5000),
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Evaluation weights in centipawns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    /// Add the piece-square table bonus of every piece
    pub use_piece_square_tables: bool,
    /// Subtracted for a king standing on ranks 3 to 6
    pub king_exposure_penalty: i32,
}

impl EvalWeights {
    /// Pure material count, nothing positional
    pub const MATERIAL_ONLY: EvalWeights = EvalWeights {
        pawn: 100,
        knight: 300,
        bishop: 330,
        rook: 500,
        queen: 900,
        use_piece_square_tables: false,
        king_exposure_penalty: 0,
    };

    /// Material value of a piece type; kings are worth nothing
    pub fn value(&self, piece_type: Type) -> i32 {
        match piece_type {
            Type::Pawn => self.pawn,
            Type::Knight => self.knight,
            Type::Bishop => self.bishop,
            Type::Rook => self.rook,
            Type::Queen => self.queen,
            Type::King => 0,
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            use_piece_square_tables: true,
            king_exposure_penalty: 20,
            ..Self::MATERIAL_ONLY
        }
    }
}

/// Everything the search needs to know besides the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth of the final iteration, in plies (at least 1)
    pub max_depth: u8,
    /// Stop starting new iterations once this many milliseconds have passed
    pub time_limit_ms: Option<u64>,
    /// Split the root moves across the rayon thread pool
    pub parallel: bool,
    pub weights: EvalWeights,
}

impl SearchConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            max_depth: difficulty.max_depth(),
            time_limit_ms: difficulty.time_limit_ms(),
            ..Self::default()
        }
    }

    /// Fixed depth, no time limit, default weights
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: Difficulty::default().max_depth(),
            time_limit_ms: None,
            parallel: false,
            weights: EvalWeights::default(),
        }
    }
}
