//! Errors surfaced at the game-session boundary.
//!
//! The rules core answers with `bool`s and possibly-empty move lists; only
//! user-facing operations (applying a move, promoting, parsing notation)
//! return `ChessError`. A rejected move never changes the game state.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square index outside `0..64`.
    #[error("square index out of range: {0}")]
    SquareOutOfRange(u8),

    /// Coordinate or move text that could not be parsed.
    #[error("invalid algebraic input: {0}")]
    InvalidAlgebraic(String),

    #[error("no piece on square {0}")]
    EmptySquare(Square),

    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Color },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn on this square is waiting for its promotion choice.
    #[error("a promotion choice is pending on square {0}")]
    PromotionPending(Square),

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotion(PieceKind),

    /// Suggestion highlight window that does not fit a timestamp.
    #[error("highlight window of {0} seconds is out of range")]
    HighlightOutOfRange(i64),

    #[error("the game is over: {0}")]
    GameOver(GameStatus),
}

pub type ChessResult<T> = Result<T, ChessError>;
