//! Time-limited highlight for a suggested move.

use chrono::{DateTime, Duration, Utc};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::move_notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionMark {
    pub mv: Move,
    pub notation: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SuggestionMark {
    pub fn new(mv: Move, created_at: DateTime<Utc>, highlight_seconds: i64) -> ChessResult<Self> {
        let expires_at = Duration::try_seconds(highlight_seconds)
            .and_then(|window| created_at.checked_add_signed(window))
            .ok_or(ChessError::HighlightOutOfRange(highlight_seconds))?;
        Ok(Self {
            mv,
            notation: move_notation(mv.from, mv.to, mv.piece.kind)?,
            created_at,
            expires_at,
        })
    }

    pub fn now(mv: Move, highlight_seconds: i64) -> ChessResult<Self> {
        Self::new(mv, Utc::now(), highlight_seconds)
    }

    #[inline]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.created_at && now < self.expires_at
    }

    /// Source and destination while visible, nothing once expired.
    pub fn squares_at(&self, now: DateTime<Utc>) -> Vec<Square> {
        if self.is_visible_at(now) {
            vec![self.mv.from, self.mv.to]
        } else {
            Vec::new()
        }
    }
}
