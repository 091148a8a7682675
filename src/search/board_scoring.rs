//! Static board evaluation.
//!
//! Search and the evaluation bar go through the `BoardScorer` trait so another
//! heuristic can be dropped in without touching either.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CENTER_SQUARES;
use crate::game_state::chess_types::*;
use crate::tables::piece_square_tables::positional_bonus;

/// Bonus per center square occupied, added for white and subtracted for black.
pub const CENTER_CONTROL_BONUS: i32 = 30;
/// Score at which the evaluation bar saturates on one side.
pub const EVALUATION_BAR_RANGE: f64 = 4000.0;

pub trait BoardScorer: Send + Sync {
    /// Score of the placement, positive when white is better. Depends on the
    /// board only, never on whose turn it is.
    fn score(&self, board: &Board) -> i32;
}

/// Material plus piece-square bonuses plus center occupancy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    fn center_control(board: &Board) -> i32 {
        CENTER_SQUARES
            .iter()
            .filter_map(|&square| board.piece_at(square))
            .map(|piece| match piece.color {
                Color::White => CENTER_CONTROL_BONUS,
                Color::Black => -CENTER_CONTROL_BONUS,
            })
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> i32 {
        let placement: i32 = board
            .occupied()
            .map(|(square, piece)| {
                let value = Self::piece_value(piece.kind) + positional_bonus(piece, square);
                match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                }
            })
            .sum();
        placement + Self::center_control(board)
    }
}

/// Coarse value used only to rank suggestion candidates by what they capture.
/// Kings are never captured, so they rank as nothing.
#[inline]
pub const fn capture_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Height of the evaluation bar in percent, 50 for a level position.
pub fn evaluation_bar_percent(score: i32) -> f64 {
    (50.0 + f64::from(score) / EVALUATION_BAR_RANGE * 50.0).clamp(0.0, 100.0)
}
