//! Full legal move enumeration.
//!
//! Every (source, destination) pair is run through `is_legal`. Output is
//! ordered by ascending source square, then ascending destination square, so
//! move lists are reproducible and search tie-breaks are stable.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, resolves_check};
use crate::move_generation::legal_move_validator::{is_legal, leaves_king_safe};

pub trait MoveGenerator: Send + Sync {
    /// All moves `color` may play. The board is mutated in place and restored.
    fn generate_legal_moves(
        &self,
        board: &mut Board,
        castling: &CastlingRights,
        color: Color,
    ) -> Vec<Move>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator {
    /// Drop moves that leave the mover's king attacked even when it was not
    /// in check beforehand.
    pub reject_self_check: bool,
}

impl LegalMoveGenerator {
    pub const fn strict() -> Self {
        Self {
            reject_self_check: true,
        }
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        board: &mut Board,
        castling: &CastlingRights,
        color: Color,
    ) -> Vec<Move> {
        let in_check = is_king_in_check(board, color);
        let movers: Vec<(Square, Piece)> = board.pieces_of(color).collect();

        let mut moves = Vec::with_capacity(64);
        for (from, piece) in movers {
            for to in 0..BOARD_SQUARES {
                if to == from || !is_legal(board, castling, piece, from, to) {
                    continue;
                }
                if in_check && !resolves_check(board, piece, from, to) {
                    continue;
                }
                if self.reject_self_check && !leaves_king_safe(board, piece, from, to) {
                    continue;
                }
                moves.push(Move::new(from, to, piece));
            }
        }

        debug!(
            side = %color,
            in_check,
            legal_moves = moves.len(),
            "generated legal moves"
        );
        moves
    }
}
