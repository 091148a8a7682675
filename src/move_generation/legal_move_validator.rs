//! Single-move legality, independent of whose turn it is.
//!
//! Checks run in a fixed order: no self-capture, no king capture, a king
//! already in check must be rescued by this very move, then the per-kind
//! geometry rule. A move that merely exposes a king that was safe before is
//! not rejected here; `leaves_king_safe` covers that for callers that want it.

use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, resolves_check};
use crate::move_generation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_generation::legal_moves_king::is_valid_king_move;
use crate::move_generation::legal_moves_knight::is_valid_knight_move;
use crate::move_generation::legal_moves_pawn::is_valid_pawn_move;
use crate::move_generation::legal_moves_queen::is_valid_queen_move;
use crate::move_generation::legal_moves_rook::is_valid_rook_move;

pub fn is_legal(
    board: &mut Board,
    castling: &CastlingRights,
    piece: Piece,
    from: Square,
    to: Square,
) -> bool {
    if from == to {
        return false;
    }

    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color || target.kind == PieceKind::King {
            return false;
        }
    }

    if is_king_in_check(board, piece.color) && !resolves_check(board, piece, from, to) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(board, piece.color, from, to),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(board, from, to),
        PieceKind::Rook => is_valid_rook_move(board, from, to),
        PieceKind::Queen => is_valid_queen_move(board, from, to),
        PieceKind::King => is_valid_king_move(board, castling, piece.color, from, to),
    }
}

/// After `from -> to` the mover's king is not attacked. Same check as
/// `resolves_check`, applied whether or not the king was in check.
#[inline]
pub fn leaves_king_safe(board: &mut Board, piece: Piece, from: Square, to: Square) -> bool {
    resolves_check(board, piece, from, to)
}
