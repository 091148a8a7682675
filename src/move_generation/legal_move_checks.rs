//! Attack, check and checkmate detection.
//!
//! A missing king is never "in check": simulations may briefly leave a board
//! without one, and every detector degrades to `false` instead of failing.

use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::move_generation::legal_move_shared::{
    DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Whether a piece of `defender` standing on `square` would be attacked by
/// the opposing side. Kings are not counted as attackers; king adjacency is
/// handled by the king move rule.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let attacker = defender.opposite();

    // An attacking pawn sits one row behind the square, from its own point of view.
    let pawn_row = -attacker.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(from) = offset_square(square, pawn_row, d_col) {
            if board.piece_at(from) == Some(Piece::new(attacker, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(from) = offset_square(square, d_row, d_col) {
            if board.piece_at(from) == Some(Piece::new(attacker, PieceKind::Knight)) {
                return true;
            }
        }
    }

    is_attacked_along(board, square, attacker, &ORTHOGONAL_DIRECTIONS, PieceKind::Rook)
        || is_attacked_along(board, square, attacker, &DIAGONAL_DIRECTIONS, PieceKind::Bishop)
}

/// Ray-cast from `square`, stopping at the first occupied square on each ray.
fn is_attacked_along(
    board: &Board,
    square: Square,
    attacker: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = offset_square(square, d_row, d_col);
        while let Some(sq) = current {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == attacker
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = offset_square(sq, d_row, d_col);
        }
    }
    false
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// Simulate `from -> to` and report whether the mover's king is safe
/// afterwards. The board is restored before returning.
pub fn resolves_check(board: &mut Board, piece: Piece, from: Square, to: Square) -> bool {
    let captured = board.move_piece(from, to);
    let still_in_check = is_king_in_check(board, piece.color);
    board.undo_move(from, to, captured);
    !still_in_check
}

/// `color` is in check and no generated move gets it out.
pub fn is_checkmate(board: &mut Board, castling: &CastlingRights, color: Color) -> bool {
    if !is_king_in_check(board, color) {
        return false;
    }

    let moves = LegalMoveGenerator::default().generate_legal_moves(board, castling, color);
    !moves
        .iter()
        .any(|mv| resolves_check(board, mv.piece, mv.from, mv.to))
}

/// `color` is not in check but has no move at all.
pub fn is_stalemate(board: &mut Board, castling: &CastlingRights, color: Color) -> bool {
    if board.king_square(color).is_none() || is_king_in_check(board, color) {
        return false;
    }
    LegalMoveGenerator::default()
        .generate_legal_moves(board, castling, color)
        .is_empty()
}
