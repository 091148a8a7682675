use crate::game_state::board::Board;
use crate::game_state::castling_rights::{CastleSide, CastlingRights};
use crate::game_state::chess_rules::{KING_HOME_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{is_path_clear, square_delta};

/// One step in any direction onto a safe square not touching the opposing
/// king, or a castling move two columns along the back rank.
///
/// Safety of a single step is tested by relocating the king to `to` and
/// re-running the attack test, so the king never shields its own destination.
/// The board is restored before returning.
pub fn is_valid_king_move(
    board: &mut Board,
    castling: &CastlingRights,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    let (d_row, d_col) = square_delta(from, to);

    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        if from == to {
            return false;
        }
        if let Some(enemy_king) = board.king_square(color.opposite()) {
            let (k_row, k_col) = square_delta(enemy_king, to);
            if k_row.abs() <= 1 && k_col.abs() <= 1 {
                return false;
            }
        }

        let captured = board.move_piece(from, to);
        let attacked = is_square_attacked(board, to, color);
        board.undo_move(from, to, captured);
        return !attacked;
    }

    if d_row == 0 && d_col.abs() == 2 {
        return is_valid_castling(board, castling, color, from, to);
    }

    false
}

/// Castling side of a two-column king move, if it is one.
#[inline]
pub fn castle_side(from: Square, to: Square) -> Option<CastleSide> {
    match square_delta(from, to) {
        (0, 2) => Some(CastleSide::Kingside),
        (0, -2) => Some(CastleSide::Queenside),
        _ => None,
    }
}

/// `(rook_from, rook_to)` for `color` castling on `side`.
pub fn castling_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    let row = color.back_row() as i8;
    let (rook_col, rook_target_col) = match side {
        CastleSide::Kingside => (KINGSIDE_ROOK_COL, KING_HOME_COL + 1),
        CastleSide::Queenside => (QUEENSIDE_ROOK_COL, KING_HOME_COL - 1),
    };
    // Both columns are constants inside the board.
    let rook_from = (row * 8 + rook_col) as Square;
    let rook_to = (row * 8 + rook_target_col) as Square;
    (rook_from, rook_to)
}

#[inline]
pub fn king_home_square(color: Color) -> Square {
    (color.back_row() as i8 * 8 + KING_HOME_COL) as Square
}

fn is_valid_castling(
    board: &Board,
    castling: &CastlingRights,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    let Some(side) = castle_side(from, to) else {
        return false;
    };
    if from != king_home_square(color) || !castling.allows(color, side) {
        return false;
    }

    let (rook_from, _) = castling_rook_squares(color, side);
    if board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    if is_square_attacked(board, from, color) || !is_path_clear(board, from, rook_from) {
        return false;
    }

    let step = if side == CastleSide::Kingside { 1 } else { -1 };
    [step, 2 * step].into_iter().all(|d_col| {
        offset_square(from, 0, d_col).is_some_and(|sq| !is_square_attacked(board, sq, color))
    })
}
