use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_enemy_piece, square_delta};

/// Pawn geometry: single push onto an empty square, double push from the
/// starting row through two empty squares, diagonal step only onto an
/// opposing piece. No en passant.
pub fn is_valid_pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let (d_row, d_col) = square_delta(from, to);

    if d_col == 0 && d_row == direction {
        return board.is_empty(to);
    }

    if d_col == 0 && d_row == 2 * direction && square_row(from) == color.pawn_start_row() as i8 {
        let Some(middle) = offset_square(from, direction, 0) else {
            return false;
        };
        return board.is_empty(middle) && board.is_empty(to);
    }

    if d_col.abs() == 1 && d_row == direction {
        return is_enemy_piece(board, to, color);
    }

    false
}
