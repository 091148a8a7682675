use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{is_path_clear, square_delta};

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = square_delta(from, to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}
