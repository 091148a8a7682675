use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// `(to_row - from_row, to_col - from_col)`.
#[inline]
pub fn square_delta(from: Square, to: Square) -> (i8, i8) {
    (
        square_row(to) - square_row(from),
        square_col(to) - square_col(from),
    )
}

/// Every square strictly between `from` and `to` is empty. Steps by the unit
/// vector from source toward target, so callers must only pass aligned pairs.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = square_delta(from, to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut row = square_row(from) + step_row;
    let mut col = square_col(from) + step_col;
    while row != square_row(to) || col != square_col(to) {
        match square_at(row, col) {
            Some(square) if board.is_empty(square) => {}
            _ => return false,
        }
        row += step_row;
        col += step_col;
    }
    true
}

#[inline]
pub fn is_own_piece(board: &Board, square: Square, color: Color) -> bool {
    board.piece_at(square).is_some_and(|p| p.color == color)
}

#[inline]
pub fn is_enemy_piece(board: &Board, square: Square, color: Color) -> bool {
    board.piece_at(square).is_some_and(|p| p.color != color)
}
