use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::square_delta;

/// L-shaped jump; no path check.
pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = square_delta(from, to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
