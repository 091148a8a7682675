use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{is_path_clear, square_delta};

/// Same row or same column, but not both.
#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    let (d_row, d_col) = square_delta(from, to);
    (d_row == 0) != (d_col == 0)
}

pub fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    is_straight(from, to) && is_path_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_valid_rook_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_moves_along_rows_and_columns() {
        let mut board = Board::empty();
        board.place(56, Piece::new(Color::White, PieceKind::Rook));
        assert!(is_valid_rook_move(&board, 56, 0));
        assert!(is_valid_rook_move(&board, 56, 63));
        assert!(!is_valid_rook_move(&board, 56, 49));
        assert!(!is_valid_rook_move(&board, 56, 56));
    }

    #[test]
    fn rook_stops_at_blockers() {
        let board = Board::starting_position();
        assert!(!is_valid_rook_move(&board, 56, 40));
        assert!(!is_valid_rook_move(&board, 56, 58));
    }
}
