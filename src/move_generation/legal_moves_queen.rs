use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::is_path_clear;
use crate::move_generation::legal_moves_bishop::is_diagonal;
use crate::move_generation::legal_moves_rook::is_straight;

pub fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    (is_straight(from, to) || is_diagonal(from, to)) && is_path_clear(board, from, to)
}
