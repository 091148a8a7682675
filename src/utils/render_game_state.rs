//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed on top. Squares passed as `marked` are drawn in
//! brackets, which is how the console shows a suggested move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const FILE_LABELS: &str = "   a  b  c  d  e  f  g  h\n";

pub fn render_board(board: &Board, marked: &[Square]) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');
        for col in 0..8u8 {
            let square = row * 8 + col;
            let glyph = board.piece_at(square).map_or('·', piece_to_unicode);
            if marked.contains(&square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_LABELS.trim_end());
    out
}

/// Board plus side to move and the captured pieces of each color.
pub fn render_game_state(game: &GameState, marked: &[Square]) -> String {
    let mut out = render_board(&game.board, marked);
    out.push('\n');
    for color in [Color::White, Color::Black] {
        let captured: String = game
            .captured_pieces(color)
            .iter()
            .map(|&piece| piece_to_unicode(piece))
            .collect();
        out.push_str(&format!("captured {color}: {captured}\n"));
    }
    out.push_str(&format!("{} to move", game.side_to_move()));
    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
