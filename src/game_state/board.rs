//! Mailbox board: the single authoritative piece placement.
//!
//! `move_piece` and `undo_move` are exact inverses. Every speculative move made
//! by legality probing or search is undone before the next one is tried, so
//! the board compares equal to its pre-simulation snapshot afterwards.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SQUARES as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SQUARES as usize],
        }
    }

    /// Standard starting placement with black on rows 0-1 and white on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as u8;
            board.place(col, Piece::new(Color::Black, *kind));
            board.place(8 + col, Piece::new(Color::Black, PieceKind::Pawn));
            board.place(48 + col, Piece::new(Color::White, PieceKind::Pawn));
            board.place(56 + col, Piece::new(Color::White, *kind));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = Some(piece);
    }

    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Relocate whatever stands on `from` to `to`, returning the piece that was
    /// on `to` before.
    #[inline]
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from as usize].take();
        std::mem::replace(&mut self.squares[to as usize], moving)
    }

    /// Exact inverse of `move_piece(from, to)` that returned `captured`.
    #[inline]
    pub fn undo_move(&mut self, from: Square, to: Square, captured: Option<Piece>) {
        let moved = std::mem::replace(&mut self.squares[to as usize], captured);
        self.squares[from as usize] = moved;
    }

    /// First square (ascending) holding `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Occupied squares in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(square, piece)| piece.map(|p| (square as Square, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Placement-only key used for repetition counting. Side to move and
    /// castling rights are not part of it.
    pub fn position_key(&self) -> String {
        self.squares
            .iter()
            .map(|square| square.map_or('.', Piece::key_char))
            .collect()
    }
}
