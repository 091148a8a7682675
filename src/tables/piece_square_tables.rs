//! Positional bonus tables, one 8x8 grid per piece kind.
//!
//! Grids are written from black's side of the board: row 0 is black's back
//! rank. White looks them up with the row mirrored (`7 - row`), black uses the
//! row as is.

use crate::game_state::chess_types::*;

pub type PieceSquareTable = [[i32; 8]; 8];

pub const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 5, 10, 10, 10, 10, 5, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-30, -30, -30, -30, -30, -30, -30, -30],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [10, 10, 10, 10, 10, 10, 10, 10],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 5, 10, 10, 10, 10, 5, -10],
    [-5, 0, 10, 10, 10, 10, 0, -5],
    [0, 0, 10, 10, 10, 10, 0, 0],
    [-10, 0, 10, 10, 10, 10, 5, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

pub const KING_TABLE: PieceSquareTable = [
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [-20, -30, -30, -30, -30, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-40, -50, -50, -60, -60, -50, -50, -40],
];

#[inline]
pub const fn table_for(kind: PieceKind) -> &'static PieceSquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Bonus for `piece` standing on `square`.
#[inline]
pub fn positional_bonus(piece: Piece, square: Square) -> i32 {
    let row = square_row(square) as usize;
    let col = square_col(square) as usize;
    let row_used = match piece.color {
        Color::White => 7 - row,
        Color::Black => row,
    };
    table_for(piece.kind)[row_used][col]
}
