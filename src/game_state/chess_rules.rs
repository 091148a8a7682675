//! Canonical chess-rule constants.
//!
//! Static layout literals used to set up a new game and to locate the
//! castling corners.

use crate::game_state::chess_types::{PieceKind, Square};

/// Back-rank layout from column 0 (a-file) to column 7 (h-file).
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on (e-file).
pub const KING_HOME_COL: i8 = 4;
/// Column of the kingside rook corner (h-file).
pub const KINGSIDE_ROOK_COL: i8 = 7;
/// Column of the queenside rook corner (a-file).
pub const QUEENSIDE_ROOK_COL: i8 = 0;

/// The d4, e4, d5 and e5 squares.
pub const CENTER_SQUARES: [Square; 4] = [27, 28, 35, 36];
