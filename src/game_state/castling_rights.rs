//! Castling rights as a compact bitmask.
//!
//! A set bit means the right is still available. Bits are only ever cleared,
//! so a revoked right never comes back within a game.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{square_at, Color, Piece, PieceKind, Square};

pub const CASTLE_WHITE_KINGSIDE: u8 = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: u8 = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: u8 = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: u8 = 1 << 3;
pub const CASTLE_ALL: u8 =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    #[inline]
    pub const fn all() -> Self {
        Self(CASTLE_ALL)
    }

    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    #[inline]
    const fn mask(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn allows(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::mask(color, side) != 0
    }

    /// The king moved: both of its side's rights are gone.
    #[inline]
    pub fn revoke_king(&mut self, color: Color) {
        self.0 &= !(Self::mask(color, CastleSide::Kingside) | Self::mask(color, CastleSide::Queenside));
    }

    /// The rook on `side`'s corner moved.
    #[inline]
    pub fn revoke_rook(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::mask(color, side);
    }

    /// Clear whatever `piece` leaving `from` forfeits: both rights for a king,
    /// the matching corner's right for a rook leaving its corner.
    pub fn revoke_for_move(&mut self, piece: Piece, from: Square) {
        match piece.kind {
            PieceKind::King => self.revoke_king(piece.color),
            PieceKind::Rook => {
                let row = piece.color.back_row() as i8;
                if square_at(row, KINGSIDE_ROOK_COL) == Some(from) {
                    self.revoke_rook(piece.color, CastleSide::Kingside);
                } else if square_at(row, QUEENSIDE_ROOK_COL) == Some(from) {
                    self.revoke_rook(piece.color, CastleSide::Queenside);
                }
            }
            _ => {}
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_are_revoked_independently() {
        let mut rights = CastlingRights::all();
        rights.revoke_rook(Color::White, CastleSide::Queenside);
        assert!(rights.allows(Color::White, CastleSide::Kingside));
        assert!(!rights.allows(Color::White, CastleSide::Queenside));
        assert!(rights.allows(Color::Black, CastleSide::Queenside));

        rights.revoke_king(Color::Black);
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));
        assert!(!rights.allows(Color::Black, CastleSide::Queenside));
        assert_eq!(rights.bits(), CASTLE_WHITE_KINGSIDE);
    }

    #[test]
    fn moves_revoke_matching_rights() {
        let mut rights = CastlingRights::all();
        rights.revoke_for_move(Piece::new(Color::White, PieceKind::Rook), 63);
        assert!(!rights.allows(Color::White, CastleSide::Kingside));
        assert!(rights.allows(Color::White, CastleSide::Queenside));

        // A black rook on a white corner forfeits nothing.
        rights.revoke_for_move(Piece::new(Color::Black, PieceKind::Rook), 56);
        assert!(rights.allows(Color::White, CastleSide::Queenside));

        rights.revoke_for_move(Piece::new(Color::Black, PieceKind::Rook), 0);
        assert!(!rights.allows(Color::Black, CastleSide::Queenside));

        rights.revoke_for_move(Piece::new(Color::Black, PieceKind::King), 4);
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));

        rights.revoke_for_move(Piece::new(Color::White, PieceKind::Knight), 57);
        assert!(rights.allows(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn revocation_is_monotonic() {
        let mut rights = CastlingRights::none();
        rights.revoke_king(Color::White);
        assert_eq!(rights, CastlingRights::none());
    }
}
