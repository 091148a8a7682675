//! Coordinate and move notation.
//!
//! Files run a..h left to right and ranks 8..1 top to bottom, so square 0 is
//! a8 and square 63 is h1. Move notation is purely positional: piece letter,
//! source, destination (`Ne2e4`), with no capture or check markers.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Convert a coordinate such as `e4` to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to a coordinate such as `e4`.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !is_valid_square(square) {
        return Err(ChessError::SquareOutOfRange(square));
    }
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'8' - square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// `<letter><from><to>`, for example `Ne2e4` or `Pe7e5`.
pub fn move_notation(from: Square, to: Square, kind: PieceKind) -> ChessResult<String> {
    Ok(format!(
        "{}{}{}",
        kind.letter(),
        square_to_algebraic(from)?,
        square_to_algebraic(to)?
    ))
}

/// Parse `e2e4` or the lettered form `Ne2e4` into `(from, to)`. The letter is
/// informational; the piece is whatever stands on the source square.
pub fn parse_move_text(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    let coordinates = match text.len() {
        4 => text,
        5 if text.starts_with(|c: char| "PNBRQK".contains(c)) => &text[1..],
        _ => return Err(ChessError::InvalidAlgebraic(text.to_owned())),
    };
    if !coordinates.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&coordinates[..2])?;
    let to = algebraic_to_square(&coordinates[2..])?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_top_left_origin() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 7);
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 56);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("E2").expect("upper-case file should parse"), 52);
        assert_eq!(square_to_algebraic(35).expect("35 should convert"), "d4");
        assert_eq!(square_to_algebraic(4).expect("4 should convert"), "e8");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a").is_err());
        assert_eq!(square_to_algebraic(64), Err(ChessError::SquareOutOfRange(64)));
    }

    #[test]
    fn move_notation_uses_piece_letters() {
        assert_eq!(
            move_notation(52, 36, PieceKind::Knight).expect("valid squares"),
            "Ne2e4"
        );
        assert_eq!(
            move_notation(12, 28, PieceKind::Pawn).expect("valid squares"),
            "Pe7e5"
        );
        assert!(move_notation(52, 99, PieceKind::King).is_err());
    }

    #[test]
    fn parses_plain_and_lettered_moves() {
        assert_eq!(parse_move_text("e2e4").expect("plain move"), (52, 36));
        assert_eq!(parse_move_text(" Ng1f3 ").expect("lettered move"), (62, 45));
        assert!(parse_move_text("Xe2e4").is_err());
        assert!(parse_move_text("e2e").is_err());
        assert!(parse_move_text("e2é4").is_err());
    }
}
