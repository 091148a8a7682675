//! Applying user moves to a `GameState`.
//!
//! Validation happens before any mutation, so a rejected move leaves the game
//! exactly as it was. An accepted move updates castling rights, relocates the
//! rook when castling, records captures, opens a promotion choice when a pawn
//! reaches its last row, records the placement for repetition counting, flips
//! the turn and settles the game status.

use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::castling_rights::CastleSide;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check, is_stalemate};
use crate::move_generation::legal_moves_king::{castle_side, castling_rook_squares};

/// What happened on an accepted move. Presentation maps these to sounds and
/// highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub castled: Option<CastleSide>,
    pub promotion_pending: bool,
    /// The side now to move is in check.
    pub gives_check: bool,
    pub status: GameStatus,
}

pub fn apply_move(game: &mut GameState, from: Square, to: Square) -> ChessResult<MoveOutcome> {
    for square in [from, to] {
        if !is_valid_square(square) {
            return Err(ChessError::SquareOutOfRange(square));
        }
    }
    game.ensure_accepting_moves()?;

    let piece = game.board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    if game.rules.enforce_turn_order && piece.color != game.side_to_move {
        return Err(ChessError::WrongTurn {
            expected: game.side_to_move,
        });
    }
    if !game.is_legal_move(from, to) {
        debug!(from, to, %piece, "rejected illegal move");
        return Err(ChessError::IllegalMove { from, to });
    }

    game.castling_rights.revoke_for_move(piece, from);

    let castled = if piece.kind == PieceKind::King {
        castle_side(from, to)
    } else {
        None
    };
    if let Some(side) = castled {
        let (rook_from, rook_to) = castling_rook_squares(piece.color, side);
        game.board.move_piece(rook_from, rook_to);
    }

    let captured = game.board.move_piece(from, to);
    if let Some(taken) = captured {
        game.captured[taken.color.index()].push(taken);
    }

    let promotion_pending =
        piece.kind == PieceKind::Pawn && square_row(to) == piece.color.promotion_row() as i8;
    if promotion_pending {
        game.pending_promotion = Some(to);
    }

    let key = game.board.position_key();
    let seen_before = game.history.occurrences(&key);
    game.history.push(key);

    game.side_to_move = piece.color.opposite();

    let status = if seen_before >= 2 {
        GameStatus::ThreefoldRepetition
    } else {
        settle_status(game, piece.color)
    };
    game.status = status;
    let gives_check = is_king_in_check(&game.board, game.side_to_move);

    info!(
        %piece,
        from,
        to,
        captured = ?captured.map(|p| p.to_string()),
        castled = castled.is_some(),
        promotion_pending,
        gives_check,
        %status,
        "move applied"
    );

    Ok(MoveOutcome {
        mv: Move::new(from, to, piece),
        captured,
        castled,
        promotion_pending,
        gives_check,
        status,
    })
}

/// Complete a pending promotion with one of queen, rook, bishop or knight.
pub fn promote(game: &mut GameState, kind: PieceKind) -> ChessResult<GameStatus> {
    let square = game.pending_promotion.ok_or(ChessError::NoPromotionPending)?;
    if !kind.is_promotion_choice() {
        return Err(ChessError::InvalidPromotion(kind));
    }
    let pawn = game.board.piece_at(square).ok_or(ChessError::EmptySquare(square))?;

    game.board.place(square, Piece::new(pawn.color, kind));
    game.pending_promotion = None;
    game.history.replace_last(game.board.position_key());

    if !game.status.is_over() {
        game.status = settle_status(game, pawn.color);
    }
    info!(square, %kind, status = %game.status, "pawn promoted");
    Ok(game.status)
}

/// Status after `mover` has moved and the turn has passed to the opponent.
fn settle_status(game: &mut GameState, mover: Color) -> GameStatus {
    if game.pending_promotion.is_some() {
        return GameStatus::InProgress;
    }
    let opponent = mover.opposite();
    if is_checkmate(&mut game.board, &game.castling_rights, opponent) {
        return GameStatus::Checkmate { winner: mover };
    }
    let stalemate = if game.rules.reject_self_check {
        is_strict_stalemate(game, opponent)
    } else {
        is_stalemate(&mut game.board, &game.castling_rights, opponent)
    };
    if stalemate {
        GameStatus::Stalemate
    } else {
        GameStatus::InProgress
    }
}

fn is_strict_stalemate(game: &GameState, color: Color) -> bool {
    game.board.king_square(color).is_some()
        && !is_king_in_check(&game.board, color)
        && game.legal_moves(color).is_empty()
}
