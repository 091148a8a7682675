//! Session-level game record.
//!
//! `GameState` owns everything that used to live in loose globals: the board,
//! whose turn it is, castling rights, the repetition history, captured pieces,
//! a pending promotion and the game status. Presentation reads from it and
//! feeds moves into it; it never reads the presentation back.

use std::fmt;

use crate::config::RulesConfig;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::game_state::position_history::PositionHistory;
use crate::move_generation::legal_move_apply::{apply_move, promote, MoveOutcome};
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check};
use crate::move_generation::legal_move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::move_generation::legal_move_validator::{is_legal, leaves_king_safe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub history: PositionHistory,
    /// Captured pieces indexed by the captured piece's color, in capture order.
    pub captured: [Vec<Piece>; 2],
    pub pending_promotion: Option<Square>,
    pub status: GameStatus,
    pub rules: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::from_board(Board::starting_position(), Color::White, CastlingRights::all(), rules)
    }

    /// Constructed position, for tests and analysis.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        rules: RulesConfig,
    ) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights,
            history: PositionHistory::new(),
            captured: [Vec::new(), Vec::new()],
            pending_promotion: None,
            status: GameStatus::InProgress,
            rules,
        }
    }

    #[inline]
    /// `None` for empty squares and for indices outside the board.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !is_valid_square(square) {
            return None;
        }
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn move_generator(&self) -> LegalMoveGenerator {
        LegalMoveGenerator {
            reject_self_check: self.rules.reject_self_check,
        }
    }

    /// Legality of `from -> to` for whatever piece stands on `from`, ignoring
    /// whose turn it is.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        if !is_valid_square(from) || !is_valid_square(to) {
            return false;
        }
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        let mut scratch = self.board.clone();
        is_legal(&mut scratch, &self.castling_rights, piece, from, to)
            && (!self.rules.reject_self_check || leaves_king_safe(&mut scratch, piece, from, to))
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut scratch = self.board.clone();
        self.move_generator()
            .generate_legal_moves(&mut scratch, &self.castling_rights, color)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        let mut scratch = self.board.clone();
        is_checkmate(&mut scratch, &self.castling_rights, color)
    }

    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        apply_move(self, from, to)
    }

    pub fn promote(&mut self, kind: PieceKind) -> ChessResult<GameStatus> {
        promote(self, kind)
    }

    /// Kinds offered for a pending promotion, empty when none is pending.
    pub fn promotion_choices(&self) -> &'static [PieceKind] {
        if self.pending_promotion.is_some() {
            &PieceKind::PROMOTION_CHOICES
        } else {
            &[]
        }
    }

    pub(crate) fn ensure_accepting_moves(&self) -> ChessResult<()> {
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        if let Some(square) = self.pending_promotion {
            return Err(ChessError::PromotionPending(square));
        }
        Ok(())
    }
}
