//! Alpha-beta search over the mailbox board.
//!
//! Written as negamax: each node scores from the perspective of the side to
//! move, so the same code maximizes for white and minimizes for black.
//! Positions are simulated in place with `simulate_move` / `revert_move` and
//! the board is back to its original placement when a search returns.

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::MoveGenerator;
use crate::move_generation::legal_moves_king::{castle_side, castling_rook_squares};
use crate::search::board_scoring::BoardScorer;

pub const MATE_SCORE: i32 = 30000;

/// Everything needed to take a simulated move back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedMove {
    pub mv: Move,
    pub captured: Option<Piece>,
    rook: Option<(Square, Square)>,
}

/// Play `mv` on the board, moving the rook as well when the king castles.
/// Promotion is not resolved; the pawn stays a pawn on its last row.
pub fn simulate_move(board: &mut Board, mv: Move) -> SimulatedMove {
    let rook = match (mv.piece.kind, castle_side(mv.from, mv.to)) {
        (PieceKind::King, Some(side)) => {
            let squares = castling_rook_squares(mv.piece.color, side);
            board.move_piece(squares.0, squares.1);
            Some(squares)
        }
        _ => None,
    };
    let captured = board.move_piece(mv.from, mv.to);
    SimulatedMove { mv, captured, rook }
}

pub fn revert_move(board: &mut Board, simulated: SimulatedMove) {
    board.undo_move(simulated.mv.from, simulated.mv.to, simulated.captured);
    if let Some((rook_from, rook_to)) = simulated.rook {
        board.undo_move(rook_from, rook_to, None);
    }
}

/// Castling rights once `mv` has been played.
#[inline]
pub fn rights_after(castling: CastlingRights, mv: Move) -> CastlingRights {
    let mut rights = castling;
    rights.revoke_for_move(mv.piece, mv.from);
    rights
}

#[inline]
fn from_white_view(score: i32, side: Color) -> i32 {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Positive when white is better.
    pub best_score: i32,
    pub nodes: u64,
}

pub struct AlphaBeta<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    nodes: u64,
}

impl<'a, G: MoveGenerator, S: BoardScorer> AlphaBeta<'a, G, S> {
    pub fn new(generator: &'a G, scorer: &'a S) -> Self {
        Self {
            generator,
            scorer,
            nodes: 0,
        }
    }

    /// Nodes visited since construction.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of the position with `side` to move searched `depth` plies deep,
    /// positive when white is better. Depth 0 is the static score.
    pub fn evaluate(
        &mut self,
        board: &mut Board,
        castling: CastlingRights,
        side: Color,
        depth: u8,
    ) -> i32 {
        let score = self.negamax(board, castling, side, depth, -MATE_SCORE, MATE_SCORE, 0);
        from_white_view(score, side)
    }

    /// Best move for `side` at `depth` plies. Ties go to the earlier move in
    /// generator order.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        castling: CastlingRights,
        side: Color,
        depth: u8,
    ) -> SearchResult {
        let start_nodes = self.nodes;
        let moves = self.generator.generate_legal_moves(board, &castling, side);
        if moves.is_empty() || depth == 0 {
            let score = self.negamax(board, castling, side, 0, -MATE_SCORE, MATE_SCORE, 0);
            return SearchResult {
                best_move: None,
                best_score: from_white_view(score, side),
                nodes: self.nodes - start_nodes,
            };
        }

        let mut alpha = -MATE_SCORE;
        let beta = MATE_SCORE;
        let mut best_move = None;
        let mut best_score = -MATE_SCORE;

        for mv in moves {
            let simulated = simulate_move(board, mv);
            let score = -self.negamax(
                board,
                rights_after(castling, mv),
                side.opposite(),
                depth - 1,
                -beta,
                -alpha,
                1,
            );
            revert_move(board, simulated);
            trace!(from = mv.from, to = mv.to, score, "root move searched");

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            best_score: from_white_view(best_score, side),
            nodes: self.nodes - start_nodes,
        }
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        castling: CastlingRights,
        side: Color,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            // A mated side at the horizon must still score as mated.
            if is_king_in_check(board, side)
                && self
                    .generator
                    .generate_legal_moves(board, &castling, side)
                    .is_empty()
            {
                return -MATE_SCORE + i32::from(ply);
            }
            return from_white_view(self.scorer.score(board), side);
        }

        let moves = self.generator.generate_legal_moves(board, &castling, side);
        if moves.is_empty() {
            return terminal_score(board, side, ply);
        }

        let mut best = -MATE_SCORE;
        for mv in moves {
            let simulated = simulate_move(board, mv);
            let score = -self.negamax(
                board,
                rights_after(castling, mv),
                side.opposite(),
                depth - 1,
                -beta,
                -alpha,
                ply.saturating_add(1),
            );
            revert_move(board, simulated);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

fn terminal_score(board: &Board, side: Color, ply: u8) -> i32 {
    if is_king_in_check(board, side) {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::castling_rights::CastleSide;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::PositionalScorer;

    fn back_rank_position() -> Board {
        let mut board = Board::empty();
        board.place(7, Piece::new(Color::Black, PieceKind::King));
        board.place(13, Piece::new(Color::Black, PieceKind::Pawn));
        board.place(14, Piece::new(Color::Black, PieceKind::Pawn));
        board.place(15, Piece::new(Color::Black, PieceKind::Pawn));
        board.place(56, Piece::new(Color::White, PieceKind::Rook));
        board.place(62, Piece::new(Color::White, PieceKind::King));
        board
    }

    /// Plain minimax without pruning, same horizon rule, white-relative.
    fn full_minimax(board: &mut Board, castling: CastlingRights, side: Color, depth: u8, ply: u8) -> i32 {
        let generator = LegalMoveGenerator::default();
        let moves = generator.generate_legal_moves(board, &castling, side);
        if depth == 0 {
            if is_king_in_check(board, side) && moves.is_empty() {
                return from_white_view(-MATE_SCORE + i32::from(ply), side);
            }
            return PositionalScorer.score(board);
        }
        if moves.is_empty() {
            return from_white_view(terminal_score(board, side, ply), side);
        }
        let scores = moves.into_iter().map(|mv| {
            let simulated = simulate_move(board, mv);
            let score = full_minimax(board, rights_after(castling, mv), side.opposite(), depth - 1, ply + 1);
            revert_move(board, simulated);
            score
        });
        let scores: Vec<i32> = scores.collect();
        match side {
            Color::White => scores.into_iter().max().expect("moves were generated"),
            Color::Black => scores.into_iter().min().expect("moves were generated"),
        }
    }

    #[test]
    fn depth_zero_is_the_static_score() {
        let generator = LegalMoveGenerator::default();
        let mut search = AlphaBeta::new(&generator, &PositionalScorer);
        let mut board = Board::starting_position();
        assert_eq!(search.evaluate(&mut board, CastlingRights::all(), Color::White, 0), 0);
        assert_eq!(search.nodes(), 1);
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let generator = LegalMoveGenerator::default();
        let mut search = AlphaBeta::new(&generator, &PositionalScorer);
        let mut board = back_rank_position();
        let snapshot = board.clone();

        let result = search.best_move(&mut board, CastlingRights::none(), Color::White, 1);
        let best = result.best_move.expect("white has moves");
        assert_eq!((best.from, best.to), (56, 0));
        assert_eq!(result.best_score, MATE_SCORE - 1);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn black_prefers_winning_material() {
        // Black queen on d8 can take an undefended white rook on d1.
        let mut board = Board::empty();
        board.place(4, Piece::new(Color::Black, PieceKind::King));
        board.place(3, Piece::new(Color::Black, PieceKind::Queen));
        board.place(59, Piece::new(Color::White, PieceKind::Rook));
        board.place(63, Piece::new(Color::White, PieceKind::King));
        let generator = LegalMoveGenerator::default();
        let mut search = AlphaBeta::new(&generator, &PositionalScorer);

        let result = search.best_move(&mut board, CastlingRights::none(), Color::Black, 2);
        let best = result.best_move.expect("black has moves");
        assert_eq!((best.from, best.to), (3, 59));
        assert!(result.best_score < 0);
    }

    #[test]
    fn pruning_matches_full_minimax() {
        let generator = LegalMoveGenerator::default();
        let positions = [
            (Board::starting_position(), Color::White),
            (back_rank_position(), Color::White),
            (back_rank_position(), Color::Black),
        ];
        for (board, side) in positions {
            let mut pruned_board = board.clone();
            let mut full_board = board.clone();
            let mut search = AlphaBeta::new(&generator, &PositionalScorer);
            let pruned = search.evaluate(&mut pruned_board, CastlingRights::none(), side, 2);
            let full = full_minimax(&mut full_board, CastlingRights::none(), side, 2, 0);
            assert_eq!(pruned, full);
            assert_eq!(pruned_board, board);
        }
    }

    #[test]
    fn castling_simulation_moves_and_restores_the_rook() {
        let mut board = Board::empty();
        let king = Piece::new(Color::White, PieceKind::King);
        let rook = Piece::new(Color::White, PieceKind::Rook);
        board.place(60, king);
        board.place(63, rook);
        let snapshot = board.clone();

        let simulated = simulate_move(&mut board, Move::new(60, 62, king));
        assert_eq!(board.piece_at(61), Some(rook));
        assert_eq!(board.piece_at(62), Some(king));
        assert!(board.is_empty(63));

        revert_move(&mut board, simulated);
        assert_eq!(board, snapshot);

        let rights = rights_after(CastlingRights::all(), Move::new(60, 62, king));
        assert!(!rights.allows(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn stalemate_scores_as_a_draw() {
        let mut board = Board::empty();
        board.place(0, Piece::new(Color::Black, PieceKind::King));
        board.place(17, Piece::new(Color::White, PieceKind::Queen));
        board.place(63, Piece::new(Color::White, PieceKind::King));
        let generator = LegalMoveGenerator::default();
        let mut search = AlphaBeta::new(&generator, &PositionalScorer);
        assert_eq!(search.evaluate(&mut board, CastlingRights::none(), Color::Black, 2), 0);
    }
}
