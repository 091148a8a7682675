//! The "suggest best move" search.
//!
//! Candidates are all legal moves for the side to move, stably sorted by the
//! value of whatever they capture and cut to `candidate_limit`. Each survivor
//! is simulated and scored; the first strictly highest white-positive score
//! wins, for either color, unless `mover_perspective` asks for the score seen
//! from the side to move. At depth 1 the score is the static evaluation after
//! the move, deeper settings run alpha-beta beneath each candidate.

use tracing::{debug, trace};

use crate::config::SuggestionConfig;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::MoveGenerator;
use crate::search::board_scoring::{capture_value, BoardScorer, PositionalScorer};
use crate::search::minimax::{revert_move, rights_after, simulate_move, AlphaBeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub mv: Move,
    /// Capture value used for ranking, 0 for quiet moves.
    pub capture_value: i32,
    /// Evaluation after the move, positive when white is better.
    pub score: i32,
}

/// Capture-ranked candidates, best first, at most `limit` long. Equal values
/// keep generator order.
pub fn rank_candidates(board: &Board, moves: &[Move], limit: usize) -> Vec<(Move, i32)> {
    let mut ranked: Vec<(Move, i32)> = moves
        .iter()
        .map(|&mv| {
            let value = board.piece_at(mv.to).map_or(0, |target| capture_value(target.kind));
            (mv, value)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

pub fn suggest_move<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    castling: CastlingRights,
    side: Color,
    config: &SuggestionConfig,
    generator: &G,
    scorer: &S,
) -> Option<Suggestion> {
    let moves = generator.generate_legal_moves(board, &castling, side);
    let candidates = rank_candidates(board, &moves, config.candidate_limit);
    debug!(
        side = %side,
        legal_moves = moves.len(),
        candidates = candidates.len(),
        depth = config.search_depth,
        "scoring suggestion candidates"
    );

    let mut search = AlphaBeta::new(generator, scorer);
    let mut best: Option<(Suggestion, i32)> = None;

    for (mv, value) in candidates {
        let simulated = simulate_move(board, mv);
        let score = if config.search_depth > 1 {
            search.evaluate(
                board,
                rights_after(castling, mv),
                side.opposite(),
                config.search_depth - 1,
            )
        } else {
            scorer.score(board)
        };
        revert_move(board, simulated);

        let ranking_score = match side {
            Color::Black if config.mover_perspective => -score,
            _ => score,
        };
        trace!(from = mv.from, to = mv.to, capture = value, score, "candidate scored");

        if best.map_or(true, |(_, best_score)| ranking_score > best_score) {
            let suggestion = Suggestion {
                mv,
                capture_value: value,
                score,
            };
            best = Some((suggestion, ranking_score));
        }
    }

    best.map(|(suggestion, _)| suggestion)
}

/// Suggestion for the side to move, or `None` once the game is over, while a
/// promotion choice is pending, or when there is no legal move.
pub fn suggest_for_game(game: &GameState, config: &SuggestionConfig) -> Option<Suggestion> {
    if game.status.is_over() || game.pending_promotion.is_some() {
        return None;
    }
    let mut scratch = game.board.clone();
    suggest_move(
        &mut scratch,
        game.castling_rights,
        game.side_to_move,
        config,
        &game.move_generator(),
        &PositionalScorer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    #[test]
    fn ranking_is_stable_and_truncated() {
        let mut board = Board::empty();
        board.place(20, piece(Color::Black, PieceKind::Rook));
        board.place(30, piece(Color::Black, PieceKind::Pawn));
        let queen = piece(Color::White, PieceKind::Queen);
        let moves = [
            Move::new(0, 1, queen),
            Move::new(0, 30, queen),
            Move::new(0, 2, queen),
            Move::new(0, 20, queen),
            Move::new(0, 3, queen),
        ];

        let ranked = rank_candidates(&board, &moves, 4);
        let order: Vec<(Square, i32)> = ranked.iter().map(|(mv, value)| (mv.to, *value)).collect();
        assert_eq!(order, vec![(20, 5), (30, 1), (1, 0), (2, 0)]);
    }

    #[test]
    fn suggestion_is_deterministic() {
        let game = GameState::new_game();
        let config = SuggestionConfig::default();
        let first = suggest_for_game(&game, &config).expect("opening position has moves");
        for _ in 0..5 {
            assert_eq!(suggest_for_game(&game, &config), Some(first));
        }
        assert_eq!(first.mv.piece.color, Color::White);
    }

    #[test]
    fn opening_suggestion_follows_candidate_order() {
        // No captures are available, so the first ten generated moves are the
        // candidates: a- through e-pawn pushes from a2..e2.
        let game = GameState::new_game();
        let suggestion =
            suggest_for_game(&game, &SuggestionConfig::default()).expect("opening position has moves");
        assert_eq!(suggestion.capture_value, 0);
        assert!((48..=52).contains(&suggestion.mv.from));
    }

    #[test]
    fn prefers_capturing_the_queen() {
        let mut board = Board::empty();
        board.place(60, piece(Color::White, PieceKind::King));
        board.place(4, piece(Color::Black, PieceKind::King));
        board.place(35, piece(Color::White, PieceKind::Knight));
        board.place(18, piece(Color::Black, PieceKind::Queen));
        board.place(25, piece(Color::Black, PieceKind::Pawn));
        let snapshot = board.clone();

        let suggestion = suggest_move(
            &mut board,
            CastlingRights::none(),
            Color::White,
            &SuggestionConfig::default(),
            &LegalMoveGenerator::default(),
            &PositionalScorer,
        )
        .expect("white has moves");

        assert_eq!((suggestion.mv.from, suggestion.mv.to), (35, 18));
        assert_eq!(suggestion.capture_value, 9);
        assert_eq!(board, snapshot);
    }

    fn rook_against_queen() -> Board {
        let mut board = Board::empty();
        board.place(60, piece(Color::White, PieceKind::King));
        board.place(4, piece(Color::Black, PieceKind::King));
        board.place(3, piece(Color::Black, PieceKind::Rook));
        board.place(43, piece(Color::White, PieceKind::Queen));
        board
    }

    #[test]
    fn black_suggestion_maximises_white_score_by_default() {
        let mut board = rook_against_queen();
        let moves = LegalMoveGenerator::default().generate_legal_moves(
            &mut board,
            &CastlingRights::none(),
            Color::Black,
        );
        let mut expected: Option<(Move, i32)> = None;
        for (mv, _) in rank_candidates(&board, &moves, 10) {
            let captured = board.move_piece(mv.from, mv.to);
            let score = PositionalScorer.score(&board);
            board.undo_move(mv.from, mv.to, captured);
            if expected.map_or(true, |(_, best)| score > best) {
                expected = Some((mv, score));
            }
        }
        let (expected_mv, expected_score) = expected.expect("black has moves");

        let suggestion = suggest_move(
            &mut board,
            CastlingRights::none(),
            Color::Black,
            &SuggestionConfig::default(),
            &LegalMoveGenerator::default(),
            &PositionalScorer,
        )
        .expect("black has moves");

        assert_eq!(suggestion.mv, expected_mv);
        assert_eq!(suggestion.score, expected_score);
        assert_ne!((suggestion.mv.from, suggestion.mv.to), (3, 43));
        assert!(suggestion.score > 0);
    }

    #[test]
    fn mover_perspective_lets_black_take_the_queen() {
        let mut board = rook_against_queen();
        let config = SuggestionConfig {
            mover_perspective: true,
            ..SuggestionConfig::default()
        };

        let suggestion = suggest_move(
            &mut board,
            CastlingRights::none(),
            Color::Black,
            &config,
            &LegalMoveGenerator::default(),
            &PositionalScorer,
        )
        .expect("black has moves");

        assert_eq!((suggestion.mv.from, suggestion.mv.to), (3, 43));
        assert!(suggestion.score < 0);
    }

    #[test]
    fn deeper_search_avoids_a_defended_capture() {
        // White queen on d4 can take a pawn on d5 that the black pawn on e6
        // defends. Statically the capture looks best; two plies deep it loses
        // the queen.
        let mut board = Board::empty();
        board.place(63, piece(Color::White, PieceKind::King));
        board.place(0, piece(Color::Black, PieceKind::King));
        board.place(35, piece(Color::White, PieceKind::Queen));
        board.place(27, piece(Color::Black, PieceKind::Pawn));
        board.place(20, piece(Color::Black, PieceKind::Pawn));
        let generator = LegalMoveGenerator::default();

        let shallow = suggest_move(
            &mut board,
            CastlingRights::none(),
            Color::White,
            &SuggestionConfig::default(),
            &generator,
            &PositionalScorer,
        )
        .expect("white has moves");
        assert_eq!((shallow.mv.from, shallow.mv.to), (35, 27));

        let deep_config = SuggestionConfig {
            search_depth: 2,
            ..SuggestionConfig::default()
        };
        let deep = suggest_move(
            &mut board,
            CastlingRights::none(),
            Color::White,
            &deep_config,
            &generator,
            &PositionalScorer,
        )
        .expect("white has moves");
        assert_ne!((deep.mv.from, deep.mv.to), (35, 27));
    }

    #[test]
    fn no_suggestion_after_the_game_ends() {
        let mut game = GameState::new_game();
        for (from, to) in [(53, 45), (12, 28), (54, 38), (3, 39)] {
            game.apply_move(from, to).expect("fool's mate move");
        }
        assert!(game.status.is_over());
        assert_eq!(suggest_for_game(&game, &SuggestionConfig::default()), None);
    }
}
