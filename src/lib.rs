//! Crate root module declarations for the Parlor Chess game core.
//!
//! Exposes the board and game session, legal move rules, the evaluator and
//! suggestion search, and the console front end the binary runs.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position_history;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod suggestion;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod console {
    pub mod console_top;
    pub mod suggestion_mark;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
