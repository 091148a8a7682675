//! Line-oriented console front end and command loop.
//!
//! Reads one command per line from stdin, drives a `GameState` and writes
//! replies to stdout. Bad input gets a one-line diagnostic and never changes
//! the game.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::console::suggestion_mark::SuggestionMark;
use crate::errors::ChessError;
use crate::game_state::castling_rights::CastleSide;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::legal_move_apply::MoveOutcome;
use crate::search::board_scoring::{evaluation_bar_percent, BoardScorer, PositionalScorer};
use crate::search::suggestion::suggest_for_game;
use crate::utils::algebraic::{move_notation, parse_move_text};
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
commands:
  new                 start a new game
  board               show the board
  move <from><to>     play a move, e.g. `move e2e4` or just `e2e4`
  promote <q|r|b|n>   choose the piece for a pending promotion
  moves               list legal moves for the side to move
  suggest             suggest a move and mark it on the board
  eval                static evaluation and evaluation bar
  status              game status
  help                this text
  quit                leave";

pub fn run_stdio_loop(config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config);

    writeln!(stdout, "{}", render_game_state(&console.game, &[]))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game: GameState,
    config: EngineConfig,
    mark: Option<SuggestionMark>,
    clock: fn() -> DateTime<Utc>,
}

impl ConsoleState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            game: GameState::with_rules(config.rules),
            config,
            mark: None,
            clock: Utc::now,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        match cmd {
            "new" => {
                self.game = GameState::with_rules(self.config.rules);
                self.mark = None;
                info!("new game");
                writeln!(out, "new game, white to move")?;
            }
            "board" => {
                let marked = self.marked_squares();
                writeln!(out, "{}", render_game_state(&self.game, &marked))?;
            }
            "move" => match arg {
                Some(text) => self.handle_move(text, out)?,
                None => report(out, "usage: move <from><to>")?,
            },
            "promote" => self.handle_promote(arg, out)?,
            "moves" => self.handle_moves(out)?,
            "suggest" => self.handle_suggest(out)?,
            "eval" => {
                let score = PositionalScorer.score(&self.game.board);
                writeln!(
                    out,
                    "eval {score} (bar {:.1}%)",
                    evaluation_bar_percent(score)
                )?;
            }
            "status" => self.handle_status(out)?,
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            _ if parse_move_text(cmd).is_ok() => self.handle_move(cmd, out)?,
            _ => report(out, &format!("unknown command: {cmd}"))?,
        }

        Ok(false)
    }

    fn marked_squares(&self) -> Vec<Square> {
        let now = (self.clock)();
        self.mark
            .as_ref()
            .map(|mark| mark.squares_at(now))
            .unwrap_or_default()
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let outcome = parse_move_text(text).and_then(|(from, to)| self.game.apply_move(from, to));
        match outcome {
            Ok(outcome) => {
                self.mark = None;
                writeln!(out, "{}", describe_outcome(&outcome))?;
                if outcome.promotion_pending {
                    writeln!(out, "promotion pending: promote q|r|b|n")?;
                }
                Ok(())
            }
            Err(err) => report_error(out, &err),
        }
    }

    fn handle_promote(&mut self, arg: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let mut chars = arg.unwrap_or_default().chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(ch), None) => PieceKind::from_promotion_char(ch),
            _ => None,
        };
        let Some(kind) = kind else {
            return report(out, "usage: promote <q|r|b|n>");
        };
        match self.game.promote(kind) {
            Ok(status) => {
                writeln!(out, "promoted to {kind}")?;
                if status.is_over() {
                    writeln!(out, "{status}")?;
                }
                Ok(())
            }
            Err(err) => report_error(out, &err),
        }
    }

    fn handle_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let side = self.game.side_to_move();
        let moves = self.game.legal_moves(side);
        let listed: Vec<String> = moves
            .iter()
            .filter_map(|mv| move_notation(mv.from, mv.to, mv.piece.kind).ok())
            .collect();
        writeln!(out, "{} legal moves for {side}: {}", listed.len(), listed.join(" "))
    }

    fn handle_suggest(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(suggestion) = suggest_for_game(&self.game, &self.config.suggestion) else {
            return writeln!(out, "no suggestion");
        };
        match SuggestionMark::new(
            suggestion.mv,
            (self.clock)(),
            self.config.suggestion.highlight_seconds,
        ) {
            Ok(mark) => {
                info!(notation = %mark.notation, score = suggestion.score, "suggested move");
                writeln!(out, "suggest {} (score {})", mark.notation, suggestion.score)?;
                self.mark = Some(mark);
                Ok(())
            }
            Err(err) => report_error(out, &err),
        }
    }

    fn handle_status(&self, out: &mut impl Write) -> io::Result<()> {
        let side = self.game.side_to_move();
        match self.game.status {
            GameStatus::InProgress => {
                let check = if self.game.is_king_in_check(side) {
                    ", in check"
                } else {
                    ""
                };
                writeln!(out, "in progress, {side} to move{check}")?;
            }
            status => writeln!(out, "{status}")?,
        }
        if let Some(square) = self.game.pending_promotion {
            writeln!(out, "promotion pending on square {square}")?;
        }
        Ok(())
    }
}

fn describe_outcome(outcome: &MoveOutcome) -> String {
    let mv = outcome.mv;
    let mut text = move_notation(mv.from, mv.to, mv.piece.kind).unwrap_or_default();
    if let Some(captured) = outcome.captured {
        text.push_str(&format!(" captures {captured}"));
    }
    if let Some(side) = outcome.castled {
        text.push_str(&format!(" castles {}", side_name(side)));
    }
    if outcome.gives_check && !outcome.status.is_over() {
        text.push_str(" check");
    }
    if outcome.status.is_over() {
        text.push_str(&format!(", {}", outcome.status));
    }
    text
}

fn side_name(side: CastleSide) -> &'static str {
    match side {
        CastleSide::Kingside => "kingside",
        CastleSide::Queenside => "queenside",
    }
}

fn report(out: &mut impl Write, message: &str) -> io::Result<()> {
    warn!(reason = message, "rejected console input");
    writeln!(out, "error: {message}")
}

fn report_error(out: &mut impl Write, err: &ChessError) -> io::Result<()> {
    report(out, &err.to_string())
}
