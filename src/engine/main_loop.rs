/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

// The UCI command loop: reads stdin to EOF or `quit`, dispatching each
// line. `position` and `go` both join the previous search worker before
// doing anything else, which is the only ordering guarantee a command
// sequence like `go ; stop ; go` needs from this loop.

use super::Engine;
use crate::comm::uci::{self, parse_command};
use crate::defs::ErrFatal;
use crate::engine::defs::CommCommand;
use crate::movegen::{generate_pseudo_legal, Generator};
use crate::position::defs::{kind_of, square_of, Move, BISHOP, KNIGHT, NULL_PIECE, QUEEN, ROOK};
use crate::position::Position;
use crate::search::{SearchParams, SearchReport};
use std::io::BufRead;
use std::time::Instant;

impl Engine {
    pub fn main_loop(&mut self) {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.expect(ErrFatal::READ_IO);
            self.dispatch(&line);
            if self.quit {
                break;
            }
        }
        self.join_worker();
    }

    fn dispatch(&mut self, line: &str) {
        match parse_command(line) {
            CommCommand::Uci => uci::print_id(),
            CommCommand::IsReady => uci::print_readyok(),
            CommCommand::Position { fen, moves } => self.set_position(fen, moves),
            CommCommand::Go(params) => self.start_search(params),
            CommCommand::Stop => self.ctrl.request_stop(),
            CommCommand::SetOption => {}
            CommCommand::Quit => {
                self.ctrl.request_stop();
                self.join_worker();
                self.quit = true;
            }
            CommCommand::Board => crate::misc::print::position(&self.position.lock()),
            CommCommand::Eval => self.print_eval(),
            CommCommand::Help => print_help(),
            CommCommand::Unknown(cmd) => {
                if !cmd.is_empty() {
                    uci::print_info_string(&format!("unknown command: {}", cmd));
                }
            }
        }
    }

    fn set_position(&mut self, fen: Option<String>, moves: Vec<String>) {
        self.join_worker();

        let base = match fen {
            Some(f) => match Position::from_fen(&f) {
                Ok(p) => p,
                Err(e) => {
                    uci::print_info_string(&e.to_string());
                    return;
                }
            },
            None => Position::new(),
        };

        let mut pos = base;
        for token in &moves {
            match apply_uci_move(&pos, token) {
                Some(mv) => {
                    let mut next = pos.clone();
                    if !next.make_move(mv) {
                        uci::print_info_string(&format!("illegal move: {}", token));
                        return; // prior position retained, rest of the token list is ignored
                    }
                    pos = next;
                }
                None => {
                    uci::print_info_string(&format!("malformed move: {}", token));
                    return;
                }
            }
        }

        *self.position.lock() = pos;
    }

    fn start_search(&mut self, params: SearchParams) {
        if let crate::search::SearchMode::Depth(d) = params.mode {
            if d <= 0 {
                uci::print_info_string("invalid depth: must be greater than zero");
                return;
            }
            if d as usize > crate::defs::MAX_PLY {
                uci::print_info_string(&format!(
                    "invalid depth: {} exceeds the {}-ply search buffer",
                    d,
                    crate::defs::MAX_PLY
                ));
                return;
            }
        }

        self.join_worker();

        let root = self.position.lock().clone();

        // Armed synchronously here, before the worker is spawned, so a
        // `stop` dispatched right after this `go` (the next line read from
        // stdin, strictly after this call returns) always lands on an
        // already-armed control instead of racing its own reset.
        let deadline = crate::search::time_for_move(&params.mode, root.white_to_move()).map(|d| Instant::now() + d);
        self.ctrl.reset(deadline);

        let ctrl = self.ctrl.clone();
        let quiet = self.quiet;

        self.worker = Some(std::thread::spawn(move || {
            let mut generator = Generator::new(root);
            crate::search::iterative_deepening(&mut generator, &params, &ctrl, |report| match report {
                SearchReport::Info(info) => {
                    if !quiet {
                        uci::print_info(&info);
                    }
                }
                SearchReport::BestMove(mv) => uci::print_bestmove(mv),
            });
        }));
    }

    fn print_eval(&self) {
        let pos = self.position.lock();
        let mut evaluated_nodes = 0u64;
        let score = crate::evaluation::evaluate(
            &pos,
            0,
            -crate::search::defs::INF,
            crate::search::defs::INF,
            &mut evaluated_nodes,
        );
        uci::print_info_string(&format!("static eval (side to move): {} cp", score));
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            handle.join().expect(ErrFatal::THREAD);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  uci              -- identify the engine and its UCI support");
    println!("  isready          -- synchronization handshake");
    println!("  position [...]   -- set up a position, optionally followed by moves");
    println!("  go [...]         -- start a search");
    println!("  stop             -- stop the current search");
    println!("  board            -- print a text diagram of the current position");
    println!("  eval             -- print the static evaluation of the current position");
    println!("  quit             -- exit the engine");
}

// Matches `token` (long algebraic, e.g. "e2e4" or "e7e8q") against the
// pseudo-legal move list so that double-push/en-passant/castling
// metadata on the returned Move is filled in correctly rather than
// reconstructed by hand.
fn apply_uci_move(pos: &Position, token: &str) -> Option<Move> {
    if token.len() < 4 {
        return None;
    }
    let from = parse_square(&token[0..2])?;
    let to = parse_square(&token[2..4])?;
    let promote_kind = if token.len() >= 5 {
        match token.as_bytes()[4] {
            b'q' => QUEEN,
            b'r' => ROOK,
            b'b' => BISHOP,
            b'n' => KNIGHT,
            _ => return None,
        }
    } else {
        NULL_PIECE
    };

    let moves = generate_pseudo_legal(pos, false, None);
    moves
        .iter()
        .find(|rm| rm.mv.from == from && rm.mv.to == to && kind_of(rm.mv.promote_to) == promote_kind)
        .map(|rm| rm.mv)
}

fn parse_square(s: &str) -> Option<i16> {
    let mut chars = s.chars();
    let file_c = chars.next()?;
    let rank_c = chars.next()?;
    if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
        return None;
    }
    Some(square_of(file_c as i16 - 'a' as i16, rank_c as i16 - '1' as i16))
}
