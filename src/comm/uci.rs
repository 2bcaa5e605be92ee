/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

// Parses UCI protocol lines into commands and formats engine output back
// to stdout. String-prefix dispatch plus a small by-hand tokenizer for
// `position`/`go`, in the idiom of the reference's comm/uci.rs.

use crate::defs::{About, MAX_SEARCH_DEPTH};
use crate::engine::defs::CommCommand;
use crate::evaluation::defs::SCORE_CLOSE_TO_MATE;
use crate::position::defs::Move;
use crate::search::{GameTime, SearchInfo, SearchMode, SearchParams};

pub fn parse_command(line: &str) -> CommCommand {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match cmd {
        "uci" => CommCommand::Uci,
        "isready" => CommCommand::IsReady,
        "ucinewgame" => CommCommand::Position {
            fen: None,
            moves: Vec::new(),
        },
        "position" => parse_position(rest),
        "go" => CommCommand::Go(parse_go(rest)),
        "stop" => CommCommand::Stop,
        "quit" => CommCommand::Quit,
        // This engine declares no UCI options, so `setoption` is accepted
        // and ignored rather than rejected as unknown.
        "setoption" => CommCommand::SetOption,
        "board" => CommCommand::Board,
        "eval" => CommCommand::Eval,
        "help" => CommCommand::Help,
        "" => CommCommand::Unknown(String::new()),
        other => CommCommand::Unknown(other.to_string()),
    }
}

fn parse_position(rest: &str) -> CommCommand {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let moves_idx = tokens.iter().position(|&t| t == "moves");

    let head: &[&str] = match moves_idx {
        Some(i) => &tokens[..i],
        None => &tokens[..],
    };
    let moves: Vec<String> = match moves_idx {
        Some(i) => tokens[i + 1..].iter().map(|s| s.to_string()).collect(),
        None => Vec::new(),
    };

    let fen = if head.first() == Some(&"fen") {
        Some(head[1..].join(" "))
    } else {
        None
    };

    CommCommand::Position { fen, moves }
}

fn parse_go(rest: &str) -> SearchParams {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let mut gt = GameTime::default();
    let mut depth: Option<i8> = None;
    let mut movetime: Option<u64> = None;
    let mut infinite = false;

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "wtime" => gt.white_time_ms = next_u64(&tokens, &mut i),
            "btime" => gt.black_time_ms = next_u64(&tokens, &mut i),
            "winc" => gt.white_inc_ms = next_u64(&tokens, &mut i),
            "binc" => gt.black_inc_ms = next_u64(&tokens, &mut i),
            "movestogo" => gt.moves_to_go = Some(next_u64(&tokens, &mut i) as u32),
            "depth" => depth = Some(next_u64(&tokens, &mut i) as i8),
            "movetime" => movetime = Some(next_u64(&tokens, &mut i)),
            "infinite" => {
                infinite = true;
                i += 1;
            }
            // Unknown tokens are ignored along with their argument.
            _ => i += 2,
        }
    }

    let mode = if infinite {
        SearchMode::Infinite
    } else if let Some(ms) = movetime {
        SearchMode::MoveTime(ms)
    } else if let Some(d) = depth {
        SearchMode::Depth(d)
    } else {
        SearchMode::GameTime(gt)
    };

    SearchParams {
        mode,
        max_depth: depth.unwrap_or(MAX_SEARCH_DEPTH),
    }
}

fn next_u64(tokens: &[&str], i: &mut usize) -> u64 {
    let v = tokens.get(*i + 1).and_then(|s| s.parse().ok()).unwrap_or(0);
    *i += 2;
    v
}

pub fn print_id() {
    println!("id name {} {}", About::ENGINE, About::VERSION);
    println!("id author {}", About::AUTHOR);
    println!("uciok");
}

pub fn print_readyok() {
    println!("readyok");
}

pub fn print_info(info: &SearchInfo) {
    println!(
        "info score {} depth {} nps {} time {} nodes {} pv {}",
        format_score(info.score),
        info.depth,
        info.nps,
        info.time_ms,
        info.nodes,
        format_pv(&info.pv),
    );
}

pub fn print_bestmove(mv: Move) {
    println!("bestmove {}", mv.as_string());
}

pub fn print_info_string(msg: &str) {
    println!("info string {}", msg);
}

fn format_score(score: i16) -> String {
    if score.abs() >= SCORE_CLOSE_TO_MATE {
        let plies = 24_000 - score.abs();
        let moves = (plies + 1) / 2;
        let signed = if score > 0 { moves } else { -moves };
        format!("mate {}", signed)
    } else {
        format!("cp {}", score)
    }
}

fn format_pv(pv: &[Move]) -> String {
    pv.iter()
        .map(Move::as_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::defs::square_of;

    #[test]
    fn cp_scores_format_as_centipawns() {
        assert_eq!(format_score(37), "cp 37");
        assert_eq!(format_score(-250), "cp -250");
    }

    #[test]
    fn mate_scores_format_with_sign_and_move_count() {
        assert_eq!(format_score(SCORE_CLOSE_TO_MATE), "mate 50");
        assert_eq!(format_score(-SCORE_CLOSE_TO_MATE), "mate -50");
    }

    #[test]
    fn go_with_depth_overrides_game_time() {
        let params = parse_go("depth 6 wtime 100000 btime 100000");
        assert!(matches!(params.mode, SearchMode::Depth(6)));
        assert_eq!(params.max_depth, 6);
    }

    #[test]
    fn go_with_movetime_is_recognized() {
        let params = parse_go("movetime 1500");
        assert!(matches!(params.mode, SearchMode::MoveTime(1500)));
    }

    #[test]
    fn position_fen_and_trailing_moves_are_split() {
        let cmd = parse_position("fen 8/8/8/8/8/8/8/k6K w - - 0 1 moves e1e2 a1a2");
        match cmd {
            CommCommand::Position { fen, moves } => {
                assert_eq!(fen.as_deref(), Some("8/8/8/8/8/8/8/k6K w - - 0 1"));
                assert_eq!(moves, vec!["e1e2".to_string(), "a1a2".to_string()]);
            }
            _ => panic!("expected a Position command"),
        }
    }

    #[test]
    fn position_startpos_has_no_fen() {
        let cmd = parse_position("startpos moves e2e4");
        match cmd {
            CommCommand::Position { fen, moves } => {
                assert_eq!(fen, None);
                assert_eq!(moves, vec!["e2e4".to_string()]);
            }
            _ => panic!("expected a Position command"),
        }
    }

    #[test]
    fn pv_formats_as_space_separated_long_algebraic() {
        let pv = vec![Move::new(square_of(4, 1), square_of(4, 3))];
        assert_eq!(format_pv(&pv), "e2e4");
    }
}
