/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::alpha_beta::alpha_beta;
use super::defs::{new_killer_table, PrincipalVariation, SearchControl, SearchInfo, SearchParams, SearchReport, INF};
use crate::defs::MAX_SEARCH_DEPTH;
use crate::evaluation::defs::SCORE_CLOSE_TO_MATE;
use crate::movegen::{Generator, MoveType};
use crate::position::defs::Move;
use std::time::{Duration, Instant};

// Depth loop: search depth 1, 2, 3, ... until a termination condition
// fires. Emits one `SearchReport::Info` per completed depth (via
// `on_report`) and exactly one `SearchReport::BestMove` at the end.
pub fn iterative_deepening(
    gen: &mut Generator,
    params: &SearchParams,
    ctrl: &SearchControl,
    mut on_report: impl FnMut(SearchReport),
) -> Move {
    // The deadline/stop flag are armed by the caller before this is
    // invoked (see Engine::start_search), synchronously with respect to
    // the command loop, so a `stop` sent right after `go` can never race
    // ahead of arming and be silently dropped.
    let start = Instant::now();

    let max_depth = match params.mode {
        super::defs::SearchMode::Depth(d) => d.min(MAX_SEARCH_DEPTH),
        _ => params.max_depth.min(MAX_SEARCH_DEPTH),
    };

    let mut nodes = 0u64;
    let mut evaluated_nodes = 0u64;
    let mut killers = new_killer_table();
    let mut best_pv = PrincipalVariation::new();
    let mut best_move = Move::null();

    // One legal root move: still runs depth 1 to get a sane score for
    // the info line, but the move itself is already determined.
    let root_moves = gen.generate(MoveType::All, None);
    let single_legal_reply = count_legal(gen, &root_moves) == 1;

    for depth in 1..=max_depth {
        let mut pv = PrincipalVariation::new();
        let pv_move = best_pv.first().copied();
        let score = alpha_beta(
            gen,
            depth,
            -INF,
            INF,
            pv_move,
            &mut pv,
            ctrl,
            &mut killers,
            &mut nodes,
            &mut evaluated_nodes,
        );

        let stopped_mid_depth = ctrl.should_stop() && pv.is_empty();
        if stopped_mid_depth && depth > 1 {
            break;
        }

        if !pv.is_empty() {
            best_pv = pv;
            best_move = best_pv[0];
        }

        let elapsed = start.elapsed();
        on_report(SearchReport::Info(SearchInfo {
            depth,
            score,
            nodes,
            nps: nodes_per_second(nodes, elapsed),
            time_ms: elapsed.as_millis() as u64,
            pv: best_pv.clone(),
        }));

        if score.abs() >= SCORE_CLOSE_TO_MATE {
            break;
        }
        if single_legal_reply {
            break;
        }
        if ctrl.should_stop() {
            break;
        }
    }

    if best_move.is_null() {
        for rm in root_moves.iter() {
            if gen.push_move(rm.mv) {
                gen.pop_move();
                best_move = rm.mv;
                break;
            }
        }
    }

    on_report(SearchReport::BestMove(best_move));
    best_move
}

fn count_legal(gen: &mut Generator, moves: &crate::movegen::RankedMoveList) -> usize {
    let mut count = 0;
    for rm in moves.iter() {
        if gen.push_move(rm.mv) {
            count += 1;
            gen.pop_move();
        }
    }
    count
}

fn nodes_per_second(nodes: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (nodes as f64 / secs) as u64
    } else {
        nodes
    }
}
