/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::defs::{PrincipalVariation, SearchControl, INF};
use super::qsearch::quiescence;
use super::sorting::{apply_pv_bonus, sort_by_ranking};
use crate::evaluation::defs::{lost_score, DRAW_SCORE};
use crate::movegen::{Generator, Killers, MoveType};
use crate::position::defs::Move;

// Fail-hard negamax alpha-beta. Returns a score from the side-to-move's
// perspective and fills `pv` with the line leading to it. `killers` is
// ply-indexed and shared across the whole iterative-deepening call.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    gen: &mut Generator,
    mut depth: i8,
    mut alpha: i16,
    beta: i16,
    pv_move: Option<Move>,
    pv: &mut PrincipalVariation,
    ctrl: &SearchControl,
    killers: &mut [Killers],
    nodes: &mut u64,
    evaluated_nodes: &mut u64,
) -> i16 {
    pv.clear();

    if ctrl.should_stop() {
        return alpha;
    }

    *nodes += 1;

    let in_check = gen.current().side_to_move_in_check();
    if in_check {
        depth += 1;
    }

    if depth <= 0 {
        return quiescence(gen, alpha, beta, ctrl, nodes, evaluated_nodes);
    }

    let ply = gen.ply();
    let killer_pair = killers.get(ply).copied();
    let mut moves = gen.generate(MoveType::All, killer_pair.as_ref());
    apply_pv_bonus(&mut moves, pv_move);
    sort_by_ranking(&mut moves);

    let mut best_score = -INF;
    let mut legal_move_count = 0u32;
    let mut node_pv = PrincipalVariation::new();

    for rm in moves.iter() {
        if !gen.push_move(rm.mv) {
            continue;
        }
        legal_move_count += 1;

        let score = -alpha_beta(
            gen,
            depth - 1,
            -beta,
            -alpha,
            None,
            &mut node_pv,
            ctrl,
            killers,
            nodes,
            evaluated_nodes,
        );
        gen.pop_move();

        if ctrl.should_stop() {
            return best_score.max(alpha);
        }

        if score > best_score {
            best_score = score;
            pv.clear();
            pv.push(rm.mv);
            pv.extend(node_pv.iter().copied());
        }

        if score > alpha {
            alpha = score;
        }

        if alpha >= beta {
            if !rm.tactical {
                store_killer(killers, ply, rm.mv);
            }
            return beta;
        }
    }

    if legal_move_count == 0 {
        return if in_check { lost_score(depth) } else { DRAW_SCORE };
    }

    best_score
}

fn store_killer(killers: &mut [Killers], ply: usize, mv: Move) {
    let Some(slot) = killers.get_mut(ply) else { return };
    if slot[0] != mv {
        slot[1] = slot[0];
        slot[0] = mv;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn finds_mate_in_one() {
        let pos = Position::from_fen("6k1/5ppp/8/8/8/8/PPP2Q2/6K1 w - - 0 1").unwrap();
        let mut gen = Generator::new(pos);
        let ctrl = SearchControl::new();
        let mut killers = super::super::defs::new_killer_table();
        let mut pv = PrincipalVariation::new();
        let mut nodes = 0u64;
        let mut evaluated = 0u64;
        let score = alpha_beta(
            &mut gen, 3, -INF, INF, None, &mut pv, &ctrl, &mut killers, &mut nodes, &mut evaluated,
        );
        assert!(score > crate::evaluation::defs::SCORE_CLOSE_TO_MATE);
        assert!(!pv.is_empty());
    }

    #[test]
    fn stalemate_scores_as_draw() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!pos.side_to_move_in_check());
        let mut gen = Generator::new(pos);
        let ctrl = SearchControl::new();
        let mut killers = super::super::defs::new_killer_table();
        let mut pv = PrincipalVariation::new();
        let mut nodes = 0u64;
        let mut evaluated = 0u64;
        let score = alpha_beta(
            &mut gen, 1, -INF, INF, None, &mut pv, &ctrl, &mut killers, &mut nodes, &mut evaluated,
        );
        assert_eq!(score, 0);
    }
}
