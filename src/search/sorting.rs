/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use crate::movegen::defs::PV_BONUS;
use crate::movegen::RankedMoveList;
use crate::position::defs::Move;

// Overrides the ranking of the move matching the previous iteration's
// principal variation so it is searched first.
pub fn apply_pv_bonus(moves: &mut RankedMoveList, pv_move: Option<Move>) {
    let Some(pv_move) = pv_move else { return };
    for rm in moves.iter_mut() {
        if rm.mv == pv_move {
            rm.ranking = PV_BONUS;
        }
    }
}

pub fn sort_by_ranking(moves: &mut RankedMoveList) {
    moves.sort_by(|a, b| b.ranking.cmp(&a.ranking));
}
