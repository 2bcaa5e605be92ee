/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use crate::defs::MAX_MOVES_PER_PLY;
use crate::position::defs::Move;
use smallvec::SmallVec;

// Ranking bonuses feeding move ordering (see spec 4.3/4.5). Capture and
// promotion deltas are added on top of TACTICAL_BONUS.
pub const PV_BONUS: i16 = 10_000;
pub const TACTICAL_BONUS: i16 = 9_000;
pub const KILLER1_BONUS: i16 = 8_000;
pub const KILLER2_BONUS: i16 = 7_000;

#[derive(Copy, Clone)]
pub struct RankedMove {
    pub mv: Move,
    pub ranking: i16,
    pub tactical: bool,
}

pub type RankedMoveList = SmallVec<[RankedMove; MAX_MOVES_PER_PLY]>;

#[derive(Copy, Clone, PartialEq)]
pub enum MoveType {
    Quiet,
    Capture,
    All,
}
