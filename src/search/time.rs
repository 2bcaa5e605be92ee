/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::defs::{GameTime, SearchMode, DEFAULT_MOVES_TO_GO};
use std::time::Duration;

const SAFETY_MARGIN_MS: u64 = 50;

// Time budget for the move about to be searched, or `None` for a
// depth-bound or infinite search where the deadline is not time-based.
pub fn time_for_move(mode: &SearchMode, white_to_move: bool) -> Option<Duration> {
    match mode {
        SearchMode::MoveTime(ms) => Some(Duration::from_millis(ms.saturating_sub(SAFETY_MARGIN_MS))),
        SearchMode::GameTime(gt) => Some(allotted_from_game_time(gt, white_to_move)),
        SearchMode::Infinite | SearchMode::Depth(_) => None,
    }
}

fn allotted_from_game_time(gt: &GameTime, white_to_move: bool) -> Duration {
    let own_time = if white_to_move { gt.white_time_ms } else { gt.black_time_ms };
    let own_inc = if white_to_move { gt.white_inc_ms } else { gt.black_inc_ms };
    let moves_to_go = gt.moves_to_go.unwrap_or(DEFAULT_MOVES_TO_GO).max(1) as u64;

    let allotted = (own_time / moves_to_go) + own_inc;
    let clamped = allotted.min(own_time);
    Duration::from_millis(clamped.saturating_sub(SAFETY_MARGIN_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movetime_subtracts_safety_margin() {
        let d = time_for_move(&SearchMode::MoveTime(1_000), true).unwrap();
        assert_eq!(d.as_millis(), 950);
    }

    #[test]
    fn game_time_is_clamped_to_remaining_time() {
        let gt = GameTime {
            white_time_ms: 100,
            black_time_ms: 100,
            white_inc_ms: 0,
            black_inc_ms: 0,
            moves_to_go: Some(1),
        };
        let d = time_for_move(&SearchMode::GameTime(gt), true).unwrap();
        assert_eq!(d.as_millis(), 50);
    }
}
