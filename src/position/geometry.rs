/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

// Precomputed, process-wide read-only attack geometry. Grounded in the
// Go predecessor's attackLookup.go: two 239-entry tables indexed by
// (to - from) + 119, giving (a) which attacker kinds could reach `to`
// from `from` ignoring blockers, and (b) the unit step to walk between
// the two squares for sliding pieces.

use super::defs::{AttackFlag, Direction, Square};
use std::sync::OnceLock;

const TABLE_LEN: usize = 239;
const OFFSET: i16 = 119;

pub struct Geometry {
    pub attack_table: [u8; TABLE_LEN],
    pub direction_table: [Direction; TABLE_LEN],
}

#[inline(always)]
pub fn index(from: Square, to: Square) -> usize {
    (to - from + OFFSET) as usize
}

static GEOMETRY: OnceLock<Geometry> = OnceLock::new();

pub fn geometry() -> &'static Geometry {
    GEOMETRY.get_or_init(build_geometry)
}

fn build_geometry() -> Geometry {
    let mut attack_table = [0u8; TABLE_LEN];
    let mut direction_table = [Direction(0); TABLE_LEN];

    // King: all eight unit-radius offsets.
    for d in Direction::QUEEN_DIRS {
        attack_table[(d.0 + OFFSET) as usize] |= AttackFlag::KING;
    }

    // Knight: the eight (+-1,+-2)/(+-2,+-1) offsets.
    for d in Direction::KNIGHT_DIRS {
        attack_table[(d.0 + OFFSET) as usize] |= AttackFlag::KNIGHT;
    }

    // Pawns: the two forward-diagonal offsets of each color.
    attack_table[(Direction::NE.0 + OFFSET) as usize] |= AttackFlag::WHITE_PAWN;
    attack_table[(Direction::NW.0 + OFFSET) as usize] |= AttackFlag::WHITE_PAWN;
    attack_table[(Direction::SE.0 + OFFSET) as usize] |= AttackFlag::BLACK_PAWN;
    attack_table[(Direction::SW.0 + OFFSET) as usize] |= AttackFlag::BLACK_PAWN;

    // Rook/queen: every offset along rank or file, 1..7 steps.
    for d in Direction::ROOK_DIRS {
        for step in 1..8i16 {
            let offset = d.0 * step;
            attack_table[(offset + OFFSET) as usize] |= AttackFlag::ROOK;
            direction_table[(offset + OFFSET) as usize] = d;
        }
    }

    // Bishop/queen: every diagonal offset, 1..7 steps.
    for d in Direction::BISHOP_DIRS {
        for step in 1..8i16 {
            let offset = d.0 * step;
            attack_table[(offset + OFFSET) as usize] |= AttackFlag::BISHOP;
            direction_table[(offset + OFFSET) as usize] = d;
        }
    }

    Geometry {
        attack_table,
        direction_table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_offset_is_flagged() {
        let g = geometry();
        let idx = (Direction::N.0 * 3 + OFFSET) as usize;
        assert_ne!(g.attack_table[idx] & AttackFlag::ROOK, 0);
    }

    #[test]
    fn knight_offset_not_flagged_as_rook() {
        let g = geometry();
        let idx = (Direction::KNIGHT_DIRS[0].0 + OFFSET) as usize;
        assert_eq!(g.attack_table[idx] & AttackFlag::ROOK, 0);
        assert_ne!(g.attack_table[idx] & AttackFlag::KNIGHT, 0);
    }

    #[test]
    fn bishop_diagonal_direction_recorded() {
        let g = geometry();
        let idx = (Direction::NE.0 * 4 + OFFSET) as usize;
        assert_eq!(g.direction_table[idx], Direction::NE);
    }
}
