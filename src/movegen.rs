/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

pub mod defs;
pub mod gen;

pub use defs::{MoveType, RankedMove, RankedMoveList};
pub use gen::{generate_pseudo_legal, Generator, Killers};
