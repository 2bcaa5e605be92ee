/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

mod alpha_beta;
pub mod defs;
mod iter_deep;
mod qsearch;
mod sorting;
mod time;

pub use defs::{GameTime, SearchControl, SearchInfo, SearchMode, SearchParams, SearchReport};
pub use iter_deep::iterative_deepening;
pub(crate) use time::time_for_move;
