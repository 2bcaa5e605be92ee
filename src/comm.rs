/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

pub mod uci;
