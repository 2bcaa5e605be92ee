/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

pub mod comm;
pub mod defs;
pub mod engine;
pub mod evaluation;
pub mod misc;
pub mod movegen;
pub mod position;
pub mod search;

pub use defs::EngineRunResult;
pub use engine::Engine;
