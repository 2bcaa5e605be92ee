/* =======================================================================
Magog is a chess playing engine.

Magog is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Magog is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.
======================================================================= */

// defs.rs in the root holds basic definitions. Any definitions needed
// within specific modules are defined in defs.rs in the directory for
// that module.

use std::fmt;

pub struct About;
impl About {
    pub const ENGINE: &'static str = "Magog";
    pub const VERSION: &'static str = "0.1.0";
    pub const AUTHOR: &'static str = "Student Engine Contributors";
}

pub const FEN_START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const FEN_KIWIPETE_POSITION: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

pub const MAX_PLY: usize = 128;
pub const MAX_SEARCH_DEPTH: i8 = 40;
pub const MAX_MOVES_PER_PLY: usize = 60;
pub const MAX_PIECE_LIST: usize = 15;
pub const MAX_PAWN_LIST: usize = 8;

// Errors a user can provoke from the outside (bad FEN, bad move string,
// bad perft/go depth). These are always recoverable: the previous engine
// state is left untouched and a message is printed instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    Fen(String),
    Move(String),
    Depth(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Fen(msg) => write!(f, "invalid FEN: {}", msg),
            EngineError::Move(msg) => write!(f, "invalid move: {}", msg),
            EngineError::Depth(msg) => write!(f, "invalid depth: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineRunResult = Result<(), EngineError>;

// Messages for conditions that are never supposed to happen at runtime:
// a poisoned lock, a disconnected channel, a thread that failed to join.
// These are programming-error backstops, not recoverable conditions.
pub struct ErrFatal;
impl ErrFatal {
    pub const LOCK: &'static str = "Lock of shared resource failed.";
    pub const CHANNEL: &'static str = "Channel communication failed.";
    pub const THREAD: &'static str = "Thread failed to join.";
    pub const READ_IO: &'static str = "Reading from I/O failed.";
}
