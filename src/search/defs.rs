/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use crate::defs::MAX_PLY;
use crate::movegen::Killers;
use crate::position::defs::Move;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub const INF: i16 = 25_000;

pub type PrincipalVariation = SmallVec<[Move; MAX_PLY]>;

// A very large default when the protocol hasn't told us how much time is
// left; keeps `own_time / movestogo` well-defined instead of needing a
// separate "untimed" branch.
pub const DEFAULT_TIME_MS: u64 = 3_600_000;
pub const DEFAULT_MOVES_TO_GO: u32 = 30;

#[derive(Clone, Copy)]
pub struct GameTime {
    pub white_time_ms: u64,
    pub black_time_ms: u64,
    pub white_inc_ms: u64,
    pub black_inc_ms: u64,
    pub moves_to_go: Option<u32>,
}

impl Default for GameTime {
    fn default() -> Self {
        Self {
            white_time_ms: DEFAULT_TIME_MS,
            black_time_ms: DEFAULT_TIME_MS,
            white_inc_ms: 0,
            black_inc_ms: 0,
            moves_to_go: None,
        }
    }
}

#[derive(Clone, Copy)]
pub enum SearchMode {
    Depth(i8),
    MoveTime(u64),
    GameTime(GameTime),
    Infinite,
}

#[derive(Clone, Copy)]
pub struct SearchParams {
    pub mode: SearchMode,
    pub max_depth: i8,
}

pub struct SearchInfo {
    pub depth: i8,
    pub score: i16,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub pv: PrincipalVariation,
}

pub enum SearchReport {
    Info(SearchInfo),
    BestMove(Move),
}

// Cooperative cancellation: a one-shot stop flag plus a deadline captured
// at the start of `go`. Cheap to poll between child returns; no locking
// on the hot path beyond the (rarely contended) deadline mutex.
#[derive(Clone)]
pub struct SearchControl {
    stop: Arc<AtomicBool>,
    deadline: Arc<parking_lot::Mutex<Option<Instant>>>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            deadline: Arc::new(parking_lot::Mutex::new(None)),
        }
    }

    pub fn reset(&self, deadline: Option<Instant>) {
        self.stop.store(false, Ordering::Relaxed);
        *self.deadline.lock() = deadline;
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn should_stop(&self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }
        match *self.deadline.lock() {
            Some(d) => Instant::now() >= d,
            None => false,
        }
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new()
    }
}

// Ply-indexed killer-move table: two slots per ply, persisting across
// iterative-deepening depths within one `go` and cleared on a new root
// position.
pub fn new_killer_table() -> Vec<Killers> {
    vec![[Move::null(); 2]; MAX_PLY]
}
