/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

pub mod defs;
mod main_loop;

use crate::defs::{EngineError, EngineRunResult};
use crate::misc::cmdline::CmdLine;
use crate::misc::perft;
use crate::position::Position;
use crate::search::SearchControl;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::JoinHandle;

// Owns the shared position and the cooperative cancellation signal; the
// search worker is spawned fresh for each `go` and joined before the
// next `position`/`go`/`quit` is allowed to proceed, which is the only
// ordering guarantee the command loop needs to provide.
pub struct Engine {
    quit: bool,
    quiet: bool,
    position: Arc<Mutex<Position>>,
    ctrl: SearchControl,
    worker: Option<JoinHandle<()>>,
    cmdline: CmdLine,
}

impl Engine {
    pub fn new() -> Result<Self, EngineError> {
        let cmdline = CmdLine::parse_args();
        let position = Position::from_fen(&cmdline.fen)?;
        Ok(Self {
            quit: false,
            quiet: cmdline.quiet,
            position: Arc::new(Mutex::new(position)),
            ctrl: SearchControl::new(),
            worker: None,
            cmdline,
        })
    }

    pub fn run(&mut self) -> EngineRunResult {
        if self.cmdline.perft > 0 {
            if self.cmdline.perft as usize > crate::defs::MAX_PLY {
                return Err(EngineError::Depth(format!(
                    "perft depth {} exceeds the {}-ply search buffer",
                    self.cmdline.perft,
                    crate::defs::MAX_PLY
                )));
            }
            let root = self.position.lock().clone();
            perft::run(root, self.cmdline.perft);
            return Ok(());
        }

        self.main_loop();
        Ok(())
    }
}
