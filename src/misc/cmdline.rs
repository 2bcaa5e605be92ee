/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

// Command-line parsing, via clap's derive API. The reference's own
// cmdline.rs still targets clap 2's builder API (`App`/`Arg::with_name`),
// which clap 4 no longer exposes; this module follows the same option
// set but through the modern derive macro.

use crate::defs::FEN_START_POSITION;
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "A chess engine speaking the UCI protocol.", long_about = None)]
pub struct CmdLine {
    /// Set up the given position instead of the standard start position.
    #[arg(short, long, default_value_t = FEN_START_POSITION.to_string())]
    pub fen: String,

    /// Run perft to the given depth and exit instead of starting the UCI loop.
    #[arg(short, long, default_value_t = 0)]
    pub perft: u8,

    /// Suppress intermediate search info lines; only print on depth completion.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CmdLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
