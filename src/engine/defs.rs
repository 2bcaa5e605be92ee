/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

pub enum CommCommand {
    Uci,
    IsReady,
    Position { fen: Option<String>, moves: Vec<String> },
    Go(crate::search::SearchParams),
    Stop,
    Quit,
    SetOption,
    Board,
    Eval,
    Help,
    Unknown(String),
}
