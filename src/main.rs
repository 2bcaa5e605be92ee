/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use magog::Engine;

fn main() {
    let mut engine = match Engine::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = engine.run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
