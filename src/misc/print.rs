/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use crate::position::defs::{piece_to_char, square_of, NULL_PIECE};
use crate::position::Position;

// Text board diagram for the `board` debug command, rank 8 at the top
// as on a physical board, plus the FEN and side to move.
pub fn position(pos: &Position) {
    for rank in (0..8i16).rev() {
        print!("{}  ", rank + 1);
        for file in 0..8i16 {
            let piece = pos.get_at(square_of(file, rank));
            let c = if piece == NULL_PIECE { '.' } else { piece_to_char(piece) };
            print!("{} ", c);
        }
        println!();
    }
    println!("   a b c d e f g h");
    println!();
    println!("side to move: {}", if pos.white_to_move() { "white" } else { "black" });
    println!("fen: {}", pos.to_fen());
}
