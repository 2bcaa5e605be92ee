/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::defs::{Direction, Piece, Square, WHITE_BIT};
use super::{PawnList, PieceList, Position};

// Bundle of references the generator/evaluator consumes for the side to
// move, grouped so functions do not have to thread eight parameters
// individually (mirrors the reference's SearchRefs grouping idiom).
pub struct Context<'a> {
    pub own_pieces: &'a PieceList,
    pub enemy_pieces: &'a PieceList,
    pub own_pawns: &'a PawnList,
    pub enemy_pawns: &'a PawnList,
    pub own_king: Square,
    pub enemy_king: Square,
    pub pawn_advance: Direction,
    pub own_color_bit: Piece,
    pub enemy_color_bit: Piece,
    pub can_castle_kingside: bool,
    pub can_castle_queenside: bool,
    pub pawn_start_rank: i16,
    pub promotion_rank: i16,
}

impl Position {
    pub fn get_current_context(&self) -> Context<'_> {
        let white = self.white_to_move();
        let (ks, qs) = if white {
            (
                self.flags & super::defs::Castling::WK != 0,
                self.flags & super::defs::Castling::WQ != 0,
            )
        } else {
            (
                self.flags & super::defs::Castling::BK != 0,
                self.flags & super::defs::Castling::BQ != 0,
            )
        };

        Context {
            own_pieces: if white { &self.white_pieces } else { &self.black_pieces },
            enemy_pieces: if white { &self.black_pieces } else { &self.white_pieces },
            own_pawns: if white { &self.white_pawns } else { &self.black_pawns },
            enemy_pawns: if white { &self.black_pawns } else { &self.white_pawns },
            own_king: if white { self.white_king } else { self.black_king },
            enemy_king: if white { self.black_king } else { self.white_king },
            pawn_advance: Direction::pawn_advance(white),
            own_color_bit: if white { WHITE_BIT } else { 0 },
            enemy_color_bit: if white { 0 } else { WHITE_BIT },
            can_castle_kingside: ks,
            can_castle_queenside: qs,
            pawn_start_rank: if white { 1 } else { 6 },
            promotion_rank: if white { 7 } else { 0 },
        }
    }

    // Variant used by tactical-only generation: identical, but castling
    // availability is forced off since quiescence never considers it.
    pub fn get_tactical_context(&self) -> Context<'_> {
        let mut ctx = self.get_current_context();
        ctx.can_castle_kingside = false;
        ctx.can_castle_queenside = false;
        ctx
    }
}
