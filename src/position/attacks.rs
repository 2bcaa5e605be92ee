/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::defs::{
    is_on_board, kind_of, AttackFlag, BISHOP, KNIGHT, NULL_PIECE, QUEEN, ROOK, Square,
};
use super::geometry::{geometry, index};
use super::Position;

impl Position {
    // Returns true iff any unit of `attacker_is_white` attacks `target`.
    // This is the single hot function during move generation, perft, and
    // evaluation (mobility); it must not allocate.
    pub fn is_square_attacked(&self, target: Square, attacker_is_white: bool) -> bool {
        let geo = geometry();

        let (pieces, pawns, king) = if attacker_is_white {
            (&self.white_pieces, &self.white_pawns, self.white_king)
        } else {
            (&self.black_pieces, &self.black_pawns, self.black_king)
        };

        let pawn_flag = if attacker_is_white {
            AttackFlag::WHITE_PAWN
        } else {
            AttackFlag::BLACK_PAWN
        };

        for &from in pawns.iter() {
            let flags = geo.attack_table[index(from, target)];
            if flags & pawn_flag != 0 {
                return true;
            }
        }

        for &from in pieces.iter() {
            let kind = kind_of(self.board[from as usize]);
            let flags = geo.attack_table[index(from, target)];
            match kind {
                KNIGHT => {
                    if flags & AttackFlag::KNIGHT != 0 {
                        return true;
                    }
                }
                BISHOP => {
                    if flags & AttackFlag::BISHOP != 0 && self.ray_is_clear(from, target) {
                        return true;
                    }
                }
                ROOK => {
                    if flags & AttackFlag::ROOK != 0 && self.ray_is_clear(from, target) {
                        return true;
                    }
                }
                QUEEN => {
                    if flags & AttackFlag::QUEEN != 0 && self.ray_is_clear(from, target) {
                        return true;
                    }
                }
                _ => {}
            }
        }

        let king_flags = geo.attack_table[index(king, target)];
        king_flags & AttackFlag::KING != 0
    }

    // Walks from `from` towards `target` one direction step at a time;
    // true iff every square strictly between the two is empty.
    fn ray_is_clear(&self, from: Square, target: Square) -> bool {
        let geo = geometry();
        let dir = geo.direction_table[index(from, target)];
        if dir.0 == 0 {
            return false;
        }
        let mut sq = from + dir;
        while sq != target {
            if !is_on_board(sq) {
                return false;
            }
            if self.board[sq as usize] != NULL_PIECE {
                return false;
            }
            sq = sq + dir;
        }
        true
    }

    pub fn king_square(&self, white: bool) -> Square {
        if white {
            self.white_king
        } else {
            self.black_king
        }
    }

    pub fn side_to_move_in_check(&self) -> bool {
        let white_to_move = self.white_to_move();
        self.is_square_attacked(self.king_square(white_to_move), !white_to_move)
    }

    pub fn white_to_move(&self) -> bool {
        self.flags & super::defs::Flags::WHITE_TO_MOVE != 0
    }
}
