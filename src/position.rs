/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

pub mod attacks;
pub mod context;
pub mod defs;
pub mod fen;
pub mod geometry;
pub mod make_move;

use defs::{square_of, Square, B_KING, NULL_PIECE, W_KING};
use smallvec::SmallVec;

use crate::defs::{MAX_PAWN_LIST, MAX_PIECE_LIST};

pub type PieceList = SmallVec<[Square; MAX_PIECE_LIST]>;
pub type PawnList = SmallVec<[Square; MAX_PAWN_LIST]>;

// The board plus per-color piece lists, kings, castle/turn flags, the
// en-passant target, and ply/halfmove counters. A value type: the
// searcher copies it onto a stack at each ply rather than maintaining an
// explicit unmake path. See DESIGN.md for why copy-on-push was chosen
// over a backtrack-record pattern.
#[derive(Clone)]
pub struct Position {
    pub board: [defs::Piece; 128],
    pub white_pieces: PieceList,
    pub black_pieces: PieceList,
    pub white_pawns: PawnList,
    pub black_pawns: PawnList,
    pub white_king: Square,
    pub black_king: Square,
    pub flags: u8,
    pub en_pass_square: Square,
    pub ply: u16,
    pub halfmove_clock: u8,
}

impl Position {
    pub fn new() -> Self {
        Self::from_fen(crate::defs::FEN_START_POSITION).expect("start position FEN is valid")
    }

    pub fn empty() -> Self {
        Self {
            board: [NULL_PIECE; 128],
            white_pieces: PieceList::new(),
            black_pieces: PieceList::new(),
            white_pawns: PawnList::new(),
            black_pawns: PawnList::new(),
            white_king: defs::INVALID_SQUARE,
            black_king: defs::INVALID_SQUARE,
            flags: 0,
            en_pass_square: defs::INVALID_SQUARE,
            ply: 0,
            halfmove_clock: 0,
        }
    }

    #[inline(always)]
    pub fn get_at(&self, square: Square) -> defs::Piece {
        self.board[square as usize]
    }

    pub fn get_at_file_rank(&self, file: i16, rank: i16) -> defs::Piece {
        self.get_at(square_of(file, rank))
    }

    // Removes `sq` from whichever piece/pawn list of `white` currently
    // holds it. Panics (debug-only, via invariant check) if absent --
    // that would mean the board and piece lists have desynchronized.
    pub(crate) fn remove_from_lists(&mut self, sq: Square, white: bool) {
        let piece = self.get_at(sq);
        let kind = defs::kind_of(piece);
        if kind == defs::PAWN {
            let list = if white {
                &mut self.white_pawns
            } else {
                &mut self.black_pawns
            };
            if let Some(pos) = list.iter().position(|&s| s == sq) {
                list.swap_remove(pos);
            }
        } else if kind != defs::KING {
            let list = if white {
                &mut self.white_pieces
            } else {
                &mut self.black_pieces
            };
            if let Some(pos) = list.iter().position(|&s| s == sq) {
                list.swap_remove(pos);
            }
        }
        // Kings are never stored in a list; captured-king handling is
        // left to the legality check (see DESIGN.md / spec 9: king
        // capture during mobility counting is intentionally allowed).
    }

    pub(crate) fn relocate_in_lists(&mut self, from: Square, to: Square, white: bool) {
        let kind = defs::kind_of(self.get_at(from));
        match kind {
            defs::PAWN => {
                let list = if white {
                    &mut self.white_pawns
                } else {
                    &mut self.black_pawns
                };
                if let Some(pos) = list.iter().position(|&s| s == from) {
                    list[pos] = to;
                }
            }
            defs::KING => {
                if white {
                    self.white_king = to;
                } else {
                    self.black_king = to;
                }
            }
            _ => {
                let list = if white {
                    &mut self.white_pieces
                } else {
                    &mut self.black_pieces
                };
                if let Some(pos) = list.iter().position(|&s| s == from) {
                    list[pos] = to;
                }
            }
        }
    }

    // Debug-only consistency assertion: every non-empty board square must
    // appear exactly once among the color-appropriate lists/king slot,
    // and vice versa. Gated behind debug_assertions per spec 9.
    #[cfg(debug_assertions)]
    pub fn assert_consistent(&self) {
        for sq in 0..128i16 {
            if !defs::is_on_board(sq) {
                continue;
            }
            let piece = self.get_at(sq);
            if piece == NULL_PIECE {
                continue;
            }
            let white = defs::is_white(piece);
            let kind = defs::kind_of(piece);
            match kind {
                defs::KING => {
                    let expected = if white { self.white_king } else { self.black_king };
                    assert_eq!(expected, sq, "king slot desynchronized from board");
                }
                defs::PAWN => {
                    let list = if white { &self.white_pawns } else { &self.black_pawns };
                    assert!(list.contains(&sq), "pawn list desynchronized from board");
                }
                _ => {
                    let list = if white { &self.white_pieces } else { &self.black_pieces };
                    assert!(list.contains(&sq), "piece list desynchronized from board");
                }
            }
        }
        assert_ne!(self.white_king, defs::INVALID_SQUARE, "missing white king");
        assert_ne!(self.black_king, defs::INVALID_SQUARE, "missing black king");
        assert_eq!(self.get_at(self.white_king), W_KING);
        assert_eq!(self.get_at(self.black_king), B_KING);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
