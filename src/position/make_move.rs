/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::defs::{
    file_of, kind_of, rank_of, square_of, Castling, Flags, Move, NULL_PIECE, PAWN, WHITE_BIT,
};
use super::Position;

impl Position {
    // Mutates the position in place; returns true iff the resulting
    // position is legal (the side that just moved is not left in check).
    // Because Position is a value type copied onto the search stack, the
    // caller discards the copy on a `false` return -- there is no
    // separate unmake path.
    pub fn make_move(&mut self, m: Move) -> bool {
        let white = self.white_to_move();
        self.ply += 1;

        let mover = self.get_at(m.from);
        let mover_kind = kind_of(mover);
        let is_capture = self.get_at(m.to) != NULL_PIECE;
        let is_pawn_move = mover_kind == PAWN;

        match mover_kind {
            PAWN => {
                if m.promote_to == NULL_PIECE {
                    self.relocate_in_lists(m.from, m.to, white);
                } else {
                    self.remove_from_lists(m.from, white);
                    let list = if white {
                        &mut self.white_pieces
                    } else {
                        &mut self.black_pieces
                    };
                    list.push(m.to);
                }
            }
            super::defs::KING => {
                self.relocate_in_lists(m.from, m.to, white);
                if white {
                    self.flags &= !(Castling::WK | Castling::WQ);
                } else {
                    self.flags &= !(Castling::BK | Castling::BQ);
                }
                if (file_of(m.from) - file_of(m.to)).abs() == 2 {
                    let rank = rank_of(m.from);
                    if file_of(m.to) > file_of(m.from) {
                        // Kingside: H-rook to F-file.
                        let rook_from = square_of(7, rank);
                        let rook_to = square_of(5, rank);
                        self.move_board_piece(rook_from, rook_to);
                        self.relocate_in_lists(rook_from, rook_to, white);
                    } else {
                        // Queenside: A-rook to D-file.
                        let rook_from = square_of(0, rank);
                        let rook_to = square_of(3, rank);
                        self.move_board_piece(rook_from, rook_to);
                        self.relocate_in_lists(rook_from, rook_to, white);
                    }
                }
            }
            _ => {
                self.relocate_in_lists(m.from, m.to, white);
            }
        }

        // Clear castling flags whose rook-origin square is `from` (own
        // rook left its corner) or `to` (enemy rook's corner was
        // captured-into).
        self.update_castling_on_rook_square(m.from);
        self.update_castling_on_rook_square(m.to);

        // Capture handling: remove the captured unit from its list
        // unless it is the enemy king (kings are never listed; the
        // legality check below rejects such a move instead).
        if is_capture {
            let captured = self.get_at(m.to);
            if kind_of(captured) != super::defs::KING {
                self.remove_from_lists(m.to, !white);
            }
        }

        if m.promote_to == NULL_PIECE {
            self.board[m.to as usize] = mover;
        } else {
            self.board[m.to as usize] = kind_of(m.promote_to) | if white { WHITE_BIT } else { 0 };
        }
        self.board[m.from as usize] = NULL_PIECE;

        // En-passant capture: the taken pawn sits beside `from`, not on
        // `to`.
        let mut reset_halfmove = is_capture || is_pawn_move;
        if is_pawn_move && self.en_pass_square == m.to && self.en_pass_square != super::defs::INVALID_SQUARE {
            let captured_sq = square_of(file_of(m.to), rank_of(m.from));
            self.remove_from_lists(captured_sq, !white);
            self.board[captured_sq as usize] = NULL_PIECE;
            reset_halfmove = true;
        }

        self.en_pass_square = m.en_passant_square;

        if reset_halfmove {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.flags ^= Flags::WHITE_TO_MOVE;

        // Legality: the side that just moved must not be left in check.
        !self.is_square_attacked(self.king_square(white), !white)
    }

    fn move_board_piece(&mut self, from: super::defs::Square, to: super::defs::Square) {
        self.board[to as usize] = self.board[from as usize];
        self.board[from as usize] = NULL_PIECE;
    }

    fn update_castling_on_rook_square(&mut self, sq: super::defs::Square) {
        let rank0 = square_of(0, 0);
        let rank0h = square_of(7, 0);
        let rank7 = square_of(0, 7);
        let rank7h = square_of(7, 7);
        if sq == rank0 {
            self.flags &= !Castling::WQ;
        } else if sq == rank0h {
            self.flags &= !Castling::WK;
        } else if sq == rank7 {
            self.flags &= !Castling::BQ;
        } else if sq == rank7h {
            self.flags &= !Castling::BK;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Position;
    use crate::position::defs::{square_of, Move};

    #[test]
    fn simple_pawn_push_is_legal_and_moves_piece() {
        let mut pos = Position::new();
        let e2 = square_of(4, 1);
        let e4 = square_of(4, 3);
        let m = Move::double_push(e2, e4, square_of(4, 2));
        assert!(pos.make_move(m));
        assert_eq!(pos.get_at(e4), crate::position::defs::W_PAWN);
        assert_eq!(pos.get_at(e2), crate::position::defs::NULL_PIECE);
        assert_eq!(pos.en_pass_square, square_of(4, 2));
        assert!(!pos.white_to_move());
    }

    #[test]
    fn moving_into_check_is_illegal() {
        // White king on e1, black rook on e8, nothing between: moving the
        // only blocker away leaves White in check.
        let mut pos = Position::from_fen("4r3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let e2 = square_of(4, 1);
        let d3 = square_of(3, 2);
        let m = Move::new(e2, d3);
        assert!(!pos.make_move(m));
    }
}
