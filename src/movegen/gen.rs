/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

// Pseudo-legal move generation plus the trial-make legality filter.
// Grounded in the Go predecessor's movegen.go (generatePseudoLegalMoves /
// appendRankedMove / generatePseudoLegalTacticalMoves), restructured in
// the reference engine's idiom (MoveGenerator + RankedMoveList type,
// per-ply reusable buffers).

use super::defs::{RankedMove, RankedMoveList, KILLER1_BONUS, KILLER2_BONUS, TACTICAL_BONUS};
use crate::evaluation::defs::material_value;
use crate::position::context::Context;
use crate::position::defs::{
    Direction, Move, BISHOP, INVALID_SQUARE, KNIGHT, NULL_PIECE, PAWN, QUEEN, ROOK,
};
use crate::position::Position;

pub type Killers = [Move; 2];

// Generates pseudo-legal moves for the side to move. `tactical_only`
// restricts to captures and promotion pushes (used by quiescence); no
// quiet moves, no castling are emitted in that mode.
pub fn generate_pseudo_legal(
    pos: &Position,
    tactical_only: bool,
    killers: Option<&Killers>,
) -> RankedMoveList {
    let mut moves = RankedMoveList::new();
    let ctx = if tactical_only {
        pos.get_tactical_context()
    } else {
        pos.get_current_context()
    };

    generate_pawn_moves(pos, &ctx, tactical_only, &mut moves);

    for &from in ctx.own_pieces.iter() {
        let kind = crate::position::defs::kind_of(pos.get_at(from));
        match kind {
            KNIGHT => generate_knight_moves(pos, &ctx, from, tactical_only, killers, &mut moves),
            BISHOP => generate_slider_moves(
                pos,
                &ctx,
                from,
                &Direction::BISHOP_DIRS,
                tactical_only,
                killers,
                &mut moves,
            ),
            ROOK => generate_slider_moves(
                pos,
                &ctx,
                from,
                &Direction::ROOK_DIRS,
                tactical_only,
                killers,
                &mut moves,
            ),
            QUEEN => generate_slider_moves(
                pos,
                &ctx,
                from,
                &Direction::QUEEN_DIRS,
                tactical_only,
                killers,
                &mut moves,
            ),
            _ => {}
        }
    }

    generate_king_moves(pos, &ctx, tactical_only, killers, &mut moves);

    if !tactical_only {
        generate_castling_moves(pos, &ctx, &mut moves);
    }

    moves
}

fn killer_bonus(killers: Option<&Killers>, mv: Move) -> i16 {
    if let Some(k) = killers {
        if mv == k[0] {
            return KILLER1_BONUS;
        }
        if mv == k[1] {
            return KILLER2_BONUS;
        }
    }
    0
}

fn capture_ranking(attacker_kind: u8, captured_kind: u8) -> i16 {
    TACTICAL_BONUS + material_value(captured_kind) - material_value(attacker_kind)
}

fn promotion_ranking(promoted_kind: u8) -> i16 {
    TACTICAL_BONUS + material_value(promoted_kind) - material_value(PAWN)
}

const PROMOTION_KINDS: [u8; 4] = [QUEEN, ROOK, BISHOP, KNIGHT];

fn generate_pawn_moves(pos: &Position, ctx: &Context, tactical_only: bool, out: &mut RankedMoveList) {
    for &from in ctx.own_pawns.iter() {
        for delta in [-1i16, 1i16] {
            let to = from + ctx.pawn_advance + Direction(delta);
            if !crate::position::defs::is_on_board(to) {
                continue;
            }
            let captured = pos.get_at(to);
            let is_ep = to == pos.en_pass_square && pos.en_pass_square != INVALID_SQUARE;
            let is_enemy_piece = captured != NULL_PIECE && captured & crate::position::defs::WHITE_BIT != ctx.own_color_bit;
            if is_enemy_piece || is_ep {
                let captured_kind = if is_ep { PAWN } else { crate::position::defs::kind_of(captured) };
                append_pawn_captures(from, to, captured_kind, ctx, out);
            }
        }

        if tactical_only {
            // Still need promotion pushes in tactical-only mode.
            let to = from + ctx.pawn_advance;
            if crate::position::defs::is_on_board(to) && pos.get_at(to) == NULL_PIECE {
                if crate::position::defs::rank_of(to) == ctx.promotion_rank {
                    for &kind in PROMOTION_KINDS.iter() {
                        out.push(RankedMove {
                            mv: Move::promotion(from, to, kind),
                            ranking: promotion_ranking(kind),
                            tactical: true,
                        });
                    }
                }
            }
            continue;
        }

        let to = from + ctx.pawn_advance;
        if crate::position::defs::is_on_board(to) && pos.get_at(to) == NULL_PIECE {
            if crate::position::defs::rank_of(to) == ctx.promotion_rank {
                for &kind in PROMOTION_KINDS.iter() {
                    out.push(RankedMove {
                        mv: Move::promotion(from, to, kind),
                        ranking: promotion_ranking(kind),
                        tactical: true,
                    });
                }
            } else {
                let mv = Move::new(from, to);
                out.push(RankedMove {
                    mv,
                    ranking: 0,
                    tactical: false,
                });

                if crate::position::defs::rank_of(from) == ctx.pawn_start_rank {
                    let to2 = to + ctx.pawn_advance;
                    if crate::position::defs::is_on_board(to2) && pos.get_at(to2) == NULL_PIECE {
                        out.push(RankedMove {
                            mv: Move::double_push(from, to2, to),
                            ranking: 0,
                            tactical: false,
                        });
                    }
                }
            }
        }
    }
}

// Emits four promotion-captures if `to` is on the promotion rank,
// otherwise a single capture move.
fn append_pawn_captures(from: i16, to: i16, captured_kind: u8, ctx: &Context, out: &mut RankedMoveList) {
    if crate::position::defs::rank_of(to) == ctx.promotion_rank {
        for &kind in PROMOTION_KINDS.iter() {
            out.push(RankedMove {
                mv: Move::promotion(from, to, kind),
                ranking: capture_ranking(PAWN, captured_kind) + promotion_ranking(kind) - TACTICAL_BONUS,
                tactical: true,
            });
        }
    } else {
        out.push(RankedMove {
            mv: Move::new(from, to),
            ranking: capture_ranking(PAWN, captured_kind),
            tactical: true,
        });
    }
}

fn generate_knight_moves(
    pos: &Position,
    ctx: &Context,
    from: i16,
    tactical_only: bool,
    killers: Option<&Killers>,
    out: &mut RankedMoveList,
) {
    for d in Direction::KNIGHT_DIRS {
        let to = from + d;
        if !crate::position::defs::is_on_board(to) {
            continue;
        }
        let occupant = pos.get_at(to);
        if occupant != NULL_PIECE && occupant & crate::position::defs::WHITE_BIT == ctx.own_color_bit {
            continue;
        }
        push_simple_move(from, to, occupant, tactical_only, killers, out);
    }
}

fn generate_slider_moves(
    pos: &Position,
    ctx: &Context,
    from: i16,
    dirs: &[Direction],
    tactical_only: bool,
    killers: Option<&Killers>,
    out: &mut RankedMoveList,
) {
    for &d in dirs {
        let mut to = from + d;
        while crate::position::defs::is_on_board(to) {
            let occupant = pos.get_at(to);
            if occupant != NULL_PIECE && occupant & crate::position::defs::WHITE_BIT == ctx.own_color_bit {
                break;
            }
            push_simple_move(from, to, occupant, tactical_only, killers, out);
            if occupant != NULL_PIECE {
                break;
            }
            to = to + d;
        }
    }
}

fn generate_king_moves(
    pos: &Position,
    ctx: &Context,
    tactical_only: bool,
    killers: Option<&Killers>,
    out: &mut RankedMoveList,
) {
    for d in Direction::QUEEN_DIRS {
        let to = ctx.own_king + d;
        if !crate::position::defs::is_on_board(to) {
            continue;
        }
        let occupant = pos.get_at(to);
        if occupant != NULL_PIECE && occupant & crate::position::defs::WHITE_BIT == ctx.own_color_bit {
            continue;
        }
        push_simple_move(ctx.own_king, to, occupant, tactical_only, killers, out);
    }
}

fn push_simple_move(
    from: i16,
    to: i16,
    occupant: u8,
    tactical_only: bool,
    killers: Option<&Killers>,
    out: &mut RankedMoveList,
) {
    let mv = Move::new(from, to);
    if occupant != NULL_PIECE {
        out.push(RankedMove {
            mv,
            ranking: TACTICAL_BONUS + material_value(crate::position::defs::kind_of(occupant)),
            tactical: true,
        });
    } else if !tactical_only {
        out.push(RankedMove {
            mv,
            ranking: killer_bonus(killers, mv),
            tactical: false,
        });
    }
}

fn generate_castling_moves(pos: &Position, ctx: &Context, out: &mut RankedMoveList) {
    let white = pos.white_to_move();
    let rank = if white { 0 } else { 7 };
    let king_from = ctx.own_king;
    let enemy_white = !white;

    if ctx.can_castle_kingside {
        let f = crate::position::defs::square_of(5, rank);
        let g = crate::position::defs::square_of(6, rank);
        if pos.get_at(f) == NULL_PIECE
            && pos.get_at(g) == NULL_PIECE
            && !pos.is_square_attacked(king_from, enemy_white)
            && !pos.is_square_attacked(f, enemy_white)
            && !pos.is_square_attacked(g, enemy_white)
        {
            out.push(RankedMove {
                mv: Move::new(king_from, g),
                ranking: 0,
                tactical: false,
            });
        }
    }

    if ctx.can_castle_queenside {
        let d = crate::position::defs::square_of(3, rank);
        let c = crate::position::defs::square_of(2, rank);
        let b = crate::position::defs::square_of(1, rank);
        if pos.get_at(d) == NULL_PIECE
            && pos.get_at(c) == NULL_PIECE
            && pos.get_at(b) == NULL_PIECE
            && !pos.is_square_attacked(king_from, enemy_white)
            && !pos.is_square_attacked(d, enemy_white)
            && !pos.is_square_attacked(c, enemy_white)
        {
            out.push(RankedMove {
                mv: Move::new(king_from, c),
                ranking: 0,
                tactical: false,
            });
        }
    }
}

// Owns the search/perft position stack. `push_move` is the single
// legality gate: it copies the position on top of the stack, applies
// the move, and keeps the copy only if the mover was not left in check.
// There is no separate unmake -- `pop_move` just discards the top copy.
pub struct Generator {
    stack: Vec<Position>,
}

impl Generator {
    pub fn new(root: Position) -> Self {
        let mut stack = Vec::with_capacity(crate::defs::MAX_PLY);
        stack.push(root);
        Self { stack }
    }

    pub fn current(&self) -> &Position {
        self.stack.last().expect("generator stack is never empty")
    }

    pub fn ply(&self) -> usize {
        self.stack.len() - 1
    }

    pub fn set_root(&mut self, pos: Position) {
        self.stack.clear();
        self.stack.push(pos);
    }

    pub fn generate(&self, move_type: super::defs::MoveType, killers: Option<&Killers>) -> RankedMoveList {
        let tactical_only = move_type == super::defs::MoveType::Capture;
        generate_pseudo_legal(self.current(), tactical_only, killers)
    }

    pub fn push_move(&mut self, mv: Move) -> bool {
        let mut next = self.current().clone();
        if next.make_move(mv) {
            self.stack.push(next);
            true
        } else {
            false
        }
    }

    pub fn pop_move(&mut self) {
        self.stack
            .pop()
            .expect("pop_move called without a matching push_move");
    }

    // Counts leaf nodes at `depth` plies below the current position.
    // Depth 1 is handled without recursing into a further ply: each
    // pseudo-legal move is tried and immediately popped, so only one
    // extra Position copy is ever live.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = generate_pseudo_legal(self.current(), false, None);
        if depth == 1 {
            let mut count = 0u64;
            for rm in moves.iter() {
                if self.push_move(rm.mv) {
                    count += 1;
                    self.pop_move();
                }
            }
            return count;
        }
        let mut nodes = 0u64;
        for rm in moves.iter() {
            if self.push_move(rm.mv) {
                nodes += self.perft(depth - 1);
                self.pop_move();
            }
        }
        nodes
    }

    // Per-root-move leaf counts, for the `go perft` divide output.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = generate_pseudo_legal(self.current(), false, None);
        let mut results = Vec::with_capacity(moves.len());
        for rm in moves.iter() {
            if self.push_move(rm.mv) {
                let count = if depth <= 1 { 1 } else { self.perft(depth - 1) };
                self.pop_move();
                results.push((rm.mv, count));
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn perft_depth_one_from_start_position_is_twenty() {
        let mut gen = Generator::new(Position::new());
        assert_eq!(gen.perft(1), 20);
    }

    #[test]
    fn perft_depth_two_from_start_position_is_four_hundred() {
        let mut gen = Generator::new(Position::new());
        assert_eq!(gen.perft(2), 400);
    }

    #[test]
    fn kiwipete_depth_one_matches_reference_count() {
        let pos = Position::from_fen(crate::defs::FEN_KIWIPETE_POSITION).unwrap();
        let mut gen = Generator::new(pos);
        assert_eq!(gen.perft(1), 48);
    }
}
