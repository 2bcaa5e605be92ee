/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use super::defs::{
    piece_to_char, square_of, Castling, Flags, Piece, B_BISHOP, B_KING, B_KNIGHT, B_PAWN, B_QUEEN,
    B_ROOK, INVALID_SQUARE, NULL_PIECE, PAWN, W_BISHOP, W_KING, W_KNIGHT, W_PAWN, W_QUEEN, W_ROOK,
};
use super::Position;
use crate::defs::EngineError;

const NR_OF_FEN_PARTS: usize = 6;

impl Position {
    // Parses the standard six-field FEN format: placement/side/castling/
    // ep/halfmoveclock/fullmovecounter. All six fields must be present or
    // the FEN is rejected -- following the atomic commit-on-success
    // pattern: a fresh Position is built and only returned once every
    // field has parsed without error, so a caller replacing its current
    // position on `Err` leaves the old one untouched.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != NR_OF_FEN_PARTS {
            return Err(EngineError::Fen(format!(
                "expected {} space-separated fields, found {}",
                NR_OF_FEN_PARTS,
                parts.len()
            )));
        }

        let mut pos = Position::empty();
        parse_pieces(&mut pos, parts[0])?;
        parse_side(&mut pos, parts[1])?;
        parse_castling(&mut pos, parts[2])?;
        parse_en_passant(&mut pos, parts[3])?;
        parse_halfmove_clock(&mut pos, parts[4])?;
        let fullmove = parse_fullmove_number(parts[5])?;

        if pos.white_king == INVALID_SQUARE || pos.black_king == INVALID_SQUARE {
            return Err(EngineError::Fen("both kings must be present".to_string()));
        }

        let black_to_move = !pos.white_to_move();
        pos.ply = 2 * (fullmove.saturating_sub(1)) + if black_to_move { 1 } else { 0 };

        #[cfg(debug_assertions)]
        pos.assert_consistent();

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8i16).rev() {
            let mut s = String::new();
            let mut empty_run = 0;
            for file in 0..8i16 {
                let piece = self.get_at_file_rank(file, rank);
                if piece == NULL_PIECE {
                    empty_run += 1;
                } else {
                    if empty_run > 0 {
                        s.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    s.push(piece_to_char(piece));
                }
            }
            if empty_run > 0 {
                s.push_str(&empty_run.to_string());
            }
            ranks.push(s);
        }
        let placement = ranks.join("/");

        let side = if self.white_to_move() { "w" } else { "b" };

        let mut castling = String::new();
        if self.flags & Castling::WK != 0 {
            castling.push('K');
        }
        if self.flags & Castling::WQ != 0 {
            castling.push('Q');
        }
        if self.flags & Castling::BK != 0 {
            castling.push('k');
        }
        if self.flags & Castling::BQ != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = if self.en_pass_square == INVALID_SQUARE {
            "-".to_string()
        } else {
            super::defs::square_to_string(self.en_pass_square)
        };

        let fullmove = self.ply / 2 + 1;

        format!(
            "{} {} {} {} {} {}",
            placement, side, castling, ep, self.halfmove_clock, fullmove
        )
    }
}

fn parse_pieces(pos: &mut Position, board_str: &str) -> Result<(), EngineError> {
    let rank_strings: Vec<&str> = board_str.split('/').collect();
    if rank_strings.len() != 8 {
        return Err(EngineError::Fen(format!(
            "expected 8 ranks separated by '/', found {}",
            rank_strings.len()
        )));
    }

    for (fen_rank_idx, rank_str) in rank_strings.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i16;
        let mut file = 0i16;
        for c in rank_str.chars() {
            if file > 7 {
                return Err(EngineError::Fen(format!("rank '{}' has too many squares", rank_str)));
            }
            if c.is_ascii_digit() {
                file += c.to_digit(10).unwrap() as i16;
                continue;
            }
            let piece = char_to_piece(c)
                .ok_or_else(|| EngineError::Fen(format!("unknown piece character '{}'", c)))?;
            let sq = square_of(file, rank);
            pos.board[sq as usize] = piece;
            if piece == W_KING {
                pos.white_king = sq;
            } else if piece == B_KING {
                pos.black_king = sq;
            } else if super::defs::is_white(piece) {
                if super::defs::kind_of(piece) == PAWN {
                    pos.white_pawns.push(sq);
                } else {
                    pos.white_pieces.push(sq);
                }
            } else if super::defs::kind_of(piece) == PAWN {
                pos.black_pawns.push(sq);
            } else {
                pos.black_pieces.push(sq);
            }
            file += 1;
        }
    }
    Ok(())
}

fn char_to_piece(c: char) -> Option<Piece> {
    Some(match c {
        'p' => B_PAWN,
        'n' => B_KNIGHT,
        'b' => B_BISHOP,
        'r' => B_ROOK,
        'q' => B_QUEEN,
        'k' => B_KING,
        'P' => W_PAWN,
        'N' => W_KNIGHT,
        'B' => W_BISHOP,
        'R' => W_ROOK,
        'Q' => W_QUEEN,
        'K' => W_KING,
        _ => return None,
    })
}

fn parse_side(pos: &mut Position, s: &str) -> Result<(), EngineError> {
    match s {
        "w" => {
            pos.flags |= Flags::WHITE_TO_MOVE;
            Ok(())
        }
        "b" => Ok(()),
        other => Err(EngineError::Fen(format!(
            "side to move must be 'w' or 'b', found '{}'",
            other
        ))),
    }
}

fn parse_castling(pos: &mut Position, s: &str) -> Result<(), EngineError> {
    if s == "-" {
        return Ok(());
    }
    for c in s.chars() {
        match c {
            'K' => pos.flags |= Castling::WK,
            'Q' => pos.flags |= Castling::WQ,
            'k' => pos.flags |= Castling::BK,
            'q' => pos.flags |= Castling::BQ,
            other => {
                return Err(EngineError::Fen(format!(
                    "unknown castling availability character '{}'",
                    other
                )))
            }
        }
    }
    Ok(())
}

fn parse_en_passant(pos: &mut Position, s: &str) -> Result<(), EngineError> {
    if s == "-" {
        pos.en_pass_square = INVALID_SQUARE;
        return Ok(());
    }
    let mut chars = s.chars();
    let file_c = chars
        .next()
        .ok_or_else(|| EngineError::Fen("empty en-passant field".to_string()))?;
    let rank_c = chars
        .next()
        .ok_or_else(|| EngineError::Fen(format!("malformed en-passant square '{}'", s)))?;
    if chars.next().is_some() {
        return Err(EngineError::Fen(format!("malformed en-passant square '{}'", s)));
    }
    if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
        return Err(EngineError::Fen(format!("malformed en-passant square '{}'", s)));
    }
    let file = file_c as i16 - 'a' as i16;
    let rank = rank_c as i16 - '1' as i16;
    pos.en_pass_square = square_of(file, rank);
    Ok(())
}

fn parse_halfmove_clock(pos: &mut Position, s: &str) -> Result<(), EngineError> {
    pos.halfmove_clock = s
        .parse::<u8>()
        .map_err(|_| EngineError::Fen(format!("malformed halfmove clock '{}'", s)))?;
    Ok(())
}

fn parse_fullmove_number(s: &str) -> Result<u16, EngineError> {
    s.parse::<u16>()
        .map_err(|_| EngineError::Fen(format!("malformed fullmove number '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_round_trips() {
        let pos = Position::from_fen(crate::defs::FEN_START_POSITION).unwrap();
        assert_eq!(pos.to_fen(), crate::defs::FEN_START_POSITION);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0").is_err());
    }

    #[test]
    fn rejects_bad_piece_char() {
        assert!(Position::from_fen("xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
    }

    #[test]
    fn en_passant_square_is_parsed() {
        let pos =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
                .unwrap();
        assert_eq!(pos.en_pass_square, square_of(4, 5));
    }
}
