// Reference perft node counts, verifying the move generator end to end
// through the public crate surface the way an external harness would.

use magog::movegen::Generator;
use magog::position::Position;

struct PerftCase {
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const CASES: &[PerftCase] = &[
    PerftCase {
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    PerftCase {
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    PerftCase {
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    PerftCase {
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467)],
    },
];

#[test]
fn reference_positions_match_known_node_counts() {
    for case in CASES {
        let pos = Position::from_fen(case.fen).expect("reference FEN must parse");
        for &(depth, expected) in case.depths {
            let mut gen = Generator::new(pos.clone());
            assert_eq!(
                gen.perft(depth),
                expected,
                "perft({}) mismatch for {}",
                depth,
                case.fen
            );
        }
    }
}

#[test]
fn tactical_only_perft_on_pawn_promotion_endgame() {
    // All four under-/over-promotions at depth 1, none of which can be
    // captures on an otherwise empty board; depth 2 is an immediate dead
    // end because the only tactical reply (none) is empty.
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = magog::movegen::generate_pseudo_legal(&pos, true, None);
    assert_eq!(moves.len(), 4);

    let mut legal = 0;
    let mut gen = Generator::new(pos);
    for rm in moves.iter() {
        if gen.push_move(rm.mv) {
            legal += 1;
            gen.pop_move();
        }
    }
    assert_eq!(legal, 4);
}

#[test]
fn divide_subtree_counts_sum_to_perft_total() {
    let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut gen = Generator::new(pos.clone());
    let divided = gen.perft_divide(3);
    let total: u64 = divided.iter().map(|(_, count)| count).sum();

    let mut gen_direct = Generator::new(pos);
    assert_eq!(total, gen_direct.perft(3));
}
