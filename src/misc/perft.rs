/* =======================================================================
Magog is a chess playing engine.
======================================================================= */

use crate::movegen::Generator;
use crate::position::Position;
use std::time::Instant;

// Runs perft(1) through perft(depth) in turn, printing leaf-node counts
// and speed for each, mirroring the reference's iterative benchmarking
// harness. There is no transposition table here -- the value-type
// Position stack makes perft allocation-free without one.
pub fn run(root: Position, depth: u8) {
    let mut generator = Generator::new(root);
    let mut total_time_ms: u128 = 0;
    let mut total_nodes: u64 = 0;

    println!("Benchmarking perft 1-{}:", depth);

    for d in 1..=depth {
        let now = Instant::now();
        let leaf_nodes = generator.perft(d as u32);
        let elapsed = now.elapsed().as_millis();

        total_time_ms += elapsed;
        total_nodes += leaf_nodes;

        let nodes_per_sec = if elapsed > 0 {
            ((leaf_nodes * 1000) as f64 / elapsed as f64).floor()
        } else {
            leaf_nodes as f64
        };

        println!("perft {}: {} ({} ms, {} nodes/sec)", d, leaf_nodes, elapsed, nodes_per_sec);
    }

    if total_time_ms > 0 {
        let final_nps = ((total_nodes * 1000) as f64 / total_time_ms as f64).floor();
        println!("total time: {} ms", total_time_ms);
        println!("execution speed: {} nodes/sec", final_nps);
    }
}

// Prints one line per root move with its perft(depth-1) subtree size,
// for the `go perft <n>` divide variant used to diagnose move-generator
// bugs against a reference engine.
pub fn divide(root: Position, depth: u8) {
    let mut generator = Generator::new(root);
    let results = generator.perft_divide(depth as u32);
    let mut total = 0u64;
    for (mv, count) in &results {
        println!("{}: {}", mv.as_string(), count);
        total += count;
    }
    println!("total: {}", total);
}
