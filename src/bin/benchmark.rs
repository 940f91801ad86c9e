//! Generation step benchmark: serial vs rayon-parallel

use std::time::Instant;

use life_board::Board;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_board(size: usize) -> Board {
    let mut board = Board::new(size, size).expect("benchmark sizes are positive");
    board.randomize(&mut StdRng::seed_from_u64(42), 0.3);
    board
}

fn benchmark(size: usize, iterations: u32, step: fn(&Board) -> Board) -> f64 {
    let mut board = random_board(size);

    let start = Instant::now();
    for _ in 0..iterations {
        board = step(&board);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [30, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Board::next_generation);
        let parallel_ms = benchmark(size, iterations, Board::next_generation_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
