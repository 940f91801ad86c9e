use life_board::{Board, BoardError, Cell};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_board(seed: u64, rows: usize, cols: usize) -> Board {
    let mut board = Board::new(rows, cols).unwrap();
    board.randomize(&mut StdRng::seed_from_u64(seed), 0.4);
    board
}

#[test]
fn next_generation_leaves_input_untouched() {
    let board = random_board(11, 20, 25);
    let snapshot = board.clone();
    let _ = board.next_generation();
    let _ = board.next_generation_parallel();
    assert_eq!(board, snapshot);
}

#[test]
fn every_cell_follows_b3_s23() {
    for seed in 0..5 {
        let board = random_board(seed, 16, 23);
        let next = board.next_generation();
        let (rows, cols) = board.dimensions();

        for y in 0..rows {
            for x in 0..cols {
                let n = board.count_live_neighbors(x, y);
                assert!(n <= 8);
                let alive = board.is_alive(x, y).unwrap();
                let expected = Cell::from(alive).evolve(n).is_alive();
                assert_eq!(next.is_alive(x, y).unwrap(), expected, "cell ({x}, {y}) with {n} neighbors");
                match (alive, n) {
                    (true, 2 | 3) => assert!(expected),
                    (true, _) => assert!(!expected),
                    (false, 3) => assert!(expected),
                    (false, _) => assert!(!expected),
                }
            }
        }
    }
}

#[test]
fn neighbor_count_matches_brute_force() {
    let board = random_board(99, 9, 13);
    let (rows, cols) = board.dimensions();
    for y in 0..rows {
        for x in 0..cols {
            let mut expected = 0;
            for ny in y.saturating_sub(1)..=(y + 1).min(rows - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(cols - 1) {
                    if (nx, ny) != (x, y) && board.is_alive(nx, ny).unwrap() {
                        expected += 1;
                    }
                }
            }
            assert_eq!(board.count_live_neighbors(x, y), expected);
        }
    }
}

#[test]
fn empty_board_stays_empty() {
    let board = Board::new(12, 7).unwrap();
    assert_eq!(board.next_generation(), board);
}

#[test]
fn isolated_cell_dies() {
    let lone = Board::from_live_cells(5, 5, [(2, 2)]).unwrap();
    assert_eq!(lone.next_generation().population(), 0);

    let pair = Board::from_live_cells(5, 5, [(2, 2), (3, 2)]).unwrap();
    assert_eq!(pair.next_generation().population(), 0);
}

#[test]
fn block_is_still_life() {
    let block = Board::from_live_cells(4, 4, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
    assert_eq!(block.next_generation(), block);

    // Still stable when pressed into a corner
    let corner = Board::from_live_cells(4, 4, [(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
    assert_eq!(corner.next_generation(), corner);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = Board::from_live_cells(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
    let vertical = Board::from_live_cells(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();

    let once = horizontal.next_generation();
    assert_eq!(once, vertical);
    assert_eq!(once.next_generation(), horizontal);
}

#[test]
fn l_tromino_settles_into_block() {
    let l = Board::from_live_cells(4, 4, [(1, 1), (1, 2), (2, 2)]).unwrap();
    let block = Board::from_live_cells(4, 4, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
    assert_eq!(l.next_generation(), block);
}

#[test]
fn toggle_twice_restores_board() {
    let mut board = random_board(5, 6, 6);
    let before = board.clone();
    board.toggle(4, 1).unwrap();
    assert_ne!(board, before);
    board.toggle(4, 1).unwrap();
    assert_eq!(board, before);
}

#[test]
fn live_cells_are_row_major() {
    let board = Board::from_live_cells(10, 10, [(5, 5), (2, 3)]).unwrap();
    assert_eq!(board.live_cell_vec(), vec![(2, 3), (5, 5)]);

    let board = Board::from_live_cells(3, 3, [(2, 0), (0, 1), (1, 0)]).unwrap();
    assert_eq!(board.live_cell_vec(), vec![(1, 0), (2, 0), (0, 1)]);
    // Recomputed on each call
    assert_eq!(board.live_cell_vec(), board.live_cells().collect::<Vec<_>>());
}

#[test]
fn bounds_are_exclusive() {
    let mut board = Board::new(3, 4).unwrap();
    assert!(board.toggle(3, 2).is_ok());
    assert_eq!(
        board.toggle(4, 3),
        Err(BoardError::OutOfBounds { x: 4, y: 3, cols: 4, rows: 3 })
    );
    assert!(Board::from_live_cells(3, 4, [(0, 3)]).is_err());
}
