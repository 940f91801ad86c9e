use super::{BoardError, Cell};
use rand::Rng;
use rayon::prelude::*;

/// Moore neighborhood offsets, center excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Board is the fixed-size Game of Life grid.
///
/// Cells are addressed as `(x, y)` with `0 <= x < cols` and `0 <= y < rows`.
/// The edges are hard: positions beyond them count as dead and nothing wraps.
/// Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a board with exactly the given cells alive
    pub fn from_live_cells<I>(rows: usize, cols: usize, live: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new(rows, cols)?;
        for (x, y) in live {
            board.set(x, y, true)?;
        }
        Ok(board)
    }

    /// Grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to 1D index, checking bounds
    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x < self.cols && y < self.rows {
            Ok(y * self.cols + x)
        } else {
            Err(BoardError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Cell at a position already known to be in range
    fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.cols + x]
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.index(x, y).map(|idx| self.cells[idx].is_alive())
    }

    /// Flip a single cell in place
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Count live cells in the Moore neighborhood of `(x, y)`.
    ///
    /// Neighbors that fall outside the board contribute nothing; the result
    /// is always in `0..=8` and never includes the cell itself.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.cols)?;
                let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.rows)?;
                Some(self.cell(nx, ny))
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Next state of one cell, read against this (unmodified) board
    fn evolve_cell(&self, x: usize, y: usize) -> Cell {
        self.cell(x, y).evolve(self.count_live_neighbors(x, y))
    }

    /// Compute the next generation as a fresh board (serial).
    ///
    /// Every neighbor count reads `self`, so all cells transition
    /// simultaneously.
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| (x, y)))
            .map(|(x, y)| self.evolve_cell(x, y))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel next generation using rayon, one task per row.
    /// Produces the same board as [`Board::next_generation`].
    pub fn next_generation_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.cols).map(move |x| self.evolve_cell(x, y)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Coordinates of every live cell in row-major order (`y`, then `x`)
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx % cols, idx / cols))
    }

    pub fn live_cell_vec(&self) -> Vec<(usize, usize)> {
        self.live_cells().collect()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Bring each cell to life with probability `density` (clamped to 0..=1)
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(p)));
    }
}
