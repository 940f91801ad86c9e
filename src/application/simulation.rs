use std::time::Duration;

use rand::Rng;

use super::config::{Config, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::domain::{Board, BoardError};
use crate::Error;

/// Fraction of cells brought to life by `randomize`
const RANDOM_DENSITY: f64 = 0.3;

/// Simulation owns the board and drives it on a repeating timer.
///
/// All calls into the board go through here, so a toggle can never land in
/// the middle of a generation step.
pub struct Simulation {
    board: Board,
    cell_size_px: u32,
    is_running: bool,
    generation: u64,
    interval: Duration,
    elapsed: Duration,
}

impl Simulation {
    /// Create a stopped simulation with an empty board sized from `config`
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let board = Board::new(config.rows(), config.cols())?;
        log::info!(
            "created {}x{} board ({} px cells, {} ms interval)",
            board.cols(),
            board.rows(),
            config.cell_size_px,
            config.interval_ms
        );

        Ok(Self {
            board,
            cell_size_px: config.cell_size_px,
            is_running: false,
            generation: 0,
            interval: Duration::from_millis(clamp_interval(config.interval_ms)),
            elapsed: Duration::ZERO,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.board.live_cells()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn cell_size_px(&self) -> u32 {
        self.cell_size_px
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }

    pub fn set_interval_ms(&mut self, ms: u64) {
        let ms = clamp_interval(ms);
        if ms != self.interval_ms() {
            log::info!("step interval set to {ms} ms");
        }
        self.interval = Duration::from_millis(ms);
    }

    /// Change the step interval by `delta_ms`, clamped to the allowed range
    pub fn adjust_interval(mut self, delta_ms: i64) -> Self {
        let ms = self.interval_ms().saturating_add_signed(delta_ms);
        self.set_interval_ms(ms);
        self
    }

    pub fn run(mut self) -> Self {
        if !self.is_running {
            log::info!("running at generation {}", self.generation);
        }
        self.is_running = true;
        self
    }

    /// Cancel future steps. A step in progress always completes first
    /// since steps run synchronously on the caller's thread.
    pub fn stop(mut self) -> Self {
        self.halt();
        self
    }

    fn halt(&mut self) {
        if self.is_running {
            log::info!("stopped at generation {}", self.generation);
        }
        self.is_running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Toggle run/stop state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.stop() } else { self.run() }
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        self.advance();
        self
    }

    fn advance(&mut self) {
        self.board = self.board.next_generation();
        self.generation += 1;
        log::debug!(
            "generation {}: {} live cells",
            self.generation,
            self.board.population()
        );
    }

    /// Feed elapsed wall time to the timer.
    ///
    /// Returns `true` when the interval elapsed and one generation was
    /// computed. Does nothing while stopped.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_running {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.elapsed < self.interval {
            return false;
        }

        self.advance();
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.board.toggle(x, y)
    }

    /// Toggle the cell under a pixel position relative to the board's
    /// top-left corner. Positions off the board are ignored.
    pub fn click(&mut self, px: f32, py: f32) -> Option<(usize, usize)> {
        let (x, y) = self.pixel_to_cell(px, py)?;
        self.toggle_cell(x, y).ok()?;
        log::debug!("toggled cell ({x}, {y})");
        Some((x, y))
    }

    /// Grid coordinates under a pixel position, if it lies on the board
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !(px >= 0.0 && py >= 0.0) {
            return None;
        }
        let size = self.cell_size_px as f32;
        let (x, y) = ((px / size).floor() as usize, (py / size).floor() as usize);
        let (rows, cols) = self.board.dimensions();
        (x < cols && y < rows).then_some((x, y))
    }

    /// Clear board and reset generation counter
    pub fn clear(mut self) -> Self {
        self.halt();
        self.board.clear();
        self.generation = 0;
        log::info!("board cleared");
        self
    }

    /// Randomize board and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.randomize_with(&mut rand::rng());
        self
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.halt();
        self.board.randomize(rng, RANDOM_DENSITY);
        self.generation = 0;
        log::info!("board randomized: {} live cells", self.board.population());
    }

    /// Seed a pattern at `(x, y)`; the board is unchanged on error
    pub fn place(&mut self, pattern: &crate::Pattern, x: usize, y: usize) -> Result<(), BoardError> {
        pattern.place_on(&mut self.board, x, y)
    }
}

fn clamp_interval(ms: u64) -> u64 {
    ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}
