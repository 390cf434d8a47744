//! Double-buffered toroidal grid for Conway's Game of Life.
//!
//! The grid owns two same-sized byte buffers. `current` is what hosts read;
//! `next` is scratch written during [`Grid::step`] and then swapped in. Every
//! byte is either `0` (dead) or `1` (alive).

use sha2::{Digest, Sha256};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::pattern::{Pattern, GLIDER};
use crate::rng::Lcg;

/// Grid width in cells.
pub const WIDTH: usize = 120;
/// Grid height in cells.
pub const HEIGHT: usize = 80;
/// Total number of cells.
pub const SIZE: usize = WIDTH * HEIGHT;
/// Percentage of cells brought alive by [`Grid::init_random`].
pub const DEFAULT_DENSITY: u32 = 15;
/// Where the initializer stamps the glider.
pub const SEED_PATTERN_ORIGIN: (i32, i32) = (10, 10);

const DEAD: u8 = 0;
const ALIVE: u8 = 1;

/// B3/S23: survive on 2 or 3 neighbours, birth on exactly 3.
#[inline]
#[must_use]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

#[inline(always)]
fn wrap(coord: usize, delta: isize, dim: usize) -> usize {
    let dim = dim as isize;
    ((coord as isize + delta + dim) % dim) as usize
}

/// Read-only window into the current generation.
///
/// Borrowing the grid for the lifetime of the view means the host cannot
/// step or edit the engine while holding it, and no copy is ever made.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    cells: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> GridView<'a> {
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        self.cells
    }

    /// Base address of the current buffer, for hosts reading across an FFI boundary.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at `(x, y)`, or dead when out of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            DEAD
        }
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let width = self.width;
        let cells: &'a [u8] = self.cells;
        cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == ALIVE)
            .map(move |(idx, _)| (idx % width, idx / width))
    }
}

impl fmt::Debug for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.cells.len())
            .finish()
    }
}

/// Simulation state: two pre-allocated buffers plus fixed dimensions.
#[derive(Clone)]
pub struct Grid {
    current: Vec<u8>,
    next: Vec<u8>,
    width: usize,
    height: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Allocates an all-dead `WIDTH` x `HEIGHT` grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: vec![DEAD; SIZE],
            next: vec![DEAD; SIZE],
            width: WIDTH,
            height: HEIGHT,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Borrowed zero-copy view of the current generation.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView {
            cells: &self.current,
            width: self.width,
            height: self.height,
        }
    }

    /// Base address of the current buffer.
    ///
    /// Both buffers live as long as the grid, but they trade places on every
    /// [`step`](Self::step), so the pointer must be re-read after each step.
    /// Writing through it bypasses the 0/1 invariant; use [`set_cell`](Self::set_cell).
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.current.as_ptr()
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| self.index(x, y))
    }

    /// Live cells among the 8 wrap-around neighbours of `(x, y)`.
    #[must_use]
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            let ny = wrap(y, dy, self.height);
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = wrap(x, dx, self.width);
                count += self.current[self.index(nx, ny)];
            }
        }
        count
    }

    /// Advances exactly one generation.
    ///
    /// Every next value is derived from `current` only; the buffers are swapped
    /// once the scan is complete. No allocation happens here.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.index(x, y);
                let alive = self.current[idx] == ALIVE;
                let neighbors = self.neighbor_count(x, y);
                self.next[idx] = u8::from(next_state(alive, neighbors));
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Seeds the grid with the glider plus roughly 15% random live cells.
    pub fn init_random(&mut self, seed: u32) {
        self.init_with_density(seed, DEFAULT_DENSITY);
    }

    /// Seeds the grid with the glider plus `density_percent`% random live cells.
    ///
    /// The random pass walks every cell, the glider's included, and only ever
    /// turns cells on, so the glider cells always start alive.
    pub fn init_with_density(&mut self, seed: u32, density_percent: u32) {
        let density = density_percent.min(100);
        self.clear();

        let (gx, gy) = SEED_PATTERN_ORIGIN;
        self.place_pattern(&GLIDER, gx, gy);

        let mut rng = Lcg::new(seed);
        for cell in &mut self.current {
            if rng.chance(density) {
                *cell = ALIVE;
            }
        }

        tracing::debug!(
            seed = seed,
            density = density,
            population = self.population(),
            "Grid initialized"
        );
    }

    /// Stamps `pattern` with its origin at `(x, y)`, wrapping at the edges.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i32, y: i32) {
        let (w, h) = (self.width as i64, self.height as i64);
        for &(dx, dy) in pattern.cells {
            let px = (i64::from(x) + i64::from(dx)).rem_euclid(w) as usize;
            let py = (i64::from(y) + i64::from(dy)).rem_euclid(h) as usize;
            let idx = self.index(px, py);
            self.current[idx] = ALIVE;
        }
    }

    /// Sets a cell; any non-zero value means alive. Out of range is ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, value: u8) {
        if let Some(idx) = self.checked_index(x, y) {
            self.current[idx] = u8::from(value != DEAD);
        }
    }

    /// Cell value at `(x, y)`; out of range reads as dead.
    #[must_use]
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.checked_index(x, y)
            .map_or(DEAD, |idx| self.current[idx])
    }

    /// Flips a cell. Out of range is ignored.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.checked_index(x, y) {
            self.current[idx] ^= ALIVE;
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.current.fill(DEAD);
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Fast non-cryptographic hash of the current generation, for cycle checks.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.current.hash(&mut hasher);
        hasher.finish()
    }

    /// Stable hex SHA-256 of the current generation.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.width as u32).to_le_bytes());
        hasher.update((self.height as u32).to_le_bytes());
        hasher.update(&self.current);
        hex::encode(hasher.finalize())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BLINKER, BLOCK};

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.view().live_cells().collect()
    }

    #[test]
    fn test_dimensions() {
        let grid = Grid::new();
        assert_eq!(grid.width(), 120);
        assert_eq!(grid.height(), 80);
        assert_eq!(grid.size(), grid.width() * grid.height());
        assert_eq!(grid.view().len(), SIZE);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_neighbor_count_wraps_corner() {
        let mut grid = Grid::new();
        grid.set_cell(WIDTH as i32 - 1, HEIGHT as i32 - 1, 1);
        assert_eq!(grid.neighbor_count(0, 0), 1);
        grid.set_cell(0, HEIGHT as i32 - 1, 1);
        grid.set_cell(WIDTH as i32 - 1, 0, 1);
        assert_eq!(grid.neighbor_count(0, 0), 3);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let mut grid = Grid::new();
        grid.set_cell(5, 5, 1);
        assert_eq!(grid.neighbor_count(5, 5), 0);
        assert_eq!(grid.neighbor_count(6, 6), 1);
    }

    #[test]
    fn test_neighbor_count_full_ring() {
        let mut grid = Grid::new();
        for (x, y) in [(4, 4), (5, 4), (6, 4), (4, 5), (6, 5), (4, 6), (5, 6), (6, 6)] {
            grid.set_cell(x, y, 1);
        }
        assert_eq!(grid.neighbor_count(5, 5), 8);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new();
        grid.place_pattern(&BLOCK, 10, 10);
        let before = live_set(&grid);
        grid.step();
        assert_eq!(live_set(&grid), before);
        assert_eq!(before, vec![(10, 10), (11, 10), (10, 11), (11, 11)]);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new();
        grid.place_pattern(&BLINKER, 20, 20);
        let horizontal = live_set(&grid);
        grid.step();
        assert_eq!(live_set(&grid), vec![(21, 19), (21, 20), (21, 21)]);
        grid.step();
        assert_eq!(live_set(&grid), horizontal);
    }

    #[test]
    fn test_step_reads_only_previous_generation() {
        // A blinker would collapse if updated in place during the scan.
        let mut grid = Grid::new();
        grid.place_pattern(&BLINKER, 0, 0);
        grid.step();
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_init_is_deterministic() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        a.init_random(123_456);
        b.init_random(123_456);
        assert_eq!(a.view().as_slice(), b.view().as_slice());
    }

    #[test]
    fn test_init_keeps_glider_cells() {
        let mut grid = Grid::new();
        grid.init_random(99);
        for &(dx, dy) in GLIDER.cells {
            assert_eq!(grid.get_cell(10 + dx, 10 + dy), 1);
        }
    }

    #[test]
    fn test_init_zero_density_only_glider() {
        let mut grid = Grid::new();
        grid.init_with_density(5, 0);
        assert_eq!(
            live_set(&grid),
            vec![(11, 10), (12, 11), (10, 12), (11, 12), (12, 12)]
        );
    }

    #[test]
    fn test_init_density_roughly_fifteen_percent() {
        let mut grid = Grid::new();
        grid.init_random(42);
        let ratio = grid.population() as f64 / SIZE as f64;
        assert!(ratio > 0.05 && ratio < 0.25, "density {ratio}");
    }

    #[test]
    fn test_init_clears_previous_state() {
        let mut grid = Grid::new();
        for x in 0..WIDTH as i32 {
            grid.set_cell(x, 40, 1);
        }
        grid.init_with_density(1, 0);
        assert_eq!(grid.population(), GLIDER.cells.len());
    }

    #[test]
    fn test_out_of_range_accessors() {
        let mut grid = Grid::new();
        grid.init_random(3);
        let before = grid.view().as_slice().to_vec();

        assert_eq!(grid.get_cell(-1, 0), 0);
        assert_eq!(grid.get_cell(WIDTH as i32, 0), 0);
        assert_eq!(grid.get_cell(0, HEIGHT as i32), 0);

        grid.set_cell(-1, 0, 1);
        grid.set_cell(WIDTH as i32, 0, 1);
        grid.toggle_cell(0, -1);
        assert_eq!(grid.view().as_slice(), before.as_slice());
    }

    #[test]
    fn test_set_cell_normalizes_value() {
        let mut grid = Grid::new();
        grid.set_cell(3, 4, 200);
        assert_eq!(grid.get_cell(3, 4), 1);
        grid.set_cell(3, 4, 0);
        assert_eq!(grid.get_cell(3, 4), 0);
    }

    #[test]
    fn test_toggle_cell() {
        let mut grid = Grid::new();
        grid.toggle_cell(7, 7);
        assert_eq!(grid.get_cell(7, 7), 1);
        grid.toggle_cell(7, 7);
        assert_eq!(grid.get_cell(7, 7), 0);
    }

    #[test]
    fn test_view_pointer_tracks_current_buffer() {
        let mut grid = Grid::new();
        grid.init_random(8);
        let first = grid.as_ptr();
        grid.step();
        let second = grid.as_ptr();
        assert_ne!(first, second);
        assert_eq!(grid.view().as_ptr(), second);
        grid.step();
        assert_eq!(grid.as_ptr(), first);
    }

    #[test]
    fn test_place_pattern_wraps() {
        let mut grid = Grid::new();
        grid.place_pattern(&BLOCK, WIDTH as i32 - 1, HEIGHT as i32 - 1);
        assert_eq!(
            live_set(&grid),
            vec![(0, 0), (119, 0), (0, 79), (119, 79)]
        );
        grid.step();
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_place_pattern_at_extreme_origin() {
        let mut grid = Grid::new();
        grid.place_pattern(&BLOCK, i32::MAX, i32::MAX);
        grid.place_pattern(&BLOCK, i32::MIN, i32::MIN);
        assert_eq!(grid.population(), 8);
        // i32::MAX = 17895697 * 120 + 7 and 26843545 * 80 + 47
        assert_eq!(grid.get_cell(7, 47), 1);
        assert_eq!(grid.get_cell(8, 48), 1);
    }

    #[test]
    fn test_fingerprint_tracks_state() {
        let mut a = Grid::new();
        let b = Grid::new();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.state_hash(), b.state_hash());
        a.set_cell(1, 1, 1);
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
