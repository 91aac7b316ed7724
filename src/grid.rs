//! # Grid engine
//!
//! A bounded (non-wrapping) Game of Life grid running the classic B3/S23 rule.
//!
//! Every cell keeps a running count of its live Moore neighbors. Instead of
//! recounting eight neighbors for every cell each generation, the engine only
//! touches the neighborhoods of cells whose state actually changes, pushing a
//! +1 / -1 delta into their counters.
//!
//! Cells are double buffered: `alive`/`neighbors` describe the committed
//! generation (what callers see), `next_alive`/`next_neighbors` accumulate the
//! pending one. A generation is evaluated entirely against the committed half
//! and only then committed, so no cell ever observes a neighbor that has
//! already advanced.
//!
//! ## Bounds
//!
//! Coordinates outside `[0, rows) x [0, cols)` are a caller bug. Every method
//! taking a `(row, col)` panics on them rather than folding them into a
//! neighboring row of the flat buffer. Use [`Grid::contains`] to clamp
//! cursor-derived coordinates first.

use rand::Rng;

/// Moore neighborhood offsets, row-major.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One grid cell with its committed and pending halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cell {
    alive: bool,
    next_alive: bool,
    /// Live neighbors in the committed generation (0-8).
    neighbors: u8,
    /// Live neighbors once the pending generation is committed.
    next_neighbors: u8,
}

/// Number of cells that flipped during one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Dead cells that came alive
    pub births: usize,
    /// Live cells that died
    pub deaths: usize,
}

/// Fixed-size Game of Life grid with incrementally maintained neighbor counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cell storage, `rows * cols` long
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    /// Live cells in the committed generation
    population: usize,
}

/// Flat indices of the in-bounds Moore neighbors of `(row, col)`.
///
/// Off-grid neighbors are skipped, so border cells behave as if surrounded
/// by permanently dead cells.
fn neighbor_indices(row: usize, col: usize, rows: usize, cols: usize) -> impl Iterator<Item = usize> {
    let mut out = [0usize; 8];
    let mut n = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if r < rows && c < cols {
            out[n] = r * cols + c;
            n += 1;
        }
    }
    out.into_iter().take(n)
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell dead and every count zero.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("a {rows}x{cols} grid does not fit in memory"));
        Grid {
            cells: vec![Cell::default(); len],
            rows,
            cols,
            population: 0,
        }
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `(row, col)` lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Whether the cell is alive in the committed generation.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].alive
    }

    /// Number of live neighbors of the cell in the committed generation.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)].neighbors
    }

    /// Number of live cells in the committed generation.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Iterates over the coordinates of live cells in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Makes a single cell alive, as a user edit.
    ///
    /// Does nothing if the cell is already alive, so it can be called on every
    /// frame while a button is held. Otherwise both the committed and the
    /// pending neighbor count of each in-bounds neighbor go up by one: the edit
    /// is visible right away, not only after the next generation.
    ///
    /// The cell's pending state is left untouched; the next
    /// [`advance_generation`](Self::advance_generation) overwrites it.
    ///
    /// # Returns
    ///
    /// `true` if the cell was dead and is now alive, `false` if it was
    /// already alive.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn place_alive_cell(&mut self, row: usize, col: usize) -> bool {
        let idx = self.index(row, col);
        if self.cells[idx].alive {
            return false;
        }
        self.cells[idx].alive = true;
        self.population += 1;

        for n in neighbor_indices(row, col, self.rows, self.cols) {
            let neighbor = &mut self.cells[n];
            neighbor.neighbors += 1;
            neighbor.next_neighbors += 1;
        }
        true
    }

    /// Advances the whole grid by one generation.
    ///
    /// Evaluation and commit both run inside this call; callers never see a
    /// half-advanced grid.
    pub fn advance_generation(&mut self) -> GenerationReport {
        let report = self.evaluate();
        self.commit();
        self.population = self.population + report.births - report.deaths;
        report
    }

    /// Decides every cell's next state from the committed half and pushes
    /// neighbor deltas for the cells that flip.
    ///
    /// Only `next_alive` and `next_neighbors` are written here.
    fn evaluate(&mut self) -> GenerationReport {
        let mut report = GenerationReport::default();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let Cell { alive, neighbors, .. } = self.cells[idx];

                let next_alive = match (alive, neighbors) {
                    (false, 3) => true,
                    (true, 2) | (true, 3) => true,
                    _ => false,
                };
                self.cells[idx].next_alive = next_alive;

                match (alive, next_alive) {
                    (false, true) => {
                        report.births += 1;
                        self.shift_next_neighbors(row, col, true);
                    }
                    (true, false) => {
                        report.deaths += 1;
                        self.shift_next_neighbors(row, col, false);
                    }
                    _ => {}
                }
            }
        }

        report
    }

    /// Adds (`born`) or removes one live neighbor from the pending counts
    /// around `(row, col)`.
    fn shift_next_neighbors(&mut self, row: usize, col: usize, born: bool) {
        for n in neighbor_indices(row, col, self.rows, self.cols) {
            let neighbor = &mut self.cells[n];
            if born {
                neighbor.next_neighbors += 1;
            } else {
                neighbor.next_neighbors -= 1;
            }
        }
    }

    /// Copies the pending half over the committed half for every cell.
    fn commit(&mut self) {
        for cell in &mut self.cells {
            cell.alive = cell.next_alive;
            cell.neighbors = cell.next_neighbors;
        }
    }

    /// Resets every cell to dead with zero counts.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.population = 0;
    }

    /// Clears the grid, then places each cell alive with probability `density`.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not within `0.0..=1.0`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.clear();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if rng.gen_bool(density) {
                    self.place_alive_cell(row, col);
                }
            }
        }
    }
}
