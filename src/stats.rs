//! Running totals shown in the statistics panel and printed after a
//! headless run.

use crate::grid::GenerationReport;

/// Stores statistics about the Game of Life simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Current generation number
    pub generation: u64,
    /// Total number of cells born since start
    pub cells_created: u64,
    /// Total number of cells that died since start
    pub cells_destroyed: u64,
    /// Total number of cells placed by hand
    pub cells_placed: u64,
    /// Current number of living cells
    pub current_population: u64,
}

impl Stats {
    /// Creates a new `Stats` instance starting from `population` live cells.
    pub fn new(population: usize) -> Self {
        Stats {
            current_population: population as u64,
            ..Stats::default()
        }
    }

    /// Folds one generation's births and deaths into the totals.
    pub fn record_generation(&mut self, report: GenerationReport, population: usize) {
        self.generation += 1;
        self.cells_created += report.births as u64;
        self.cells_destroyed += report.deaths as u64;
        self.current_population = population as u64;
    }

    /// Records a hand placement.
    ///
    /// # Arguments
    ///
    /// * `placed` - Whether the cell was newly made alive; placing over a live
    ///   cell is not counted
    /// * `population` - Live cells after the placement
    pub fn record_placement(&mut self, placed: bool, population: usize) {
        if placed {
            self.cells_placed += 1;
        }
        self.current_population = population as u64;
    }

    /// Average births per generation so far.
    pub fn birth_rate(&self) -> f64 {
        self.cells_created as f64 / self.generation.max(1) as f64
    }

    /// Average deaths per generation so far.
    pub fn death_rate(&self) -> f64 {
        self.cells_destroyed as f64 / self.generation.max(1) as f64
    }
}
