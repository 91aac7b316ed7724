use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::LifeError;
use crate::patterns::PatternKind;

/// Largest grid, in cells, the simulation will allocate.
pub const MAX_CELLS: usize = 1 << 26;

/// Command-line configuration for the simulation.
#[derive(Debug, Clone, Parser)]
#[command(name = "delta-life", version, about = "Conway's Game of Life in the terminal")]
pub struct Config {
    /// Grid height in cells
    #[arg(long, default_value_t = 300)]
    pub rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 300)]
    pub cols: usize,

    /// Milliseconds between generations while playing
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Fraction of cells alive at start (0.0 - 1.0)
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for the random fill; random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pattern stamped in the middle of the grid after the random fill
    #[arg(long, value_enum)]
    pub pattern: Option<PatternKind>,

    /// Run without a terminal UI and print statistics
    #[arg(long)]
    pub headless: bool,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    pub generations: u64,

    /// Write logs to this file while the terminal UI is active
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 300,
            cols: 300,
            tick_ms: 100,
            density: 0.3,
            seed: None,
            pattern: None,
            headless: false,
            generations: 100,
            log_file: None,
        }
    }
}

impl Config {
    /// Rejects settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::EmptyGrid { rows: self.rows, cols: self.cols });
        }
        if self.rows.checked_mul(self.cols).map_or(true, |cells| cells > MAX_CELLS) {
            return Err(LifeError::GridTooLarge { rows: self.rows, cols: self.cols, max: MAX_CELLS });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density));
        }
        if self.tick_ms == 0 {
            return Err(LifeError::ZeroTick);
        }
        Ok(())
    }

    /// Time between generations while auto-play is on.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
