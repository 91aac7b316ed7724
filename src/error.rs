use thiserror::Error;

/// Errors raised while configuring or seeding a simulation.
///
/// The grid engine itself has no error path: out-of-bounds coordinates panic.
#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid of {rows}x{cols} cells is too large (limit {max} cells)")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    #[error("fill density must be within 0.0..=1.0 (got {0})")]
    InvalidDensity(f64),

    #[error("tick interval must be at least 1 ms")]
    ZeroTick,

    #[error("pattern `{name}` ({height}x{width}) does not fit at ({row}, {col}) on a {rows}x{cols} grid")]
    PatternOutOfBounds {
        name: &'static str,
        height: usize,
        width: usize,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
