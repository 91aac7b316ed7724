//! Named seed shapes that can be stamped onto a grid.
//!
//! Shapes are placed cell by cell through [`Grid::place_alive_cell`], so
//! neighbor counts stay consistent without any extra bookkeeping.

use clap::ValueEnum;
use tracing::info;

use crate::error::LifeError;
use crate::grid::Grid;

/// A named shape given as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (2, 12), (2, 13), (3, 11), (3, 15), (4, 10), (4, 16), (5, 10), (5, 14),
        (5, 16), (5, 17), (6, 10), (6, 16), (7, 11), (7, 15), (8, 12), (8, 13),
        (0, 24), (1, 22), (1, 24), (2, 20), (2, 21), (3, 20), (3, 21), (4, 20),
        (4, 21), (5, 22), (5, 24), (6, 24),
        (2, 34), (2, 35), (3, 34), (3, 35),
    ],
};

impl Pattern {
    /// Bounding box as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Stamps the pattern with its top-left corner at `(row, col)`.
    ///
    /// Nothing is placed unless the whole pattern fits.
    pub fn place(&self, grid: &mut Grid, row: usize, col: usize) -> Result<(), LifeError> {
        let (height, width) = self.size();
        let fits = row
            .checked_add(height)
            .zip(col.checked_add(width))
            .is_some_and(|(bottom, right)| bottom <= grid.rows() && right <= grid.cols());
        if !fits {
            return Err(LifeError::PatternOutOfBounds {
                name: self.name,
                height,
                width,
                row,
                col,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }

        for &(r, c) in self.cells {
            grid.place_alive_cell(row + r, col + c);
        }
        info!(pattern = self.name, row, col, "placed pattern");
        Ok(())
    }

    /// Stamps the pattern in the middle of the grid.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), LifeError> {
        let (height, width) = self.size();
        let row = grid.rows().saturating_sub(height) / 2;
        let col = grid.cols().saturating_sub(width) / 2;
        self.place(grid, row, col)
    }
}

/// Pattern names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternKind {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    RPentomino,
    GliderGun,
}

impl PatternKind {
    /// The shape this name selects.
    pub fn pattern(self) -> &'static Pattern {
        match self {
            PatternKind::Block => &BLOCK,
            PatternKind::Blinker => &BLINKER,
            PatternKind::Toad => &TOAD,
            PatternKind::Beacon => &BEACON,
            PatternKind::Glider => &GLIDER,
            PatternKind::RPentomino => &R_PENTOMINO,
            PatternKind::GliderGun => &GOSPER_GLIDER_GUN,
        }
    }
}
