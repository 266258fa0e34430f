//! Column-major grid placement.
//!
//! Entries fill columns of `nrows` consecutive items each: top-to-bottom,
//! then left-to-right.

use swatchplot_common::FigureError;

/// Row/column coordinates of one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

/// Grid dimensions for a known entry count and column count.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub count: usize,
    pub ncols: usize,
    /// Ceiling of `count / ncols`; zero when the grid is empty.
    pub nrows: usize,
}

impl GridLayout {
    pub fn new(count: usize, ncols: usize) -> Result<Self, FigureError> {
        if ncols == 0 {
            return Err(FigureError::InvalidColumnCount);
        }
        Ok(Self {
            count,
            ncols,
            nrows: count.div_ceil(ncols),
        })
    }

    /// Slot for the entry at `index`. Requires `index < count`.
    pub fn position(&self, index: usize) -> GridPos {
        debug_assert!(index < self.count);
        GridPos {
            row: index % self.nrows,
            col: index / self.nrows,
        }
    }
}
