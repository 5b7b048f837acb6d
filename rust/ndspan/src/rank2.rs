//! Rank-2 (row, column) instantiation.
//!
//! These are the generic types with `[u64; 2]` storage, not separate code: the
//! odometer, linearization and split rules are shared, so a 2D iterator visits
//! and splits exactly like a dynamic-rank iterator over the same extents.
//! Coordinates are plain arrays, with no heap allocation per cell.

use ndspan_common::Result;

use crate::range_iter::RangeIterator;
use crate::shape::Shape;

pub type Shape2D = Shape<[u64; 2]>;

pub type RangeIterator2D = RangeIterator<[u64; 2]>;

impl Shape<[u64; 2]> {
    pub fn rows(&self) -> u64 {
        self.dims()[0]
    }

    pub fn cols(&self) -> u64 {
        self.dims()[1]
    }
}

impl RangeIterator<[u64; 2]> {
    /// Iterator over all cells of a `rows x cols` matrix, row by row.
    pub fn matrix(rows: u64, cols: u64) -> Result<Self> {
        Self::new([rows, cols])
    }

    /// Returns the next cell as a `(row, col)` pair.
    pub fn next_row_col(&mut self) -> Option<(u64, u64)> {
        self.next().map(|[row, col]| (row, col))
    }
}
