//! Balanced splitting of linear ranges along slice boundaries.
//!
//! A range is cut near its midpoint, snapped to a multiple of the stride of
//! the outermost dimension that fits twice into the range. Both halves are
//! then unions of whole slices of that dimension, plus at most one partial
//! slice at each outer edge, and their sizes differ by at most `stride + 1`.

use std::ops::Range;

use ndspan_common::{Result, verify_arg};
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::shape::Shape;

/// Minimum number of remaining cells for a range to be split further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// The extent of the fastest-varying dimension, i.e. one row.
    #[default]
    FastestExtent,
    /// A fixed number of cells.
    Elements(u64),
}

/// Controls how far [`RangeIterator::try_split`](crate::RangeIterator::try_split)
/// keeps dividing a range.
///
/// Splitting always stops below 2 cells regardless of the configured
/// granularity, which bounds the recursion depth of repeated splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitPolicy {
    /// Ranges with fewer cells than this are not split.
    pub min_split_size: Granularity,
}

impl SplitPolicy {
    pub fn new() -> SplitPolicy {
        Default::default()
    }

    pub fn with_min_split_size(mut self, min_split_size: Granularity) -> SplitPolicy {
        self.min_split_size = min_split_size;
        self
    }

    /// Checks that the policy values are usable.
    pub fn validate(&self) -> Result<()> {
        if let Granularity::Elements(n) = self.min_split_size {
            verify_arg!(min_split_size, n > 0);
        }
        Ok(())
    }

    /// The effective minimum split size for ranges of `shape`.
    pub fn min_split_size_for<C: Coord>(&self, shape: &Shape<C>) -> u64 {
        let min = match self.min_split_size {
            Granularity::FastestExtent => shape.fastest_extent(),
            Granularity::Elements(n) => n,
        };
        min.max(2)
    }
}

/// Where a range is cut, and along which dimension the cut was snapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPoint {
    /// First linear position of the suffix half.
    pub position: u64,
    /// Dimension whose slice boundaries the cut was aligned to.
    pub dim: usize,
    /// Stride of `dim`, the size of one slice.
    pub stride: u64,
}

/// Chooses the cut position for the half-open range `positions` of `shape`.
///
/// Returns `None` for ranges of fewer than 2 cells. Otherwise the returned
/// position lies strictly inside the range, so both halves are non-empty.
pub fn split_point<C: Coord>(shape: &Shape<C>, positions: Range<u64>) -> Option<SplitPoint> {
    let size = positions.end.checked_sub(positions.start)?;
    if size < 2 {
        return None;
    }

    // 2 * stride <= size guarantees a slice boundary within half a stride of
    // the midpoint and strictly inside the range.
    let dim = shape.outermost_dim_within(size / 2)?;
    let stride = shape.strides()[dim];

    let mid = positions.start + size / 2;
    let rem = mid % stride;
    let down = mid - rem;
    let snapped = if rem >= stride - rem {
        down.saturating_add(stride)
    } else {
        down
    };

    debug_assert!(positions.start < snapped && snapped < positions.end);
    Some(SplitPoint {
        position: snapped,
        dim,
        stride,
    })
}
