//! Sequential, splittable iteration over a linear sub-range of a shape.

use std::iter::FusedIterator;
use std::ops::Range;

use ndspan_common::{Error, Result};

use crate::coord::Coord;
use crate::cursor::Cursor;
use crate::shape::Shape;
use crate::split::{self, SplitPolicy};

/// Range iterator with a runtime-determined rank.
pub type DynRangeIterator = RangeIterator<Vec<u64>>;

/// Iterates the cells of a [`Shape`] in row-major order, restricted to an
/// inclusive linear range `[start, end]`.
///
/// The iterator starts out covering the whole shape. The range can be narrowed
/// with [`set_start`](Self::set_start) and [`set_end`](Self::set_end), consumed
/// from either side, and divided with [`try_split`](Self::try_split), which
/// moves a suffix of the remaining cells into a new, independently owned
/// iterator. Pieces produced by splitting never overlap, so they can be handed
/// to different threads without any synchronization.
///
/// A single instance is not synchronized: all mutation goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct RangeIterator<C: Coord = Vec<u64>> {
    shape: Shape<C>,
    cursor: Cursor<C>,
    policy: SplitPolicy,
}

impl<C: Coord> RangeIterator<C> {
    /// Creates an iterator over every cell of a shape with extents `dims`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` for an empty rank, a zero extent, or a total
    /// size that overflows `u64`.
    pub fn new(dims: C) -> Result<Self> {
        Ok(Self::from_shape(Shape::new(dims)?))
    }

    /// Creates an iterator over every cell of `shape`.
    pub fn from_shape(shape: Shape<C>) -> Self {
        let cursor = Cursor::full(&shape);
        RangeIterator {
            shape,
            cursor,
            policy: SplitPolicy::default(),
        }
    }

    /// Creates an iterator over the half-open linear range `positions` of `shape`.
    pub fn with_positions(shape: Shape<C>, positions: Range<u64>) -> Result<Self> {
        let cursor = Cursor::from_positions(&shape, positions)?;
        Ok(RangeIterator {
            shape,
            cursor,
            policy: SplitPolicy::default(),
        })
    }

    /// Replaces the split policy used by [`try_split`](Self::try_split).
    ///
    /// Pieces split off later inherit the policy.
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Result<Self> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    pub fn shape(&self) -> &Shape<C> {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn split_policy(&self) -> &SplitPolicy {
        &self.policy
    }

    pub fn cursor(&self) -> &Cursor<C> {
        &self.cursor
    }

    /// Number of cells left to visit.
    #[inline]
    pub fn size(&self) -> u64 {
        self.cursor.len()
    }

    /// Whether at least one cell is left.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.cursor.is_empty()
    }

    /// The next cell to be returned, `None` when exhausted.
    pub fn start(&self) -> Option<&C> {
        self.cursor.start()
    }

    /// The last cell of the range, `None` when exhausted.
    pub fn end(&self) -> Option<&C> {
        self.cursor.end()
    }

    /// Remaining cells as a half-open range of linear positions.
    pub fn positions(&self) -> Range<u64> {
        self.cursor.positions()
    }

    /// Linear position of the next cell to be returned.
    ///
    /// For an exhausted iterator this is where the range ended up, the same as
    /// `positions().start`.
    pub fn start_position(&self) -> u64 {
        self.cursor.positions().start
    }

    /// Linear position of the last cell of the range, `None` when exhausted.
    pub fn end_position(&self) -> Option<u64> {
        let positions = self.cursor.positions();
        (!positions.is_empty()).then(|| positions.end - 1)
    }

    /// Returns the current start cell and advances past it.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` if no cell is left. The [`Iterator`] implementation
    /// reports the same condition as `None`.
    pub fn next_coord(&mut self) -> Result<C> {
        self.cursor
            .pop_front(self.shape.dims())
            .ok_or_else(Error::exhausted)
    }

    /// Moves the start of the range to `coord`.
    ///
    /// The restriction is linear: afterwards the iterator covers every cell whose
    /// row-major position lies between those of `coord` and the current end.
    ///
    /// # Errors
    ///
    /// - `CoordOutOfBounds` if `coord` is not inside the shape.
    /// - `InvalidRange` if `coord` lies outside the current range, which would
    ///   either widen the range or leave it with `start > end`.
    pub fn set_start(&mut self, coord: impl AsRef<[u64]>) -> Result<()> {
        let coord = coord.as_ref();
        let position = self.shape.position(coord)?;
        self.cursor.restrict_start(coord, position)
    }

    /// Moves the end of the range to `coord`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`set_start`](Self::set_start).
    pub fn set_end(&mut self, coord: impl AsRef<[u64]>) -> Result<()> {
        let coord = coord.as_ref();
        let position = self.shape.position(coord)?;
        self.cursor.restrict_end(coord, position)
    }

    /// Splits off a suffix of the remaining range using the iterator's own policy.
    ///
    /// See [`try_split_with`](Self::try_split_with).
    pub fn try_split(&mut self) -> Option<Self> {
        let policy = self.policy;
        self.try_split_with(&policy)
    }

    /// Divides the remaining range into two contiguous halves of near-equal size.
    ///
    /// `self` keeps the prefix `[start, mid - 1]` and the returned iterator owns
    /// the suffix `[mid, end]`. The cut is aligned to slice boundaries of the
    /// outermost dimension whose stride fits twice into the range, so the
    /// halves differ in size by at most one such slice plus one cell.
    ///
    /// Returns `None` and leaves `self` unchanged when fewer cells remain than
    /// the policy's minimum split size.
    pub fn try_split_with(&mut self, policy: &SplitPolicy) -> Option<Self> {
        let size = self.size();
        if size < policy.min_split_size_for(&self.shape) {
            return None;
        }

        let positions = self.positions();
        let point = split::split_point(&self.shape, positions.clone())?;
        log::trace!(
            "split {:?} at {} (dim {}, stride {})",
            positions,
            point.position,
            point.dim,
            point.stride
        );

        let suffix = self.cursor.split_off(&self.shape, point.position);
        Some(RangeIterator {
            shape: self.shape.clone(),
            cursor: suffix,
            policy: self.policy,
        })
    }
}

impl<C: Coord> Iterator for RangeIterator<C> {
    type Item = C;

    #[inline]
    fn next(&mut self) -> Option<C> {
        self.cursor.pop_front(self.shape.dims())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.size()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<C> {
        let n = u64::try_from(n).unwrap_or(u64::MAX);
        self.cursor.skip_front(&self.shape, n);
        self.next()
    }

    fn last(mut self) -> Option<C> {
        self.next_back()
    }
}

impl<C: Coord> DoubleEndedIterator for RangeIterator<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C> {
        self.cursor.pop_back(self.shape.dims())
    }
}

impl<C: Coord> FusedIterator for RangeIterator<C> {}
