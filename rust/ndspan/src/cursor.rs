//! Inclusive linear sub-range of a shape, kept as a pair of coordinates.

use std::ops::Range;

use ndspan_common::{Error, Result, verify_arg};

use crate::coord::Coord;
use crate::odometer;
use crate::shape::Shape;

/// The `[start, end]` range of cells owned by one iterator.
///
/// Both bounds are inclusive coordinates. The linear position of `start` and
/// the number of remaining cells are cached and updated with every mutation,
/// so the size is never recomputed from the coordinates. When the cursor is
/// empty the bound coordinates carry no meaning and are not exposed.
#[derive(Debug, Clone)]
pub struct Cursor<C: Coord = Vec<u64>> {
    start: C,
    end: C,
    start_position: u64,
    len: u64,
}

impl<C: Coord> Cursor<C> {
    /// A cursor over every cell of `shape`.
    pub fn full(shape: &Shape<C>) -> Self {
        Cursor {
            start: shape.first_coord(),
            end: shape.last_coord(),
            start_position: 0,
            len: shape.total_size(),
        }
    }

    /// A cursor over the half-open linear range `positions` of `shape`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the range is reversed or extends past the
    /// end of the shape.
    pub fn from_positions(shape: &Shape<C>, positions: Range<u64>) -> Result<Self> {
        verify_arg!(positions, positions.start <= positions.end);
        verify_arg!(positions, positions.end <= shape.total_size());

        if positions.is_empty() {
            return Ok(Cursor {
                start: shape.first_coord(),
                end: shape.first_coord(),
                start_position: positions.start,
                len: 0,
            });
        }
        Ok(Cursor {
            start: shape.coord_of_unchecked(positions.start),
            end: shape.coord_of_unchecked(positions.end - 1),
            start_position: positions.start,
            len: positions.end - positions.start,
        })
    }

    /// Number of cells left in the range.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The covered cells as a half-open range of linear positions.
    #[inline]
    pub fn positions(&self) -> Range<u64> {
        self.start_position..self.start_position + self.len
    }

    /// The first remaining cell, `None` when empty.
    pub fn start(&self) -> Option<&C> {
        (!self.is_empty()).then_some(&self.start)
    }

    /// The last remaining cell, `None` when empty.
    pub fn end(&self) -> Option<&C> {
        (!self.is_empty()).then_some(&self.end)
    }

    /// Takes the first cell and steps `start` forward.
    pub fn pop_front(&mut self, extents: &[u64]) -> Option<C> {
        if self.is_empty() {
            return None;
        }
        let current = self.start.clone();
        self.start_position += 1;
        self.len -= 1;
        if self.len > 0 {
            let stepped = odometer::step_forward(self.start.as_mut(), extents);
            debug_assert!(stepped);
        }
        Some(current)
    }

    /// Takes the last cell and steps `end` backward.
    pub fn pop_back(&mut self, extents: &[u64]) -> Option<C> {
        if self.is_empty() {
            return None;
        }
        let current = self.end.clone();
        self.len -= 1;
        if self.len > 0 {
            let stepped = odometer::step_backward(self.end.as_mut(), extents);
            debug_assert!(stepped);
        }
        Some(current)
    }

    /// Drops the first `n` cells (or all of them, if fewer remain).
    pub fn skip_front(&mut self, shape: &Shape<C>, n: u64) {
        let n = n.min(self.len);
        self.start_position += n;
        self.len -= n;
        if self.len > 0 && n > 0 {
            self.start = shape.coord_of_unchecked(self.start_position);
        }
    }

    /// Moves the start bound to `coord`, found at linear `position`.
    ///
    /// `position` must lie within the current range; the range only shrinks.
    pub fn restrict_start(&mut self, coord: &[u64], position: u64) -> Result<()> {
        let allowed = self.positions();
        if !allowed.contains(&position) {
            return Err(Error::invalid_range("start", position, allowed));
        }
        self.start.as_mut().copy_from_slice(coord);
        self.start_position = position;
        self.len = allowed.end - position;
        Ok(())
    }

    /// Moves the end bound to `coord`, found at linear `position`.
    ///
    /// `position` must lie within the current range; the range only shrinks.
    pub fn restrict_end(&mut self, coord: &[u64], position: u64) -> Result<()> {
        let allowed = self.positions();
        if !allowed.contains(&position) {
            return Err(Error::invalid_range("end", position, allowed));
        }
        self.end.as_mut().copy_from_slice(coord);
        self.len = position - self.start_position + 1;
        Ok(())
    }

    /// Splits the range at linear position `at`: `self` keeps `[start, at - 1]`
    /// and the returned cursor owns `[at, end]`.
    ///
    /// `at` must be strictly inside the range so that both halves are non-empty.
    pub fn split_off(&mut self, shape: &Shape<C>, at: u64) -> Self {
        let positions = self.positions();
        assert!(
            positions.start < at && at < positions.end,
            "split point {at} is not inside {positions:?}"
        );

        let suffix_end = std::mem::replace(&mut self.end, shape.coord_of_unchecked(at - 1));
        self.len = at - positions.start;
        Cursor {
            start: shape.coord_of_unchecked(at),
            end: suffix_end,
            start_position: at,
            len: positions.end - at,
        }
    }
}
