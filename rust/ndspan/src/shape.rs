//! The iteration domain: an immutable list of positive dimension extents.

use ndspan_common::{Error, Result};

use crate::coord::Coord;

/// An N-dimensional box of cells with row-major linearization.
///
/// Dimension 0 varies slowest and the last dimension fastest. The linear
/// position of a coordinate is `Σ coord[i] * stride[i]`, where
/// `stride[i] = Π_{j > i} extent[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape<C: Coord = Vec<u64>> {
    dims: C,
    strides: C,
    total_size: u64,
}

impl<C: Coord> Shape<C> {
    /// Creates a shape from the given extents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if `dims` is empty, if any extent is zero, or if
    /// the total number of cells does not fit in a `u64`.
    pub fn new(dims: C) -> Result<Self> {
        let extents = dims.as_ref();
        if extents.is_empty() {
            return Err(Error::invalid_shape(extents, "rank must be at least 1"));
        }
        if extents.contains(&0) {
            return Err(Error::invalid_shape(extents, "extents must be positive"));
        }

        let mut strides = dims.clone();
        let mut total_size = 1u64;
        for (stride, &extent) in strides.as_mut().iter_mut().zip(extents).rev() {
            *stride = total_size;
            total_size = total_size
                .checked_mul(extent)
                .ok_or_else(|| Error::invalid_shape(extents, "total size overflows u64"))?;
        }

        Ok(Shape {
            dims,
            strides,
            total_size,
        })
    }

    /// Number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.as_ref().len()
    }

    /// Extent of every dimension.
    #[inline]
    pub fn dims(&self) -> &[u64] {
        self.dims.as_ref()
    }

    /// Row-major stride of every dimension, non-increasing, the last one is 1.
    #[inline]
    pub fn strides(&self) -> &[u64] {
        self.strides.as_ref()
    }

    /// Total number of cells.
    #[inline]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Extent of the fastest-varying (last) dimension.
    #[inline]
    pub fn fastest_extent(&self) -> u64 {
        self.dims()[self.rank() - 1]
    }

    /// Whether `coord` has this shape's rank and lies inside it.
    pub fn contains(&self, coord: &[u64]) -> bool {
        coord.len() == self.rank() && coord.iter().zip(self.dims()).all(|(&c, &d)| c < d)
    }

    /// Returns the row-major position of `coord`.
    ///
    /// # Errors
    ///
    /// Returns `CoordOutOfBounds` if the coordinate is not inside the shape.
    pub fn position(&self, coord: &[u64]) -> Result<u64> {
        if !self.contains(coord) {
            return Err(Error::coord_out_of_bounds(coord, self.dims()));
        }
        Ok(self.position_unchecked(coord))
    }

    /// Returns the coordinate at row-major `position`.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfBounds` if `position >= total_size()`.
    pub fn coord_of(&self, position: u64) -> Result<C> {
        if position >= self.total_size {
            return Err(Error::position_out_of_bounds(position, self.total_size));
        }
        Ok(self.coord_of_unchecked(position))
    }

    /// The first cell, all zeros.
    pub fn first_coord(&self) -> C {
        let mut coord = self.dims.clone();
        coord.as_mut().fill(0);
        coord
    }

    /// The last cell, every component at `extent - 1`.
    pub fn last_coord(&self) -> C {
        let mut coord = self.dims.clone();
        coord.as_mut().iter_mut().for_each(|c| *c -= 1);
        coord
    }

    /// Index of the outermost (slowest-varying) dimension whose stride does
    /// not exceed `limit`.
    ///
    /// Strides are non-increasing, so this is the first match. Returns `None`
    /// only for `limit == 0`.
    pub fn outermost_dim_within(&self, limit: u64) -> Option<usize> {
        self.strides().iter().position(|&stride| stride <= limit)
    }

    pub(crate) fn position_unchecked(&self, coord: &[u64]) -> u64 {
        debug_assert!(self.contains(coord));
        coord
            .iter()
            .zip(self.strides())
            .map(|(&c, &stride)| c * stride)
            .sum()
    }

    pub(crate) fn coord_of_unchecked(&self, mut position: u64) -> C {
        debug_assert!(position < self.total_size);
        let mut coord = self.strides.clone();
        for component in coord.as_mut() {
            let stride = *component;
            *component = position / stride;
            position %= stride;
        }
        coord
    }
}
