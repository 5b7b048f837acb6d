//! Storage abstraction for coordinate vectors.
//!
//! A coordinate is a list of per-dimension indices. The same storage type is
//! used for shape extents and strides, so a [`Shape`](crate::Shape) and the
//! coordinates it produces always agree on the rank representation:
//!
//! - `Vec<u64>` holds coordinates of any rank, decided at runtime.
//! - `[u64; N]` fixes the rank at compile time (see [`crate::rank2`]).

use std::fmt::Debug;
use std::hash::Hash;

/// A fixed-length vector of `u64` components addressing one cell of a shape.
pub trait Coord:
    Clone + Debug + PartialEq + Eq + Hash + Send + Sync + AsRef<[u64]> + AsMut<[u64]> + 'static
{
    /// Builds a coordinate from its components.
    ///
    /// Returns `None` if the storage cannot hold `values.len()` components
    /// (a fixed-size array of a different length).
    fn from_slice(values: &[u64]) -> Option<Self>;

    /// Number of components.
    #[inline]
    fn rank(&self) -> usize {
        self.as_ref().len()
    }
}

impl Coord for Vec<u64> {
    #[inline]
    fn from_slice(values: &[u64]) -> Option<Self> {
        Some(values.to_vec())
    }
}

impl<const N: usize> Coord for [u64; N] {
    #[inline]
    fn from_slice(values: &[u64]) -> Option<Self> {
        values.try_into().ok()
    }
}
