//! Row-major iteration over N-dimensional coordinate spaces, with balanced
//! splitting for parallel traversal.
//!
//! A [`RangeIterator`] walks the cells of a [`Shape`] (a box of positive
//! extents) in row-major order: dimension 0 varies slowest, the last dimension
//! fastest. The remaining cells always form one contiguous linear range, which
//! can be narrowed, consumed from either end, or divided with
//! [`RangeIterator::try_split`] into disjoint pieces that are owned and consumed
//! independently.
//!
//! # Key Types
//!
//! - [`Shape`] - Extents, strides and the coordinate <-> position mapping
//! - [`Cursor`] - The inclusive `[start, end]` range owned by an iterator
//! - [`RangeIterator`] - Sequential iteration, range restriction and splitting
//! - [`SplitPolicy`] - Minimum granularity below which ranges are not split
//! - [`RangeIterator2D`] - The rank-2 instantiation with `[u64; 2]` coordinates
//!
//! # Example
//!
//! ```
//! use ndspan::RangeIterator;
//!
//! let mut iter = RangeIterator::new(vec![5, 4]).unwrap();
//! iter.set_start([1, 1]).unwrap();
//! iter.set_end([3, 2]).unwrap();
//! assert_eq!(iter.size(), 10);
//!
//! let suffix = iter.try_split().unwrap();
//! assert_eq!(iter.size() + suffix.size(), 10);
//! ```

pub mod coord;
pub mod cursor;
pub mod odometer;
pub mod par;
pub mod partition;
pub mod rank2;
pub mod range_iter;
pub mod shape;
pub mod split;

pub use coord::Coord;
pub use cursor::Cursor;
pub use par::ParRangeIter;
pub use partition::{all_coordinates, partition};
pub use rank2::{RangeIterator2D, Shape2D};
pub use range_iter::{DynRangeIterator, RangeIterator};
pub use shape::Shape;
pub use split::{Granularity, SplitPolicy};
