//! Parallel iteration through rayon.
//!
//! [`ParRangeIter`] hands the pieces produced by
//! [`RangeIterator::try_split`] to rayon's work-stealing scheduler. The
//! scheduler decides when and where to split; each piece is an owned iterator,
//! so workers never touch shared state.

use rayon::iter::plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::coord::Coord;
use crate::range_iter::RangeIterator;

/// Parallel iterator over the cells of a [`RangeIterator`].
///
/// Items arrive in no particular global order. Within a piece, cells are still
/// visited in row-major order.
#[derive(Debug, Clone)]
pub struct ParRangeIter<C: Coord> {
    iter: RangeIterator<C>,
}

impl<C: Coord> ParallelIterator for ParRangeIter<C> {
    type Item = C;

    fn drive_unindexed<Co>(self, consumer: Co) -> Co::Result
    where
        Co: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(RangeProducer(self.iter), consumer)
    }
}

impl<C: Coord> IntoParallelIterator for RangeIterator<C> {
    type Iter = ParRangeIter<C>;
    type Item = C;

    fn into_par_iter(self) -> Self::Iter {
        ParRangeIter { iter: self }
    }
}

struct RangeProducer<C: Coord>(RangeIterator<C>);

impl<C: Coord> UnindexedProducer for RangeProducer<C> {
    type Item = C;

    fn split(mut self) -> (Self, Option<Self>) {
        let suffix = self.0.try_split().map(RangeProducer);
        (self, suffix)
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::{Granularity, SplitPolicy};

    #[test]
    fn test_par_sum_matches_sequential() {
        let iter = RangeIterator::new(vec![60, 50, 40]).unwrap();
        let sequential: u64 = iter.clone().map(|c| c[0] * 10_000 + c[1] * 100 + c[2]).sum();
        let parallel: u64 = iter
            .into_par_iter()
            .map(|c| c[0] * 10_000 + c[1] * 100 + c[2])
            .sum();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_par_visits_every_cell_once() {
        let policy = SplitPolicy::new().with_min_split_size(Granularity::Elements(2));
        let iter = RangeIterator::new([17u64, 23])
            .unwrap()
            .with_split_policy(policy)
            .unwrap();
        let shape = iter.shape().clone();

        let mut positions: Vec<u64> = iter
            .into_par_iter()
            .map(|c| shape.position(&c).unwrap())
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, (0..17 * 23).collect::<Vec<_>>());
    }

    #[test]
    fn test_par_restricted_range() {
        let mut iter = RangeIterator::new(vec![10, 10]).unwrap();
        iter.set_start([2, 5]).unwrap();
        iter.set_end([7, 4]).unwrap();
        assert_eq!(iter.size(), 50);
        assert_eq!(iter.into_par_iter().count(), 50);
    }
}
