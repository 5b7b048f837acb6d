//! Enumerators and work partitioning built on top of [`RangeIterator`].

use std::cmp::Reverse;

use ndspan_common::{Result, verify_arg};

use crate::coord::Coord;
use crate::range_iter::{DynRangeIterator, RangeIterator};

/// Iterator over every coordinate of a shape with extents `dims`.
pub fn all_coordinates(dims: impl Into<Vec<u64>>) -> Result<DynRangeIterator> {
    RangeIterator::new(dims.into())
}

/// Divides `iter` into at most `max_pieces` disjoint iterators.
///
/// The largest remaining piece is split first (the earliest one on ties),
/// until `max_pieces` pieces exist or the largest piece is below the split
/// granularity. Pieces are returned in linear order, they cover exactly the
/// cells `iter` covered, and no two of them overlap.
///
/// # Errors
///
/// Returns `InvalidArgument` if `max_pieces` is zero.
pub fn partition<C: Coord>(
    iter: RangeIterator<C>,
    max_pieces: usize,
) -> Result<Vec<RangeIterator<C>>> {
    verify_arg!(max_pieces, max_pieces > 0);

    let total = iter.size();
    let mut pieces = vec![iter];
    while pieces.len() < max_pieces {
        let Some((idx, _)) = pieces
            .iter()
            .enumerate()
            .max_by_key(|(idx, piece)| (piece.size(), Reverse(*idx)))
        else {
            break;
        };
        // Pieces share one policy, so if the largest can't split neither can the rest.
        let Some(suffix) = pieces[idx].try_split() else {
            break;
        };
        pieces.insert(idx + 1, suffix);
    }

    log::debug!(
        "partitioned {} cells into {} pieces (requested {})",
        total,
        pieces.len(),
        max_pieces
    );
    Ok(pieces)
}
