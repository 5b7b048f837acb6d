use std::ops::Range;

use ndspan::{Coord, Granularity, RangeIterator, RangeIterator2D, SplitPolicy};

/// Splits `root` recursively until every piece refuses, checking each split
/// on the way. Returns the linear ranges of the final pieces, sorted.
fn split_to_leaves<C: Coord>(root: RangeIterator<C>, max_diff: u64) -> Vec<Range<u64>> {
    let mut pending = vec![root];
    let mut leaves = Vec::new();
    while let Some(mut piece) = pending.pop() {
        let before = piece.positions();
        match piece.try_split() {
            Some(suffix) => {
                let prefix = piece.positions();
                let rest = suffix.positions();
                assert_eq!(prefix.start, before.start);
                assert_eq!(prefix.end, rest.start);
                assert_eq!(rest.end, before.end);
                assert!(!prefix.is_empty() && !rest.is_empty());
                assert_eq!(piece.size() + suffix.size(), before.end - before.start);
                assert!(
                    piece.size().abs_diff(suffix.size()) < max_diff,
                    "unbalanced split of {before:?} into {prefix:?} and {rest:?}"
                );
                pending.push(piece);
                pending.push(suffix);
            }
            None => {
                assert_eq!(piece.positions(), before);
                leaves.push(before);
            }
        }
    }
    leaves.sort_by_key(|range| range.start);
    leaves
}

fn assert_exact_cover(leaves: &[Range<u64>], expected: Range<u64>) {
    let mut next = expected.start;
    for leaf in leaves {
        assert_eq!(leaf.start, next, "gap or overlap at {next}");
        next = leaf.end;
    }
    assert_eq!(next, expected.end);
}

#[test]
fn test_split_balance_2d() {
    let root = RangeIterator::new(vec![50, 40]).unwrap();
    let leaves = split_to_leaves(root, 40 + 2);
    assert_exact_cover(&leaves, 0..2000);

    let sizes: Vec<u64> = leaves.iter().map(|l| l.end - l.start).collect();
    let min = *sizes.iter().min().unwrap();
    let max = *sizes.iter().max().unwrap();
    assert!(max - min < 40 + 2);
    assert!(max < 40);
}

#[test]
fn test_split_balance_3d() {
    let root = RangeIterator::new(vec![60, 50, 40]).unwrap();
    let leaves = split_to_leaves(root, 50 * 40 + 2);
    assert_exact_cover(&leaves, 0..120_000);

    let sizes: Vec<u64> = leaves.iter().map(|l| l.end - l.start).collect();
    let min = *sizes.iter().min().unwrap();
    let max = *sizes.iter().max().unwrap();
    assert!(max - min < 50 * 40 + 2);
    assert_eq!(sizes.iter().sum::<u64>(), 120_000);
}

#[test]
fn test_first_splits_follow_outer_slices() {
    let mut iter = RangeIterator::new(vec![60, 50, 40]).unwrap();
    let suffix = iter.try_split().unwrap();
    assert_eq!(suffix.start(), Some(&vec![30, 0, 0]));
    assert_eq!(iter.end(), Some(&vec![29, 49, 39]));

    let mut iter = RangeIterator2D::matrix(50, 40).unwrap();
    let suffix = iter.try_split().unwrap();
    assert_eq!(suffix.start(), Some(&[25, 0]));
    assert_eq!(iter.size(), 1000);
}

#[test]
fn test_split_conservation_random_shapes() {
    fastrand::seed(1_193_046);
    for _ in 0..50 {
        let rank = fastrand::usize(1..=4);
        let dims: Vec<u64> = (0..rank).map(|_| fastrand::u64(1..=9)).collect();
        let policy = SplitPolicy::new().with_min_split_size(Granularity::Elements(2));
        let mut root = RangeIterator::new(dims.clone())
            .unwrap()
            .with_split_policy(policy)
            .unwrap();

        let total = root.size();
        let start = fastrand::u64(0..total);
        let end = fastrand::u64(start..total);
        root.set_start(root.shape().coord_of(start).unwrap()).unwrap();
        root.set_end(root.shape().coord_of(end).unwrap()).unwrap();

        let max_stride = root.shape().strides()[0];
        let leaves = split_to_leaves(root, max_stride + 2);
        assert_exact_cover(&leaves, start..end + 1);
        assert!(leaves.iter().all(|leaf| leaf.end - leaf.start == 1), "{dims:?}");
    }
}

#[test]
fn test_pieces_visit_every_cell_once() {
    let root = RangeIterator::new(vec![7, 6, 5]).unwrap();
    let shape = root.shape().clone();

    let mut pending = vec![root];
    let mut visited = Vec::new();
    while let Some(mut piece) = pending.pop() {
        if let Some(suffix) = piece.try_split() {
            pending.push(suffix);
            pending.push(piece);
        } else {
            visited.extend(piece.map(|c| shape.position(&c).unwrap()));
        }
    }
    // Prefix pieces are consumed before their suffixes, so order is preserved.
    assert_eq!(visited, (0..shape.total_size()).collect::<Vec<_>>());
}

#[test]
fn test_split_after_partial_consumption() {
    let mut iter = RangeIterator::new(vec![10, 10]).unwrap();
    for _ in 0..35 {
        iter.next();
    }
    assert_eq!(iter.size(), 65);

    let suffix = iter.try_split().unwrap();
    assert_eq!(iter.positions().start, 35);
    assert_eq!(iter.positions().end, suffix.positions().start);
    assert_eq!(suffix.positions().end, 100);
    assert_eq!(suffix.positions().start % 10, 0);

    let tail: Vec<_> = suffix.collect();
    let head: Vec<_> = iter.collect();
    assert_eq!(head.len() + tail.len(), 65);
    assert_eq!(head.first(), Some(&vec![3, 5]));
    assert_eq!(tail.last(), Some(&vec![9, 9]));
}

#[test]
fn test_split_refused_state_unchanged() {
    let mut iter = RangeIterator::new(vec![3, 8]).unwrap();
    iter.set_start([2, 2]).unwrap();
    assert_eq!(iter.size(), 6);
    assert!(iter.try_split().is_none());
    assert_eq!(iter.positions(), 18..24);

    let mut single = RangeIterator::new(vec![1]).unwrap();
    let policy = SplitPolicy::new().with_min_split_size(Granularity::Elements(1));
    assert!(single.try_split_with(&policy).is_none());
    assert_eq!(single.size(), 1);
}

#[test]
fn test_split_inherits_policy() {
    let policy = SplitPolicy::new().with_min_split_size(Granularity::Elements(300));
    let mut iter = RangeIterator::new(vec![50, 40])
        .unwrap()
        .with_split_policy(policy)
        .unwrap();
    let suffix = iter.try_split().unwrap();
    assert_eq!(suffix.split_policy(), &policy);
}
