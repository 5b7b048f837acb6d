//! Mixed-radix counter over row-major coordinates.
//!
//! Dimension 0 is the most significant digit, the last dimension the least
//! significant one. Stepping a coordinate forward visits cells in exactly the
//! order of [`Shape::position`](crate::Shape::position), so
//! `position(step_forward(c)) == position(c) + 1` whenever no carry leaves
//! dimension 0.
//!
//! The routines work on plain slices and serve every coordinate storage,
//! including the `[u64; 2]` rank-2 instantiation.

/// Advances `coord` to its row-major successor within `extents`.
///
/// Increments the last component; a component that reaches its extent is reset
/// to 0 and the carry moves on to the previous dimension.
///
/// Returns `false` when the carry propagated past dimension 0, i.e. `coord`
/// was the last cell of the space. In that case `coord` has wrapped around to
/// all zeros.
#[inline]
pub fn step_forward(coord: &mut [u64], extents: &[u64]) -> bool {
    debug_assert_eq!(coord.len(), extents.len());
    for (component, &extent) in coord.iter_mut().zip(extents).rev() {
        *component += 1;
        if *component < extent {
            return true;
        }
        *component = 0;
    }
    false
}

/// Moves `coord` to its row-major predecessor within `extents`.
///
/// Returns `false` when the borrow propagated past dimension 0, i.e. `coord`
/// was the first cell of the space. In that case `coord` has wrapped around to
/// the last cell.
#[inline]
pub fn step_backward(coord: &mut [u64], extents: &[u64]) -> bool {
    debug_assert_eq!(coord.len(), extents.len());
    for (component, &extent) in coord.iter_mut().zip(extents).rev() {
        if *component > 0 {
            *component -= 1;
            return true;
        }
        *component = extent - 1;
    }
    false
}
