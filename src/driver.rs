//! Recursive fork-join driver over a primary/scratch buffer pair.
//!
//! Each call owns a disjoint, contiguous range of both buffers (enforced by
//! `split_at_mut`, which is also the whole synchronization argument: the two
//! halves can never touch each other's indices). Every call reports which
//! physical buffer ended up holding its sorted run, so parents can merge
//! without extra copies.

use crate::fork::ForkJoin;
use crate::merge::merge_runs;
use crate::radix::sort_sequential;

/// Identifies which buffer of the pair holds valid data after a call; the
/// other one is free scratch for the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BufferId {
    Primary,
    Scratch,
}

/// Leaf size for an input of `n` elements under a concurrency hint.
///
/// Fan-out is the largest power of two not above the hint, so the recursion
/// tree has depth `log2(P)` and about one leaf per worker. A hint of zero is
/// treated as one (fully sequential).
pub(crate) fn leaf_len(n: usize, concurrency: usize) -> usize {
    let workers = prev_power_of_two(concurrency.max(1));
    n.div_ceil(workers).max(1)
}

/// Largest power of two `<= n`. Requires `n >= 1`.
fn prev_power_of_two(n: usize) -> usize {
    debug_assert!(n >= 1);
    1 << (usize::BITS - 1 - n.leading_zeros())
}

/// Sort the range covered by `primary`/`scratch` and report where the run is.
///
/// Ranges at or below `leaf` get the four-pass sequential sort, which lands
/// the run back in `primary`. Larger ranges split in half, sort both halves
/// through the fork-join capability, and merge into whichever buffer the runs
/// do not occupy.
pub(crate) fn sort_range<F: ForkJoin>(
    fork: &F,
    primary: &mut [i32],
    scratch: &mut [i32],
    leaf: usize,
) -> BufferId {
    debug_assert_eq!(primary.len(), scratch.len());
    let n = primary.len();
    if n <= leaf {
        sort_sequential(primary, scratch);
        return BufferId::Primary;
    }

    let mid = n / 2;
    let (left, right) = {
        let (p_lo, p_hi) = primary.split_at_mut(mid);
        let (s_lo, s_hi) = scratch.split_at_mut(mid);
        fork.fork(
            || sort_range(fork, p_lo, s_lo, leaf),
            || sort_range(fork, p_hi, s_hi, leaf),
        )
    };

    // The halves differ in length by at most one, so they almost always
    // recurse to the same depth and agree on the buffer. When an odd split
    // straddles the leaf boundary they can disagree; bring the right run
    // alongside the left one before merging (disjoint ranges).
    if right != left {
        match left {
            BufferId::Primary => primary[mid..].copy_from_slice(&scratch[mid..]),
            BufferId::Scratch => scratch[mid..].copy_from_slice(&primary[mid..]),
        }
    }

    match left {
        BufferId::Primary => {
            merge_runs(&primary[..mid], &primary[mid..], scratch);
            BufferId::Scratch
        }
        BufferId::Scratch => {
            merge_runs(&scratch[..mid], &scratch[mid..], primary);
            BufferId::Primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fork::{OsThreads, RayonPool, Sequential};

    #[test]
    fn leaf_len_matches_power_of_two_fanout() {
        assert_eq!(leaf_len(100, 4), 25);
        assert_eq!(leaf_len(101, 4), 26);
        // Non-power-of-two hints round the fan-out down.
        assert_eq!(leaf_len(120, 6), 30);
        assert_eq!(leaf_len(1 << 20, 8), 1 << 17);
    }

    #[test]
    fn leaf_len_clamps_degenerate_hints() {
        assert_eq!(leaf_len(10, 0), 10);
        assert_eq!(leaf_len(10, 1), 10);
        assert_eq!(leaf_len(0, 4), 1);
        // More workers than elements: leaves stay non-empty.
        assert_eq!(leaf_len(3, 8), 1);
    }

    fn run_backend<F: ForkJoin>(fork: &F) {
        let mut primary = vec![5, -3, 9, 0, -3, 7, 1, -8, 2, 6, 4];
        let mut scratch = vec![0i32; primary.len()];
        let mut expected = primary.clone();
        expected.sort_unstable();

        let id = sort_range(fork, &mut primary, &mut scratch, 2);
        let sorted = match id {
            BufferId::Primary => &primary,
            BufferId::Scratch => &scratch,
        };
        assert_eq!(sorted, &expected);
    }

    #[test]
    fn drives_every_backend() {
        run_backend(&Sequential);
        run_backend(&OsThreads);
        run_backend(&RayonPool);
    }

    #[test]
    fn leaf_call_reports_primary() {
        let mut primary = vec![2, 1, 3];
        let mut scratch = vec![0i32; 3];
        let id = sort_range(&Sequential, &mut primary, &mut scratch, 8);
        assert_eq!(id, BufferId::Primary);
        assert_eq!(primary, [1, 2, 3]);
    }

    #[test]
    fn split_sizes_around_the_leaf_boundary() {
        // Exercise n == leaf, one below, one above for several leaf sizes.
        for leaf in 1..6usize {
            for n in [leaf.saturating_sub(1), leaf, leaf + 1, 2 * leaf + 1] {
                let mut primary: Vec<i32> = (0..n as i32).rev().collect();
                let mut scratch = vec![0i32; n];
                let mut expected = primary.clone();
                expected.sort_unstable();
                let id = sort_range(&Sequential, &mut primary, &mut scratch, leaf);
                let sorted = match id {
                    BufferId::Primary => &primary,
                    BufferId::Scratch => &scratch,
                };
                assert_eq!(sorted, &expected, "n={n} leaf={leaf}");
            }
        }
    }
}
