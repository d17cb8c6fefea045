//! Stable two-pointer merge of two already-sorted runs.

/// Merge sorted runs `a` and `b` into `dest` (`dest.len() == a.len() + b.len()`).
///
/// Ties take from `a`, the lower-index run, so the merge is stable and the
/// output deterministic. The runs are trusted to be sorted; if they are not,
/// the output is fully populated but unsorted, with no failure signaled.
pub(crate) fn merge_runs(a: &[i32], b: &[i32], dest: &mut [i32]) {
    debug_assert_eq!(a.len() + b.len(), dest.len());
    let mut i = 0;
    let mut j = 0;
    for slot in dest.iter_mut() {
        if j == b.len() || (i != a.len() && a[i] <= b[j]) {
            *slot = a[i];
            i += 1;
        } else {
            *slot = b[j];
            j += 1;
        }
    }
}
