use parradix::{Backend, SortConfig, sort_into};
use proptest::prelude::*;

/// Comparison-sort baseline.
fn reference_sorted(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn prop_matches_reference_sort(
        values in prop::collection::vec(any::<i32>(), 0..2048),
        hint in 1usize..=9,
    ) {
        let mut out = vec![0i32; values.len()];
        sort_into(&values, &mut out, SortConfig::default().threads(hint)).unwrap();
        prop_assert_eq!(out, reference_sorted(&values));
    }

    #[test]
    fn prop_output_is_sorted_and_a_permutation(
        values in prop::collection::vec(-1000i32..1000, 0..512),
    ) {
        let mut out = vec![0i32; values.len()];
        sort_into(&values, &mut out, SortConfig::default().threads(4)).unwrap();

        prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
        // Multiset equality against the input.
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_backends_agree(
        values in prop::collection::vec(any::<i32>(), 0..512),
        hint in 1usize..=8,
    ) {
        let expected = reference_sorted(&values);
        for backend in [Backend::Rayon, Backend::OsThreads, Backend::Sequential] {
            let mut out = vec![0i32; values.len()];
            sort_into(&values, &mut out, SortConfig::default().backend(backend).threads(hint))
                .unwrap();
            prop_assert_eq!(&out, &expected, "backend={:?}", backend);
        }
    }

    #[test]
    fn prop_idempotent_on_sorted_input(
        values in prop::collection::vec(any::<i32>(), 0..512),
    ) {
        let sorted = reference_sorted(&values);
        let mut out = vec![0i32; sorted.len()];
        sort_into(&sorted, &mut out, SortConfig::default()).unwrap();
        prop_assert_eq!(out, sorted);
    }
}
