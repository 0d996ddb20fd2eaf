//! Property tests for the sort and search routines.

use phonebook_benchmark_rs::comparator::NaturalOrder;
use phonebook_benchmark_rs::hash_index::HashIndex;
use phonebook_benchmark_rs::search::{binary_search, jump_search, linear_search};
use phonebook_benchmark_rs::sort::{bubble_sort, is_sorted_by, quick_sort, quick_sort_with_rng};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sorted_copy<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

proptest! {
    #[test]
    fn bubble_sort_is_ordered_permutation(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut sorted = values.clone();
        bubble_sort(&mut sorted, &NaturalOrder);
        prop_assert!(is_sorted_by(&sorted, &NaturalOrder));
        prop_assert_eq!(sorted, sorted_copy(&values));
    }

    #[test]
    fn quick_sort_is_ordered_permutation(values in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut sorted = values.clone();
        quick_sort(&mut sorted, &NaturalOrder);
        prop_assert!(is_sorted_by(&sorted, &NaturalOrder));
        prop_assert_eq!(sorted, sorted_copy(&values));
    }

    #[test]
    fn quick_sort_handles_strings_with_duplicates(
        values in prop::collection::vec("[a-c]{0,3}", 0..200),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sorted = values.clone();
        quick_sort_with_rng(&mut sorted, &NaturalOrder, &mut rng);
        prop_assert_eq!(sorted, sorted_copy(&values));
    }

    #[test]
    fn binary_search_finds_present(values in prop::collection::vec(-100i32..100, 1..200), pick in any::<prop::sample::Index>()) {
        let sorted = sorted_copy(&values);
        let target = sorted[pick.index(sorted.len())];
        let index = binary_search(&sorted, &target, &NaturalOrder);
        prop_assert!(index.is_ok());
        prop_assert_eq!(sorted[index.unwrap()], target);
    }

    #[test]
    fn binary_search_insertion_point_keeps_order(values in prop::collection::vec(-100i32..100, 0..200), target in -120i32..120) {
        let sorted = sorted_copy(&values);
        prop_assume!(!sorted.contains(&target));
        let point = binary_search(&sorted, &target, &NaturalOrder).unwrap_err();
        let mut inserted = sorted.clone();
        inserted.insert(point, target);
        prop_assert!(is_sorted_by(&inserted, &NaturalOrder));
    }

    #[test]
    fn jump_and_binary_agree_on_integers(values in prop::collection::vec(-100i32..100, 0..300), target in -120i32..120) {
        let sorted = sorted_copy(&values);
        let jumped = jump_search(&sorted, &target, &NaturalOrder);
        let halved = binary_search(&sorted, &target, &NaturalOrder);
        prop_assert_eq!(jumped.is_some(), halved.is_ok());
        if let Some(i) = jumped {
            prop_assert_eq!(sorted[i], target);
        }
    }

    #[test]
    fn jump_and_binary_agree_on_strings(values in prop::collection::vec("[a-e]{1,4}", 0..150), target in "[a-e]{1,4}") {
        let sorted = sorted_copy(&values);
        let jumped = jump_search(&sorted, &target, &NaturalOrder);
        let halved = binary_search(&sorted, &target, &NaturalOrder);
        prop_assert_eq!(jumped.is_some(), halved.is_ok());
    }

    #[test]
    fn hash_index_is_exact_match(keys in prop::collection::vec("[a-d]{1,4}", 1..50), query in "[a-d]{1,4}") {
        let entries: Vec<String> = keys.iter().enumerate().map(|(i, k)| format!("{} {}", i, k)).collect();
        let index = HashIndex::build(&entries).unwrap();
        prop_assert_eq!(index.contains(&query), keys.contains(&query));
        // A hash hit always implies a substring hit, never the other way round.
        if index.contains(&query) {
            prop_assert!(linear_search(&entries, &query).is_some());
        }
    }
}
