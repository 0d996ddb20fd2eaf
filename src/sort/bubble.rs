//! Exchange sort, historically called "bubble sort" by the benchmark.
//!
//! For every position `i`, each later element that precedes the one held at
//! `i` is swapped into it, so after the inner pass position `i` holds the
//! i-th smallest element. This is the selection-by-exchange variant rather
//! than the adjacent-swap textbook bubble sort: it always performs
//! n * (n - 1) / 2 comparisons, whatever the input order.

use crate::comparator::Comparator;

/// Sorts `items` in place into non-decreasing order under `cmp`.
///
/// Stability is not guaranteed.
pub fn bubble_sort<T, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    let len = items.len();
    for i in 0..len {
        for j in (i + 1)..len {
            if cmp.precedes(&items[j], &items[i]) {
                items.swap(i, j);
            }
        }
    }
}
