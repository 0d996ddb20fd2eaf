//! Randomized quicksort.
//!
//! Every partition call draws a fresh, uniformly random pivot. Elements that
//! precede the pivot go left; everything else, including elements equivalent
//! to the pivot, goes right. The pivot itself is excluded from both groups,
//! so each call strictly shrinks the problem. Expected cost is O(n log n),
//! worst case O(n^2).
//!
//! Partitioning happens in place over index ranges. Only the smaller side is
//! recursed into; the larger side is handled by the loop, which bounds the
//! stack depth to O(log n) even for inputs full of duplicates.

use rand::Rng;

use crate::comparator::Comparator;

/// Sorts `items` in place under `cmp`, using the thread-local RNG for pivots.
pub fn quick_sort<T, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    let mut rng = rand::thread_rng();
    quick_sort_with_rng(items, cmp, &mut rng);
}

/// Same as [`quick_sort`] with an explicit pivot source.
pub fn quick_sort_with_rng<T, C, R>(mut items: &mut [T], cmp: &C, rng: &mut R)
where
    C: Comparator<T>,
    R: Rng + ?Sized,
{
    while items.len() > 1 {
        let pivot = partition(items, cmp, rng);

        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_with_rng(left, cmp, rng);
            items = right;
        } else {
            quick_sort_with_rng(right, cmp, rng);
            items = left;
        }
    }
}

/// Moves a random pivot to its final position and returns that position.
fn partition<T, C, R>(items: &mut [T], cmp: &C, rng: &mut R) -> usize
where
    C: Comparator<T>,
    R: Rng + ?Sized,
{
    let last = items.len() - 1;
    let pivot_index = rng.gen_range(0..items.len());
    items.swap(pivot_index, last);

    let mut store = 0;
    for j in 0..last {
        if cmp.precedes(&items[j], &items[last]) {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
