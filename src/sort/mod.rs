pub mod bubble;
pub mod quick;

pub use bubble::bubble_sort;
pub use quick::{quick_sort, quick_sort_with_rng};

use crate::comparator::Comparator;

/// Returns true when no adjacent pair is out of order under `cmp`.
pub fn is_sorted_by<T, C: Comparator<T>>(items: &[T], cmp: &C) -> bool {
    items.windows(2).all(|pair| !cmp.precedes(&pair[1], &pair[0]))
}
