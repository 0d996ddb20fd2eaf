//! Binary search over a sorted slice.

use std::borrow::Borrow;

use crate::comparator::Comparator;

/// Searches `items` for an element equivalent to `target`.
///
/// Returns `Ok(index)` of a match, or `Err(insertion_point)` where inserting
/// `target` keeps the slice ordered. `items` must be sorted under `cmp`.
/// Items are compared through their borrowed form, so `String` keys can be
/// searched with a `&str` target.
pub fn binary_search<K, T, C>(items: &[K], target: &T, cmp: &C) -> Result<usize, usize>
where
    K: Borrow<T>,
    T: ?Sized,
    C: Comparator<T>,
{
    let mut low = 0usize;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let probe: &T = items[mid].borrow();

        if cmp.precedes(probe, target) {
            low = mid + 1;
        } else if cmp.precedes(target, probe) {
            high = mid;
        } else {
            return Ok(mid);
        }
    }

    Err(low)
}

/// Folds a search result into the signed encoding: the index on a hit,
/// `-(insertion_point + 1)` on a miss.
pub fn encode_search_result(result: Result<usize, usize>) -> isize {
    match result {
        Ok(index) => index as isize,
        Err(insertion_point) => -(insertion_point as isize) - 1,
    }
}
