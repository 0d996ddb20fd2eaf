//! Jump search over a sorted slice.
//!
//! The slice is probed every floor(sqrt(n)) positions until the probe no
//! longer precedes the target, then walked back one step at a time while the
//! target precedes the current element. The landing element is only reported
//! when it is equivalent to the target.

use std::borrow::Borrow;

use crate::comparator::Comparator;

/// Returns the index of an element equivalent to `target`, if any.
///
/// `items` must be sorted under the same `cmp`, which sees each item in its
/// borrowed form.
pub fn jump_search<K, T, C>(items: &[K], target: &T, cmp: &C) -> Option<usize>
where
    K: Borrow<T>,
    T: ?Sized,
    C: Comparator<T>,
{
    if items.is_empty() {
        return None;
    }
    let key = |i: usize| Borrow::<T>::borrow(&items[i]);

    let last = items.len() - 1;
    let step = (items.len() as f64).sqrt() as usize;

    let mut current = 0;
    while cmp.precedes(key(current), target) {
        if current == last {
            // Every element precedes the target.
            return None;
        }
        // A jump past the end still has to inspect the trailing partial block.
        current = (current + step).min(last);
    }

    while current > 0 && cmp.precedes(target, key(current)) {
        current -= 1;
    }

    cmp.equivalent(key(current), target).then_some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::NaturalOrder;

    #[test]
    fn finds_every_present_element() {
        let items: Vec<u32> = (0..50).map(|i| i * 2).collect();
        for (i, value) in items.iter().enumerate() {
            assert_eq!(jump_search(&items, value, &NaturalOrder), Some(i));
        }
    }

    #[test]
    fn rejects_absent_neighbours() {
        let items: Vec<u32> = (0..50).map(|i| i * 2).collect();
        for value in (0..100).filter(|v| v % 2 == 1) {
            assert_eq!(jump_search(&items, &value, &NaturalOrder), None);
        }
        assert_eq!(jump_search(&items, &1000, &NaturalOrder), None);
    }

    #[test]
    fn reaches_trailing_partial_block() {
        // 11 elements, step 3: probes 0, 3, 6, 9 and then must clamp to 10.
        let items: Vec<u32> = (0..11).collect();
        assert_eq!(jump_search(&items, &10, &NaturalOrder), Some(10));
    }

    #[test]
    fn str_target_over_string_keys() {
        let keys: Vec<String> = ["Doe", "Moe", "Roe"].iter().map(|s| s.to_string()).collect();
        assert_eq!(jump_search(&keys, "Roe", &NaturalOrder), Some(2));
        assert_eq!(jump_search(&keys, "Noe", &NaturalOrder), None);
    }

    #[test]
    fn empty_and_single() {
        let empty: [String; 0] = [];
        assert_eq!(jump_search(&empty, &"Doe".to_string(), &NaturalOrder), None);

        let single = ["Doe".to_string()];
        assert_eq!(jump_search(&single, &"Doe".to_string(), &NaturalOrder), Some(0));
        assert_eq!(jump_search(&single, &"Abe".to_string(), &NaturalOrder), None);
    }
}
