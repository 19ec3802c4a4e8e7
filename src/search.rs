//! Binary search over sorted slices.

use core::cmp::Ordering;

/// Searches `sorted` for an element equal to `x` and returns its index.
///
/// The slice must be sorted in ascending order. The search narrows an
/// inclusive `[low, high]` window around the midpoint `(low + high) / 2`;
/// when `x` occurs more than once, whichever copy the midpoints reach first is
/// returned. Returns `None` if `x` is not present.
///
/// # Examples
///
/// ```
/// use chain_map::binary_search;
///
/// let sorted = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&sorted, &7), Some(3));
/// assert_eq!(binary_search(&sorted, &4), None);
/// assert_eq!(binary_search::<i32>(&[], &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], x: &T) -> Option<usize> {
    let mut low = 0;
    // One past the inclusive upper bound, so an empty window never underflows.
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        match sorted[mid].cmp(x) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}
