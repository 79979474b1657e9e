//! In-place quicksort used by [`DynamicArray::sort`](crate::DynamicArray::sort).
//!
//! The pivot is the middle element of each range and partitioning is Hoare
//! style: two cursors walk inward, skip elements already on the correct side
//! of the pivot, and swap the pairs that are not. The sort is not stable.
//!
//! Pending ranges live on an explicit work stack rather than the call stack.
//! The smaller half of every partition is processed first and the larger one
//! deferred, so the stack never holds more than O(log n) ranges.

use std::cmp::Ordering;

/// Sorts `data` in place with the three-way comparison `compare`.
///
/// An inconsistent `compare` leaves the elements in an unspecified order but
/// never panics or loops forever.
pub fn quick_sort<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }

    let mut pending: Vec<(usize, usize)> = Vec::new();
    let mut range = (0, data.len() - 1);

    loop {
        let (low, high) = range;
        let (h, l) = partition(data, low, high, &mut compare);

        let left = (h > low as isize).then(|| (low, h as usize));
        let right = (l < high).then_some((l, high));

        range = match (left, right) {
            (Some(left), Some(right)) => {
                if left.1 - left.0 <= right.1 - right.0 {
                    pending.push(right);
                    left
                } else {
                    pending.push(left);
                    right
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => match pending.pop() {
                Some(next) => next,
                None => break,
            },
        };
    }
}

/// Partitions `data[low..=high]` around its middle element.
///
/// Returns the crossed cursors `(h, l)`: everything in `low..=h` orders at or
/// before the pivot and everything in `l..=high` at or after it. `h` may end
/// one below `low`, hence the signed type.
fn partition<T, F>(data: &mut [T], low: usize, high: usize, compare: &mut F) -> (isize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The pivot value stays put; only its slot moves when it gets swapped.
    let mut pivot = low + (high - low) / 2;

    let (lo, hi) = (low as isize, high as isize);
    let mut l = lo;
    let mut h = hi;

    while l <= h {
        while l < hi && compare(&data[pivot], &data[l as usize]) == Ordering::Greater {
            l += 1;
        }
        while h > lo && compare(&data[pivot], &data[h as usize]) == Ordering::Less {
            h -= 1;
        }
        if l <= h {
            let (a, b) = (l as usize, h as usize);
            data.swap(a, b);
            if pivot == a {
                pivot = b;
            } else if pivot == b {
                pivot = a;
            }
            l += 1;
            h -= 1;
        }
    }

    (h, l as usize)
}
