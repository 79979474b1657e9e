//! Capacity policy for [`DynamicArray`](crate::DynamicArray).
//!
//! Growth is roughly 1.5x: `capacity * 3 / 2 + 1`, with truncating division,
//! and never below [`DEFAULT_BASE_CAPACITY`]. The exact formula is part of the
//! observable behavior, since callers can predict capacities from it.

use crate::DEFAULT_BASE_CAPACITY;

/// Capacity to move to when a full buffer of `current` slots needs one more.
///
/// # Panics
///
/// Panics with `"Capacity overflow"` if the next capacity does not fit in `usize`.
pub fn next_capacity(current: usize) -> usize {
    if current < DEFAULT_BASE_CAPACITY {
        return DEFAULT_BASE_CAPACITY;
    }
    current
        .checked_mul(3)
        .map(|tripled| tripled / 2 + 1)
        .expect("Capacity overflow")
}

/// Capacity a trim request should leave behind for `size` live elements.
///
/// An empty array keeps a small buffer instead of dropping to zero: the
/// capacity is lowered to [`DEFAULT_BASE_CAPACITY`] but never raised to it.
pub fn trimmed_capacity(size: usize, current: usize) -> usize {
    if size == 0 {
        current.min(DEFAULT_BASE_CAPACITY)
    } else {
        size
    }
}
