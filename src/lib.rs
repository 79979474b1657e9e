//! A growable array with `i32` indexing, explicit capacity control and an
//! in-place quicksort.
//!
//! [`DynamicArray`] owns one contiguous buffer. It grows by roughly 1.5x when
//! an insertion finds it full (see [`growth`]) and shrinks only when asked to
//! through [`DynamicArray::trim_to_size`]. Indexed operations return
//! [`ArrayError`] instead of panicking.

pub mod array;
pub mod error;
pub mod growth;
pub mod list;
pub mod sort;

pub use array::DynamicArray;
pub use error::{ArrayError, Result};
pub use list::List;

/// Capacity of [`DynamicArray::new`], and the floor every growth step starts from.
pub const DEFAULT_BASE_CAPACITY: usize = 10;

#[cfg(test)]
mod tests;
