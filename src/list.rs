use std::cmp::Ordering;

use crate::array::DynamicArray;
use crate::error::Result;

/// An ordered, index-addressed sequence that permits duplicates.
///
/// Indices are `i32`. Indexed operations reject a negative index with
/// [`ArrayError::InvalidArgument`](crate::ArrayError::InvalidArgument) and an
/// index at or past [`size`](List::size) with
/// [`ArrayError::IndexOutOfRange`](crate::ArrayError::IndexOutOfRange), in both
/// cases before anything is modified.
pub trait List<T> {
    /// Adds `element` at the end.
    fn append(&mut self, element: T);

    /// Inserts `element` before the existing element at `index`.
    fn insert(&mut self, element: T, index: i32) -> Result<()>;

    fn get(&self, index: i32) -> Result<&T>;

    /// Removes the first element equal to `element` and returns it.
    fn remove_value(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq;

    fn remove_at(&mut self, index: i32) -> Result<T>;

    /// Removes every element without giving up capacity.
    fn clear(&mut self);

    /// Releases unused capacity.
    fn trim_to_size(&mut self);

    /// Sorts in place by `compare`. Equal elements may be reordered.
    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq;

    fn size(&self) -> usize;
}

impl<T> List<T> for DynamicArray<T> {
    fn append(&mut self, element: T) {
        DynamicArray::append(self, element)
    }

    fn insert(&mut self, element: T, index: i32) -> Result<()> {
        DynamicArray::insert(self, element, index)
    }

    fn get(&self, index: i32) -> Result<&T> {
        DynamicArray::get(self, index)
    }

    fn remove_value(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        DynamicArray::remove_value(self, element)
    }

    fn remove_at(&mut self, index: i32) -> Result<T> {
        DynamicArray::remove_at(self, index)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }

    fn trim_to_size(&mut self) {
        DynamicArray::trim_to_size(self)
    }

    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        DynamicArray::sort(self, compare)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::contains(self, element)
    }

    fn size(&self) -> usize {
        DynamicArray::size(self)
    }
}
