use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::Index;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::{ArrayError, Result};
use crate::{growth, sort, DEFAULT_BASE_CAPACITY};

/// A growable, index-addressed array over one contiguous owned buffer.
///
/// The first `size()` slots of the buffer hold live elements in order; the
/// rest of the capacity is uninitialized and never read. Indices are `i32`:
/// a negative index is an [`ArrayError::InvalidArgument`], an index past the
/// last element an [`ArrayError::IndexOutOfRange`].
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// let mut names = DynamicArray::new();
/// names.append("Nick");
/// names.append("Alice");
/// names.insert("Claire", 1).unwrap();
/// names.sort(|a, b| a.cmp(b));
///
/// assert_eq!(names.get(0), Ok(&"Alice"));
/// assert_eq!(names.size(), 3);
/// ```
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the array owns its elements outright, so moving it across threads
// moves the elements with it.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: `&DynamicArray<T>` only ever hands out `&T`.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> DynamicArray<T> {
    /// Creates an empty array with room for [`DEFAULT_BASE_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_BASE_CAPACITY)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// A capacity of zero is allowed; the first append then grows straight to
    /// [`DEFAULT_BASE_CAPACITY`].
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidArgument`] if `capacity` is negative.
    pub fn with_capacity(capacity: i32) -> Result<Self> {
        if capacity < 0 {
            return Err(ArrayError::InvalidArgument("Capacity cannot be less than 0"));
        }
        Ok(Self::allocate(capacity as usize))
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `element` after the last live element, growing the buffer if it is full.
    pub fn append(&mut self, element: T) {
        self.grow_if_full();

        unsafe {
            // SAFETY: after the growth check `len < cap`, so the slot is
            // allocated and holds no live element.
            ptr::write(self.ptr.as_ptr().add(self.len), element);
        }
        self.len += 1;
    }

    /// Inserts `element` at `index`, shifting `index..size()` one slot to the right.
    ///
    /// `index` must name an existing element; appending at the end goes
    /// through [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidArgument`] for a negative index,
    /// [`ArrayError::IndexOutOfRange`] when `index >= size()`. The array is
    /// untouched in both cases.
    pub fn insert(&mut self, element: T, index: i32) -> Result<()> {
        let at = self.check_index(index)?;
        self.grow_if_full();

        unsafe {
            // SAFETY: `at < len < cap`, so both the shifted range and the
            // slot one past it are inside the allocation.
            let p = self.ptr.as_ptr().add(at);
            ptr::copy(p, p.add(1), self.len - at);
            ptr::write(p, element);
        }
        self.len += 1;
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    pub fn get(&self, index: i32) -> Result<&T> {
        let at = self.check_index(index)?;
        Ok(&self.live()[at])
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    pub fn remove_at(&mut self, index: i32) -> Result<T> {
        let at = self.check_index(index)?;
        Ok(self.take(at))
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns the removed element, or `None` when nothing matched, in which
    /// case the array is unchanged.
    pub fn remove_value(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let at = self.position(element)?;
        Some(self.take(at))
    }

    /// Returns `true` if some live element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(element).is_some()
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }

        let live = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // Reset first: a panicking destructor must not leave these slots live.
        self.len = 0;
        unsafe {
            // SAFETY: the slice covers exactly the elements that were live.
            ptr::drop_in_place(live);
        }
    }

    /// Sorts the elements in place with the three-way comparison `compare`.
    ///
    /// The sort is an unstable quicksort, see [`sort::quick_sort`].
    pub fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quick_sort(self.live_mut(), compare);
    }

    /// Shrinks the buffer to exactly `size()` slots.
    ///
    /// An empty array is not shrunk to nothing: its capacity is lowered to
    /// [`DEFAULT_BASE_CAPACITY`] if it was larger, and otherwise left alone.
    pub fn trim_to_size(&mut self) {
        self.reallocate(growth::trimmed_capacity(self.len, self.cap));
    }

    fn check_index(&self, index: i32) -> Result<usize> {
        if index < 0 {
            return Err(ArrayError::InvalidArgument("Index cannot be negative"));
        }
        let at = index as usize;
        if at >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                size: self.len,
            });
        }
        Ok(at)
    }

    fn position(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live().iter().position(|candidate| candidate == element)
    }

    /// Moves the element at `at` out and closes the gap. `at` must be live.
    fn take(&mut self, at: usize) -> T {
        debug_assert!(at < self.len);
        unsafe {
            // SAFETY: `at < len`; the slot is read exactly once and then
            // overwritten by the shift, and `len` drops by one to match.
            self.len -= 1;
            let p = self.ptr.as_ptr().add(at);
            let removed = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - at);
            removed
        }
    }

    fn live(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn live_mut(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn grow_if_full(&mut self) {
        if self.len == self.cap {
            self.reallocate(growth::next_capacity(self.cap));
        }
    }

    fn allocate(capacity: usize) -> Self {
        let ptr = if Self::owns_memory(capacity) {
            let layout = Self::layout(capacity);
            let raw = unsafe { alloc::alloc(layout) };
            match NonNull::new(raw.cast::<T>()) {
                Some(p) => p,
                None => alloc::handle_alloc_error(layout),
            }
        } else {
            NonNull::dangling()
        };

        Self {
            ptr,
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Moves the live elements into a buffer of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap {
            return;
        }
        if mem::size_of::<T>() == 0 {
            self.cap = new_cap;
            return;
        }

        if new_cap == 0 {
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }

        let new_layout = Self::layout(new_cap);
        let raw = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: the buffer was allocated with the layout for `cap` slots,
            // and `realloc` keeps the first `len` elements in place.
            unsafe {
                alloc::realloc(
                    self.ptr.as_ptr().cast(),
                    Self::layout(self.cap),
                    new_layout.size(),
                )
            }
        };

        self.ptr = match NonNull::new(raw.cast::<T>()) {
            Some(p) => p,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    fn owns_memory(capacity: usize) -> bool {
        capacity != 0 && mem::size_of::<T>() != 0
    }

    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("Capacity overflow")
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            if Self::owns_memory(self.cap) {
                alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::allocate(self.cap);
        for element in self.live() {
            copy.append(element.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}

/// Panicking counterpart of [`DynamicArray::get`].
impl<T> Index<i32> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: i32) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}
