use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Droppable(Arc<AtomicUsize>);

impl Drop for Droppable {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_new_uses_default_capacity() {
    let v: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(v.size(), 0);
    assert_eq!(v.capacity(), DEFAULT_BASE_CAPACITY);
    assert!(v.is_empty());
}

#[test]
fn test_with_capacity() {
    let v: DynamicArray<i32> = DynamicArray::with_capacity(500).unwrap();
    assert_eq!(v.capacity(), 500);

    let v: DynamicArray<i32> = DynamicArray::with_capacity(0).unwrap();
    assert_eq!(v.capacity(), 0);
    assert_eq!(v.size(), 0);
}

#[test]
fn test_negative_capacity_rejected() {
    let err = DynamicArray::<i32>::with_capacity(-1).unwrap_err();
    assert_eq!(err, ArrayError::InvalidArgument("Capacity cannot be less than 0"));
}

#[test]
fn test_growth_sequence() {
    let mut v = DynamicArray::new();
    let mut seen = vec![v.capacity()];
    for i in 0..100 {
        v.append(i);
        if *seen.last().unwrap() != v.capacity() {
            seen.push(v.capacity());
        }
    }
    assert_eq!(seen, vec![10, 16, 25, 38, 58, 88, 133]);
}

#[test]
fn test_zero_capacity_grows_to_default() {
    let mut v = DynamicArray::with_capacity(0).unwrap();
    v.append(1);
    assert_eq!(v.capacity(), DEFAULT_BASE_CAPACITY);

    let mut v = DynamicArray::with_capacity(2).unwrap();
    v.append(1);
    v.append(2);
    assert_eq!(v.capacity(), 2);
    v.append(3);
    assert_eq!(v.capacity(), DEFAULT_BASE_CAPACITY);
}

#[test]
fn test_insert_grows_full_buffer() {
    let mut v = DynamicArray::with_capacity(3).unwrap();
    v.append("a");
    v.append("b");
    v.append("c");
    v.insert("z", 0).unwrap();
    assert_eq!(v.capacity(), DEFAULT_BASE_CAPACITY);
    assert_eq!(v[0], "z");
    assert_eq!(v[3], "c");
}

#[test]
fn test_failed_insert_does_not_grow() {
    let mut v = DynamicArray::with_capacity(2).unwrap();
    v.append(1);
    v.append(2);
    assert!(v.insert(3, 2).is_err());
    assert_eq!(v.capacity(), 2);
    assert_eq!(v.size(), 2);
}

#[test]
fn test_trim_empty() {
    let mut v: DynamicArray<i32> = DynamicArray::with_capacity(500).unwrap();
    v.trim_to_size();
    assert_eq!(v.capacity(), DEFAULT_BASE_CAPACITY);

    let mut v: DynamicArray<i32> = DynamicArray::with_capacity(4).unwrap();
    v.trim_to_size();
    assert_eq!(v.capacity(), 4);

    let mut v: DynamicArray<i32> = DynamicArray::with_capacity(0).unwrap();
    v.trim_to_size();
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_trim_then_grow() {
    let mut v = DynamicArray::new();
    for i in 0..100 {
        v.append(i);
    }
    assert!(v.capacity() > 100);

    v.trim_to_size();
    assert_eq!(v.capacity(), 100);
    for i in 0..100 {
        assert_eq!(v[i], i);
    }

    v.append(999);
    assert_eq!(v.capacity(), 100 * 3 / 2 + 1);
    assert_eq!(v[100], 999);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut v = DynamicArray::new();
    for i in 0..20 {
        v.append(i);
    }
    let cap = v.capacity();
    v.clear();
    assert_eq!(v.size(), 0);
    assert_eq!(v.capacity(), cap);
    v.clear();
    assert_eq!(v.size(), 0);
}

#[test]
fn test_raii_drop() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut v = DynamicArray::new();
        for _ in 0..25 {
            v.append(Droppable(counter.clone()));
        }
    }
    assert_eq!(counter.load(Ordering::SeqCst), 25);
}

#[test]
fn test_clear_drops_elements() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..5 {
        v.append(Droppable(counter.clone()));
    }
    v.clear();
    assert_eq!(counter.load(Ordering::SeqCst), 5);
    drop(v);
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn test_removed_elements_dropped_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..4 {
        v.append(Droppable(counter.clone()));
    }

    let removed = v.remove_at(1).unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    drop(removed);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    v.trim_to_size();
    assert_eq!(v.capacity(), 3);
    drop(v);
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}

#[test]
fn test_zero_sized_elements() {
    let mut v = DynamicArray::new();
    for _ in 0..50 {
        v.append(());
    }
    assert_eq!(v.size(), 50);
    assert!(v.capacity() >= 50);
    assert!(v.contains(&()));
    assert_eq!(v.remove_value(&()), Some(()));
    assert_eq!(v.size(), 49);

    v.trim_to_size();
    assert_eq!(v.capacity(), 49);
    v.clear();
    v.trim_to_size();
    assert_eq!(v.capacity(), DEFAULT_BASE_CAPACITY);
}

#[test]
fn test_clone_is_independent() {
    let mut v = DynamicArray::with_capacity(3).unwrap();
    v.append(String::from("a"));
    v.append(String::from("b"));

    let mut copy = v.clone();
    assert_eq!(copy.capacity(), 3);
    copy.append(String::from("c"));
    copy.remove_at(0).unwrap();

    assert_eq!(v.size(), 2);
    assert_eq!(v[0], "a");
    assert_eq!(copy[0], "b");
    assert_eq!(copy[1], "c");
}

#[test]
fn test_debug_shows_live_elements() {
    let mut v = DynamicArray::new();
    v.append(1);
    v.append(2);
    assert_eq!(format!("{:?}", v), "[1, 2]");
}

#[test]
#[should_panic(expected = "Index: 3, Size: 3")]
fn test_out_of_bounds_index() {
    let mut v = DynamicArray::new();
    v.append(1);
    v.append(2);
    v.append(3);
    let _ = v[3];
}

#[test]
#[should_panic(expected = "Index cannot be negative")]
fn test_negative_index() {
    let v: DynamicArray<i32> = DynamicArray::new();
    let _ = v[-1];
}
