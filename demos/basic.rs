use dynamic_array::DynamicArray;

fn report<T>(step: &str, arr: &DynamicArray<T>) {
    println!("{:<24} size: {:>3}, capacity: {:>3}", step, arr.size(), arr.capacity());
}

fn main() -> dynamic_array::Result<()> {
    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::with_capacity(4)?;
    report("with_capacity(4)", &arr);

    for i in 1..=12 {
        let before = arr.capacity();
        arr.append(i * 10);
        if arr.capacity() != before {
            report(&format!("append({}) grew", i * 10), &arr);
        }
    }

    arr.insert(5, 0)?;
    report("insert(5, 0)", &arr);

    let removed = arr.remove_at(3)?;
    report(&format!("remove_at(3) -> {}", removed), &arr);

    arr.remove_value(&120);
    report("remove_value(120)", &arr);

    arr.sort(|a, b| b.cmp(a));
    println!("Sorted descending: {:?}", arr);

    arr.trim_to_size();
    report("trim_to_size()", &arr);

    match arr.get(arr.size() as i32) {
        Ok(value) => println!("Unexpected value past the end: {}", value),
        Err(err) => println!("Reading past the end fails: {}", err),
    }

    arr.clear();
    report("clear()", &arr);
    arr.trim_to_size();
    report("trim_to_size() on empty", &arr);

    Ok(())
}
