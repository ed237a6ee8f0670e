use toml::{Table, Value};

/// Resolve a dot-separated path such as `vm.0.name` against the tree.
///
/// Array steps take an integer index (negative counts from the end); table
/// steps take a key. Returns `None` when any step misses, including when a
/// scalar is reached with segments left over.
pub fn resolve<'a>(root: &'a Table, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = root.get(first)?;

    for segment in segments {
        current = step(current, segment)?;
    }
    Some(current)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => {
            let index = array_index(segment, items.len())?;
            items.get(index)
        }
        Value::Table(table) => table.get(segment),
        _ => None,
    }
}

fn array_index(segment: &str, len: usize) -> Option<usize> {
    let index: i64 = segment.trim().parse().ok()?;
    if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    } else {
        usize::try_from(index).ok()
    }
}
