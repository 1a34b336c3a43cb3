//! Shared test helpers for integration tests

use springboard::nested::Nested;

/// Build a right-leaning nested list of the given depth whose leaves
/// are `1..=depth` in order, e.g. depth 3 gives `[1, [2, 3]]`.
pub fn deeply_nested(depth: usize) -> Nested<u64> {
    let mut node = Nested::leaf(depth as u64);
    for i in (1..depth as u64).rev() {
        node = Nested::list(vec![Nested::leaf(i), node]);
    }
    node
}

/// Reference flattener using the naive recursive formulation. Only safe
/// on shallow inputs.
#[allow(dead_code)]
pub fn reference_flatten<T: Clone>(input: &Nested<T>, out: &mut Vec<T>) {
    match input {
        Nested::Leaf(value) => out.push(value.clone()),
        Nested::List(items) => {
            for item in items {
                reference_flatten(item, out);
            }
        }
    }
}
