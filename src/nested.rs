//! Nested-sequence flattening
//!
//! [`Nested`] models an arbitrarily nested sequence-of-sequences; JSON
//! arrays like `[1,[2,[3]]]` deserialize onto it directly. [`flatten`]
//! produces the depth-first, left-to-right sequence of leaves without
//! using stack depth proportional to nesting depth.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::trampoline::{run, Step};

/// A sequence whose elements are either leaf values or nested sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A single leaf value
    Leaf(T),
    /// A (possibly empty) sequence of further nested values
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wrap a leaf value.
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    /// Wrap a sequence of nested values.
    pub fn list(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// Fully flatten a nested sequence into a flat ordered sequence.
///
/// Output preserves the depth-first, left-to-right order of leaves as
/// they appear in the input. Driven by the trampoline, so nesting depth
/// in the thousands costs no call-stack depth.
pub fn flatten<T: 'static>(input: Nested<T>) -> Vec<T> {
    let remaining: VecDeque<Nested<T>> = match input {
        Nested::List(items) => items.into(),
        leaf => VecDeque::from(vec![leaf]),
    };
    run(flatten_step(remaining, Vec::new()))
}

/// One step of the flattening: an empty work list terminates with the
/// accumulator; a nested head splices its elements back onto the front
/// of the work list; a leaf head moves to the accumulator.
fn flatten_step<T: 'static>(mut remaining: VecDeque<Nested<T>>, mut acc: Vec<T>) -> Step<Vec<T>> {
    match remaining.pop_front() {
        None => Step::Done(acc),
        Some(Nested::List(items)) => {
            for item in items.into_iter().rev() {
                remaining.push_front(item);
            }
            Step::more(move || flatten_step(remaining, acc))
        }
        Some(Nested::Leaf(value)) => {
            acc.push(value);
            Step::more(move || flatten_step(remaining, acc))
        }
    }
}

/// Parse a nested JSON array (numbers at the leaves) into a [`Nested`].
pub fn from_json_str(text: &str) -> Result<Nested<f64>> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a nested JSON array from a file.
pub fn read_nested_file(path: impl AsRef<Path>) -> Result<Nested<f64>> {
    let text = fs::read_to_string(path)?;
    from_json_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_flatten_single_leaf() {
        assert_eq!(flatten(Nested::leaf(7u64)), vec![7]);
    }

    #[test]
    fn test_flatten_empty_list() {
        let empty: Nested<u64> = Nested::list(vec![]);
        assert_eq!(flatten(empty), Vec::<u64>::new());
    }

    #[test]
    fn test_flatten_preserves_order() {
        // [1, [2, [3, [4, [5]]]]]
        let input = Nested::list(vec![
            Nested::leaf(1u64),
            Nested::list(vec![
                Nested::leaf(2),
                Nested::list(vec![
                    Nested::leaf(3),
                    Nested::list(vec![Nested::leaf(4), Nested::list(vec![Nested::leaf(5)])]),
                ]),
            ]),
        ]);
        assert_eq!(flatten(input), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_skips_empty_branches() {
        // [[], 1, [[], [2]], []]
        let input = Nested::list(vec![
            Nested::list(vec![]),
            Nested::leaf(1u64),
            Nested::list(vec![Nested::list(vec![]), Nested::list(vec![Nested::leaf(2)])]),
            Nested::list(vec![]),
        ]);
        assert_eq!(flatten(input), vec![1, 2]);
    }

    #[test]
    fn test_from_json_str() {
        let parsed = from_json_str("[1, [2, [3]]]").unwrap();
        assert_eq!(flatten(parsed), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = from_json_str("not a sequence").unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
