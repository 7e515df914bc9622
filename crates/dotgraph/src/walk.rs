//! Segment-by-segment traversal shared by the reader and the writer.
//!
//! Walks report failure as the index of the first segment that is not an
//! own key of the node reached so far. `null` and scalars own no keys, so
//! descending through them always fails.

use dotgraph_util::{is_container, own_child, own_child_mut, parse_index};
use serde_json::{Map, Value};

/// Follow `path` from `root`. An empty path yields `root`.
pub(crate) fn descend<'a>(root: &'a Value, path: &[String]) -> Result<&'a Value, usize> {
    let mut current = root;
    for (idx, step) in path.iter().enumerate() {
        current = own_child(current, step).ok_or(idx)?;
    }
    Ok(current)
}

/// Mutable counterpart of [`descend`].
pub(crate) fn descend_mut<'a>(root: &'a mut Value, path: &[String]) -> Result<&'a mut Value, usize> {
    let mut current = root;
    for (idx, step) in path.iter().enumerate() {
        current = own_child_mut(current, step).ok_or(idx)?;
    }
    Ok(current)
}

/// Set the value at `path`, creating every missing container on the way.
///
/// Intermediate nodes that are missing, `null` or scalars become empty
/// objects. An empty path does nothing.
pub(crate) fn plant(root: &mut Value, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = root;
    for step in parents {
        let child = slot(current, step);
        if !is_container(child) {
            *child = Value::Object(Map::new());
        }
        current = child;
    }
    *slot(current, last) = value;
}

/// Remove the value at `path` from its parent.
pub(crate) fn remove(root: &mut Value, path: &[String]) -> Result<Value, usize> {
    let Some((last, parents)) = path.split_last() else {
        return Err(0);
    };
    let parent = descend_mut(root, parents)?;
    take_child(parent, last).ok_or(parents.len())
}

/// Entry for `step` in `node`, inserted as `null` when missing.
///
/// Arrays accept an existing index or the next free one, which appends. Any
/// other key, including an index past the end, turns the node into an object
/// first: arrays keep their elements under stringified indices, scalars are
/// dropped.
fn slot<'v>(node: &'v mut Value, step: &str) -> &'v mut Value {
    match parse_index(step) {
        Some(idx) if node.as_array().is_some_and(|arr| idx <= arr.len()) => {
            if let Value::Array(arr) = &mut *node {
                if idx == arr.len() {
                    arr.push(Value::Null);
                }
            }
            &mut node[idx]
        }
        _ => {
            if !node.is_object() {
                *node = Value::Object(into_keyed(std::mem::take(node)));
            }
            &mut node[step]
        }
    }
}

fn into_keyed(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Array(arr) => arr
            .into_iter()
            .enumerate()
            .map(|(idx, item)| (idx.to_string(), item))
            .collect(),
        _ => Map::new(),
    }
}

/// Detach the child at `step`.
///
/// Popping the last array element keeps the array. Removing any other
/// element turns the array into an index-keyed object so the remaining
/// indices keep their values.
fn take_child(node: &mut Value, step: &str) -> Option<Value> {
    if let Value::Array(arr) = &mut *node {
        let idx = parse_index(step).filter(|&idx| idx < arr.len())?;
        if idx + 1 == arr.len() {
            return arr.pop();
        }
        *node = Value::Object(into_keyed(std::mem::take(node)));
    }
    match node {
        Value::Object(map) => map.shift_remove(step),
        _ => None,
    }
}
