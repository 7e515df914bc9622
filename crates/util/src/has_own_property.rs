use serde_json::Value;

/// Parse a path segment as a canonical array index.
///
/// Only plain decimal numbers without leading zeros qualify, so `"0"` and
/// `"12"` are indices while `"01"`, `"-1"`, `"+1"` and `""` are not.
///
/// # Examples
///
/// ```
/// use dotgraph_util::has_own_property::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("length"), None);
/// ```
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    segment.parse().ok()
}

/// Check if a value directly holds `key`.
///
/// Objects own their keys, arrays own the canonical indices `0..len`.
/// `null` and scalars own nothing.
///
/// # Examples
///
/// ```
/// use dotgraph_util::has_own_property::has_own_property_value;
/// use serde_json::json;
///
/// assert!(has_own_property_value(&json!({"foo": null}), "foo"));
/// assert!(has_own_property_value(&json!(["a", "b"]), "1"));
/// assert!(!has_own_property_value(&json!(["a", "b"]), "2"));
/// assert!(!has_own_property_value(&json!(null), "foo"));
/// ```
pub fn has_own_property_value(obj: &Value, key: &str) -> bool {
    own_child(obj, key).is_some()
}

/// Borrow the child stored under an own key.
pub fn own_child<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    match obj {
        Value::Object(map) => map.get(key),
        Value::Array(arr) => parse_index(key).and_then(|idx| arr.get(idx)),
        _ => None,
    }
}

/// Mutably borrow the child stored under an own key.
pub fn own_child_mut<'a>(obj: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match obj {
        Value::Object(map) => map.get_mut(key),
        Value::Array(arr) => parse_index(key).and_then(move |idx| arr.get_mut(idx)),
        _ => None,
    }
}

/// Number of own keys held by a value.
pub fn own_len(obj: &Value) -> usize {
    match obj {
        Value::Object(map) => map.len(),
        Value::Array(arr) => arr.len(),
        _ => 0,
    }
}
