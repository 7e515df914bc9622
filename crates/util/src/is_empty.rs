use serde_json::Value;

/// Check if a value is a container (object or array) with no own keys.
///
/// Scalars and `null` are not containers, so they are never "empty" here.
///
/// # Examples
///
/// ```
/// use dotgraph_util::is_empty::is_empty_container;
/// use serde_json::json;
///
/// assert!(is_empty_container(&json!({})));
/// assert!(is_empty_container(&json!([])));
/// assert!(!is_empty_container(&json!({"foo": "bar"})));
/// assert!(!is_empty_container(&json!(null)));
/// ```
pub fn is_empty_container(obj: &Value) -> bool {
    match obj {
        Value::Object(map) => map.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        _ => false,
    }
}

/// Check if a value can hold own keys.
pub fn is_container(obj: &Value) -> bool {
    matches!(obj, Value::Object(_) | Value::Array(_))
}
