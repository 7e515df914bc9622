use serde_json::Value;

/// Check if a value is truthy.
///
/// `null`, `false`, zero and the empty string are falsy. Every array and
/// object is truthy, including empty ones.
///
/// # Examples
///
/// ```
/// use dotgraph_util::truthy::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("yes")));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_f64() {
            Some(f) => f != 0.0 && !f.is_nan(),
            None => true,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!(-0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-3)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    proptest! {
        #[test]
        fn nonzero_integers_are_truthy(n in any::<i64>().prop_filter("nonzero", |n| *n != 0)) {
            prop_assert!(is_truthy(&json!(n)));
        }

        #[test]
        fn nonempty_strings_are_truthy(s in ".+") {
            prop_assert!(is_truthy(&json!(s)));
        }
    }
}
