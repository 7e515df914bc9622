#![allow(dead_code)]

use serde_json::{json, Value};

/// Customer record used across the reader and writer matrices.
pub fn customer() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Smith",
        "age": 25,
        "address": {
            "streetAddress": "21 2nd Street",
            "city": "New York",
            "state": "NY",
            "postalCode": "10021"
        },
        "phoneNumber": [
            {"type": "home", "number": "212 555-1234"},
            {"type": "fax", "number": "646 555-4567"}
        ]
    })
}

pub fn defaults(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("defaults must be an object, got {other}"),
    }
}
