mod common;

use common::{customer, defaults};
use dotgraph::{read, Operation};
use serde_json::{json, Value};

#[test]
fn tap_matrix() {
    let doc = customer();
    let reader = read(&doc);

    assert_eq!(reader.tap("address.city"), Ok(&json!("New York")));
    assert_eq!(reader.tap("phoneNumber.1.type"), Ok(&json!("fax")));
    assert_eq!(reader.tap("age"), Ok(&json!(25)));

    let err = reader.tap("address.missing").unwrap_err();
    assert_eq!(err.failed_at(), "address.missing");
    assert_eq!(err.operation(), Operation::Tap);

    let err = reader.tap("phoneNumber.2.type").unwrap_err();
    assert_eq!(err.failed_at(), "phoneNumber.2");
}

#[test]
fn tap_or_matrix() {
    let doc = customer();
    let reader = read(&doc);
    let area = json!("646");

    assert_eq!(reader.tap_or("phoneNumber.1.areaCode", &area), "646");
    assert_eq!(reader.tap_or("phoneNumber.1.type", &area), "fax");
    // falsy defaults still count as supplied
    assert_eq!(reader.tap_or("missing", &json!(false)), false);
    assert_eq!(reader.tap_or("missing", &Value::Null), &Value::Null);
}

#[test]
fn probe_matrix() {
    let doc = customer();
    let reader = read(&doc);

    assert!(reader.probe("address.city"));
    assert!(reader.probe("phoneNumber.1"));
    assert!(reader.probe("phoneNumber.1.number"));

    assert!(!reader.probe("address.missing"));
    assert!(!reader.probe("phoneNumber.1.missing"));
    assert!(!reader.probe("phoneNumber.2"));
    assert!(!reader.probe("phoneNumber.01"));
    assert!(!reader.probe("firstName.0"));
}

#[test]
fn collect_matrix() {
    let doc = customer();
    let reader = read(&doc);

    let (john, ny, fax) = (json!("John"), json!("NY"), json!("fax"));
    let expected = vec![Some(&john), Some(&ny), Some(&fax)];
    assert_eq!(
        reader.collect(["firstName", "address.state", "phoneNumber.1.type"]),
        expected
    );
    let paths = vec!["firstName".to_string(), "address.state".to_string(), "phoneNumber.1.type".to_string()];
    assert_eq!(reader.collect(&paths), expected);

    let got = reader.collect(["firstName", "address.missing", "phoneNumber.1.missing"]);
    assert_eq!(got, vec![Some(&json!("John")), None, None]);

    assert_eq!(
        reader.collect(["firstName", "address.zip"]),
        vec![Some(&json!("John")), None]
    );
}

#[test]
fn collect_with_defaults_matrix() {
    let doc = customer();
    let reader = read(&doc);
    let args = defaults(json!({
        "firstName": "Steve",
        "address.county": "North County",
        "phoneNumber.1.areaCode": "555"
    }));

    assert_eq!(
        reader.collect_with(&args),
        vec![&json!("John"), &json!("North County"), &json!("555")]
    );

    let small = json!({"a": 1});
    let args = defaults(json!({"a": 99, "missing": 7}));
    assert_eq!(read(&small).collect_with(&args), vec![&json!(1), &json!(7)]);
}

#[test]
fn extract_matrix() {
    let doc = customer();
    let reader = read(&doc);

    let out = reader.extract(["firstName", "address.state", "phoneNumber.1.type"]);
    assert_eq!(out.len(), 3);
    assert_eq!(out["firstName"], Some(&json!("John")));
    assert_eq!(out["address.state"], Some(&json!("NY")));
    assert_eq!(out["phoneNumber.1.type"], Some(&json!("fax")));

    let out = reader.extract(["firstName", "address.missing", "phoneNumber.1.missing"]);
    let keys: Vec<&str> = out.keys().map(String::as_str).collect();
    assert_eq!(keys, ["firstName", "address.missing", "phoneNumber.1.missing"]);
    assert_eq!(out["address.missing"], None);
    assert_eq!(out["phoneNumber.1.missing"], None);
}

#[test]
fn extract_with_defaults_matrix() {
    let doc = customer();
    let args = defaults(json!({
        "firstName": "Steve",
        "address.county": "North County",
        "phoneNumber.1.areaCode": "555"
    }));

    let out = read(&doc).extract_with(&args);
    assert_eq!(out.len(), 3);
    assert_eq!(out["firstName"], &json!("John"));
    assert_eq!(out["address.county"], &json!("North County"));
    assert_eq!(out["phoneNumber.1.areaCode"], &json!("555"));
}

#[test]
fn len_matrix() {
    assert_eq!(read(&customer()).len(), 5);
    assert_eq!(read(&json!({})).len(), 0);
    assert_eq!(read(&json!([1, 2])).len(), 2);
}

#[test]
fn property_matrix() {
    let doc = customer();
    let reader = read(&doc);

    assert!(reader.has_all_properties(["firstName", "lastName", "phoneNumber"]));
    assert!(reader.has_all_properties(vec!["firstName", "lastName", "phoneNumber"]));
    assert!(!reader.has_all_properties(["firstName", "lastName", "missing"]));

    assert!(reader.has_any_properties(["firstName", "missing1", "missing2"]));
    assert!(!reader.has_any_properties(["missing1", "missing2", "missing3"]));

    // properties are single level, not paths
    assert!(!reader.has_any_properties(["address.city"]));
}

#[test]
fn probe_all_any_matrix() {
    let doc = customer();
    let reader = read(&doc);

    assert!(reader.probe_all(["address.city", "address.state", "phoneNumber.0"]));
    assert!(!reader.probe_all(["address.city", "address.state", "phoneNumber.0.missing"]));

    assert!(reader.probe_any(["address.missing", "address.state", "phoneNumber.2"]));
    assert!(!reader.probe_any(["address.missing", "missing", "phoneNumber.2"]));
}

#[test]
fn truthy_matrix() {
    let mut doc = customer();
    doc["address"]["isUSAddress"] = json!(true);
    doc["address"]["isRussianAddress"] = json!(false);
    doc["address"]["apartment"] = json!("");
    doc["address"]["floor"] = json!(0);
    let reader = read(&doc);

    assert!(reader.truthy(["address.isUSAddress"]));
    assert!(reader.truthy(["address.isUSAddress", "firstName", "phoneNumber"]));
    assert!(!reader.truthy(["address.isRussianAddress"]));
    assert!(!reader.truthy(["address.apartment"]));
    assert!(!reader.truthy(["address.floor"]));
    assert!(!reader.truthy(["address.isCanadianAddress"]));
    assert!(!reader.truthy(["address.isUSAddress", "address.floor"]));
}

#[test]
fn null_is_absent_mid_path() {
    let doc = json!({"a": null, "b": {"c": null}});
    let reader = read(&doc);

    assert!(reader.probe("a"));
    assert!(!reader.probe("a.x"));
    assert_eq!(reader.tap("b.c.d").unwrap_err().failed_at(), "b.c.d");
    assert_eq!(reader.collect(["a", "a.x"]), vec![Some(&Value::Null), None]);
}
