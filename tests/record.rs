//! Record combinator tests: flat item shape, declared-field discipline,
//! fail-fast decode, schema construction errors, and `is`.

use attrcodec::{
    list, map, null, number, record, string, string_set, DecodeError, EncodeError, RecordCodec,
    RecordValue, SchemaError, Value, WireValue,
};
use std::collections::BTreeSet;

fn person() -> RecordCodec {
    record()
        .field("id", string())
        .field("name", string())
        .field("age", number())
        .build()
        .expect("schema")
}

fn person_values() -> RecordValue {
    let mut values = RecordValue::new();
    values.insert("id".to_string(), Value::from("123"));
    values.insert("name".to_string(), Value::from("John"));
    values.insert("age".to_string(), Value::from(30));
    values
}

#[test]
fn record_encodes_flat_item_without_outer_tag() {
    let item = person().encode(&person_values()).expect("encode");
    assert_eq!(item.len(), 3);
    assert_eq!(item.get("id"), Some(&WireValue::S("123".to_string())));
    assert_eq!(item.get("name"), Some(&WireValue::S("John".to_string())));
    assert_eq!(item.get("age"), Some(&WireValue::N("30".to_string())));
    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"age":{"N":"30"},"id":{"S":"123"},"name":{"S":"John"}}"#
    );
}

#[test]
fn record_roundtrips() {
    let codec = person();
    let values = person_values();
    let item = codec.encode(&values).expect("encode");
    assert_eq!(codec.decode(&item), Ok(values));
}

#[test]
fn undeclared_fields_are_never_emitted() {
    let mut values = person_values();
    values.insert("extra".to_string(), Value::from(true));
    let item = person().encode(&values).expect("encode");
    assert_eq!(item.len(), 3);
    assert!(!item.contains_key("extra"));
}

#[test]
fn extra_item_fields_are_ignored_on_decode() {
    let codec = person();
    let mut item = codec.encode(&person_values()).expect("encode");
    item.insert("unknown".to_string(), WireValue::Bool(true));
    let decoded = codec.decode(&item).expect("decode");
    assert_eq!(decoded.len(), 3);
    assert!(!decoded.contains_key("unknown"));
}

#[test]
fn missing_field_fails_decode() {
    let codec = person();
    let mut item = codec.encode(&person_values()).expect("encode");
    item.remove("age");
    let err = codec.decode(&item).expect_err("age missing");
    assert_eq!(err.message, "missing field age");
    assert_eq!(err.path(), "age");
}

#[test]
fn invalid_field_fails_decode_with_context() {
    let codec = person();
    let mut item = codec.encode(&person_values()).expect("encode");
    item.insert("age".to_string(), WireValue::S("thirty".to_string()));
    let err = codec.decode(&item).expect_err("S under number");
    assert_eq!(err.context[0].key, "age");
    assert_eq!(err.context[0].expected, "number");
    assert_eq!(err.message, "expected object with key N");
}

#[test]
fn record_reports_first_invalid_field_only() {
    // Fail-fast in declared order: with id and age both invalid, the error
    // is about id and says nothing of age.
    let codec = person();
    let mut item = codec.encode(&person_values()).expect("encode");
    item.insert("id".to_string(), WireValue::Bool(true));
    item.insert("age".to_string(), WireValue::Bool(true));
    let err: DecodeError = codec.decode(&item).expect_err("two bad fields");
    assert_eq!(err.context[0].key, "id");
    assert!(!err.to_string().contains("age"));
}

#[test]
fn duplicate_field_is_a_construction_error() {
    let result = record()
        .field("id", string())
        .field("id", number())
        .build();
    assert_eq!(
        result.err(),
        Some(SchemaError::DuplicateField("id".to_string()))
    );
}

#[test]
fn is_checks_fields_without_wire_roundtrip() {
    let codec = person();
    assert!(codec.is(&person_values()));

    let mut missing = person_values();
    missing.remove("name");
    assert!(!codec.is(&missing));

    let mut wrong_shape = person_values();
    wrong_shape.insert("age".to_string(), Value::from("not a number"));
    assert!(!codec.is(&wrong_shape));
}

#[test]
fn encode_missing_field_is_reported() {
    let mut values = person_values();
    values.remove("age");
    assert_eq!(
        person().encode(&values),
        Err(EncodeError::MissingField("age".to_string()))
    );
}

#[test]
fn encode_wrong_shape_is_reported() {
    let mut values = person_values();
    values.insert("age".to_string(), Value::from(false));
    assert_eq!(
        person().encode(&values),
        Err(EncodeError::WrongShape {
            field: "age".to_string(),
            expected: "number".to_string(),
        })
    );
}

#[test]
fn record_with_sets_nulls_and_nesting_roundtrips() {
    let codec = record()
        .field("tags", string_set())
        .field("deleted", null())
        .field("scores", list(number()))
        .field("labels", map(string()))
        .build()
        .expect("schema");

    let tags: BTreeSet<String> = ["red", "blue"].iter().map(|s| s.to_string()).collect();
    let mut values = RecordValue::new();
    values.insert("tags".to_string(), Value::StringSet(tags));
    values.insert("deleted".to_string(), Value::Null);
    values.insert(
        "scores".to_string(),
        Value::List(vec![Value::from(1), Value::from(2)]),
    );
    values.insert(
        "labels".to_string(),
        Value::Map([("en".to_string(), Value::from("hi"))].into_iter().collect()),
    );

    let item = codec.encode(&values).expect("encode");
    assert_eq!(item.get("tags"), Some(&WireValue::Ss(vec!["blue".to_string(), "red".to_string()])));
    assert_eq!(item.get("deleted"), Some(&WireValue::Null(true)));
    assert_eq!(codec.decode(&item), Ok(values));
}

#[test]
fn field_names_preserve_declaration_order() {
    let codec = person();
    let names: Vec<&str> = codec.field_names().collect();
    assert_eq!(names, vec!["id", "name", "age"]);
}
