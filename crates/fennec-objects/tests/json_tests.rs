//! Integration tests for JSON serialization and shape-directed deserialization.

use std::collections::BTreeMap;

use fennec_common::warning::has_warned;
use fennec_objects::{JsonError, Rectangle, Shape, deserialize, serialize, serialize_pretty};
use quickcheck_macros::quickcheck;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Circle {
    radius: f64,
}

impl Circle {
    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl Shape for Circle {
    const NAME: &'static str = "Circle";
}

// ========== serialize ==========

#[test]
fn test_serialize_array() {
    assert_eq!(serialize(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_serialize_primitives() {
    assert_eq!(serialize(&true).unwrap(), "true");
    assert_eq!(serialize("text").unwrap(), "\"text\"");
    assert_eq!(serialize(&Value::Null).unwrap(), "null");
}

#[test]
fn test_serialize_rectangle_in_field_order() {
    let rect = Rectangle::new(10.0, 20.0);
    assert_eq!(serialize(&rect).unwrap(), r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_serialize_keeps_insertion_order() {
    let value = json!({ "zeta": 1, "alpha": 2, "mid": 3 });
    assert_eq!(
        serialize(&value).unwrap(),
        r#"{"zeta":1,"alpha":2,"mid":3}"#
    );
}

#[test]
fn test_serialize_pretty_is_indented() {
    let text = serialize_pretty(&json!({ "a": 1 })).unwrap();
    assert_eq!(text, "{\n  \"a\": 1\n}");
}

#[test]
fn test_serialize_rejects_non_string_keys() {
    let mut map = BTreeMap::new();
    let _ = map.insert((1, 2), "tuple key");
    assert!(matches!(serialize(&map), Err(JsonError::Serialize(_))));
}

// ========== deserialize ==========

#[test]
fn test_deserialize_rectangle_has_behavior() {
    let rect: Rectangle = deserialize(r#"{"width":10,"height":20}"#).unwrap();
    assert_eq!(rect, Rectangle::new(10.0, 20.0));
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_deserialize_custom_shape() {
    let circle: Circle = deserialize(r#"{"radius": 1.5}"#).unwrap();
    assert_eq!(circle.diameter(), 3.0);
}

#[test]
fn test_deserialize_invalid_text_is_parse_error() {
    let err = deserialize::<Rectangle>("{width: 10}").unwrap_err();
    assert!(matches!(err, JsonError::Parse { line: 1, .. }));
}

#[test]
fn test_deserialize_truncated_text_is_parse_error() {
    assert!(matches!(
        deserialize::<Value>(r#"{"a": [1, 2"#),
        Err(JsonError::Parse { .. })
    ));
}

#[test]
fn test_deserialize_wrong_fields_is_shape_error() {
    let err = deserialize::<Rectangle>(r#"{"width": 10}"#).unwrap_err();
    assert!(matches!(err, JsonError::Shape { shape: "Rectangle", .. }));
    assert_eq!(err.to_string(), "JSON does not fit shape `Rectangle`");
}

#[test]
fn test_deserialize_extra_field_is_shape_error() {
    let err = deserialize::<Rectangle>(r#"{"width":2,"height":3,"color":"red"}"#).unwrap_err();
    assert!(matches!(err, JsonError::Shape { shape: "Rectangle", .. }));
}

#[test]
fn test_deserialize_negative_rectangle_is_reported() {
    let rect: Rectangle = deserialize(r#"{"width":-4,"height":5}"#).unwrap();
    assert_eq!(rect.area(), -20.0);
    assert!(has_warned("Objects", "rectangle has a negative dimension (-4 x 5)"));
}

// ========== round-trip ==========

#[test]
fn test_round_trip_nested_value() {
    let value = json!({
        "name": "grid",
        "cells": [{ "x": 0, "y": 1 }, { "x": 2, "y": 3 }],
        "visible": false,
        "owner": null
    });
    let back: Value = deserialize(&serialize(&value).unwrap()).unwrap();
    assert_eq!(back, value);
}

#[quickcheck]
fn prop_round_trip_plain_object(entries: Vec<(String, i64)>, tags: Vec<String>) -> bool {
    let mut object = Map::new();
    for (key, number) in entries {
        let _ = object.insert(key, Value::from(number));
    }
    let _ = object.insert("tags".to_string(), Value::from(tags));
    let value = Value::Object(object);

    let back: Value = deserialize(&serialize(&value).unwrap()).unwrap();
    back == value
}

#[quickcheck]
fn prop_round_trip_rectangle(width: u16, height: u16) -> bool {
    let rect = Rectangle::new(f64::from(width), f64::from(height));
    let back: Rectangle = deserialize(&serialize(&rect).unwrap()).unwrap();
    back == rect && back.area() == rect.area()
}
