use serde_json::json;

use outcome_rail::{Error, Fault, MetadataValue, Outcome};

#[derive(Debug)]
struct Outer(Inner);

#[derive(Debug)]
struct Inner;

impl std::fmt::Display for Outer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid program!")
    }
}

impl std::fmt::Display for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Operation is not valid")
    }
}

impl std::error::Error for Outer {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl std::error::Error for Inner {}

#[test]
fn valueless_success_has_no_value() {
    let json = serde_json::to_string(&Outcome::OK).unwrap();
    assert_eq!(json, r#"{"IsSuccess":true}"#);
}

/// Unit-struct acknowledgement payload.
#[derive(Debug)]
struct Ack;

impl serde::Serialize for Ack {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit_struct("Ack")
    }
}

#[test]
fn unit_struct_success_keeps_value() {
    let json = serde_json::to_string(&Outcome::ok(Ack)).unwrap();
    assert_eq!(json, r#"{"IsSuccess":true,"Value":null}"#);

    let json = serde_json::to_string(&Outcome::ok([0u8; 0])).unwrap();
    assert_eq!(json, r#"{"IsSuccess":true,"Value":[]}"#);
}

#[test]
fn success_with_value() {
    let json = serde_json::to_string(&Outcome::ok(42)).unwrap();
    assert_eq!(json, r#"{"IsSuccess":true,"Value":42}"#);

    let value = serde_json::to_value(Outcome::ok(vec!["a", "b"])).unwrap();
    assert_eq!(value, json!({"IsSuccess": true, "Value": ["a", "b"]}));
}

#[test]
fn failure_without_metadata_omits_metadata() {
    let outcome: Outcome<i32> = Outcome::fail("Sample error message");
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"IsSuccess":false,"Errors":[{"Message":"Sample error message"}]}"#);
}

#[test]
fn failure_with_metadata_in_insertion_order() {
    let outcome: Outcome = Outcome::fail(
        Error::new("Sample error message").with("OtherKey", 1i32).with("Key", 0i32),
    );

    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"IsSuccess":false,"Errors":[{"Message":"Sample error message","Metadata":{"#,
            r#""OtherKey":{"$type":"i64","Value":1},"Key":{"$type":"i64","Value":0}}}]}"#
        )
    );
}

#[test]
fn failure_with_multiple_errors() {
    let outcome: Outcome = Outcome::fail_many(["Error 1", "Error 2"]);
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(
        value,
        json!({"IsSuccess": false, "Errors": [{"Message": "Error 1"}, {"Message": "Error 2"}]})
    );
}

#[test]
fn metadata_value_types() {
    let error = Error::new("typed")
        .with("flag", true)
        .with("count", 2u64)
        .with("ratio", 0.25f64)
        .with("name", "x")
        .with("blob", MetadataValue::opaque(Inner));

    let value = serde_json::to_value(&error).unwrap();
    let metadata = &value["Metadata"];

    assert_eq!(metadata["flag"], json!({"$type": "bool", "Value": true}));
    assert_eq!(metadata["count"], json!({"$type": "u64", "Value": 2}));
    assert_eq!(metadata["ratio"], json!({"$type": "f64", "Value": 0.25}));
    assert_eq!(metadata["name"], json!({"$type": "String", "Value": "x"}));
    assert_eq!(metadata["blob"]["Value"], serde_json::Value::Null);
    assert!(metadata["blob"]["$type"].as_str().unwrap().ends_with("Inner"));
}

#[test]
fn fault_serializes_with_inner_exception() {
    let error = Error::from(Fault::from_error(Outer(Inner)));
    let value = serde_json::to_value(&error).unwrap();

    let exception = &value["Metadata"]["Exception"];
    assert_eq!(exception["$type"], "Outer");
    assert_eq!(exception["Message"], "Invalid program!");
    assert!(exception["StackTrace"].is_null() || exception["StackTrace"].is_string());

    let inner = &exception["InnerException"];
    assert_eq!(inner["$type"], "Error");
    assert_eq!(inner["Message"], "Operation is not valid");
    assert!(inner.get("InnerException").is_none());
    assert_eq!(value["Message"], "Outer: Invalid program!");
}
