//! Differential conformance against serde_json.
//!
//! serde_json acts as the reference implementation: both parsers must agree
//! on which documents are valid, and accepted documents must produce the
//! same structure. The corpus stays within `i64` range, where the two number
//! models line up exactly (serde_json also keeps integers and floats
//! distinct).

use jsontree::{parse, JsonValue};

/// Convert a parsed tree into the reference representation.
fn to_reference(value: &JsonValue) -> serde_json::Value {
    match value {
        JsonValue::Null => serde_json::Value::Null,
        JsonValue::Bool(b) => serde_json::Value::Bool(*b),
        JsonValue::Int(n) => serde_json::Value::Number((*n).into()),
        JsonValue::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap(),
        JsonValue::String(s) => serde_json::Value::String(s.clone()),
        JsonValue::Array(elements) => {
            serde_json::Value::Array(elements.iter().map(to_reference).collect())
        }
        JsonValue::Object(fields) => serde_json::Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), to_reference(value)))
                .collect(),
        ),
    }
}

const VALID: &[&str] = &[
    "null",
    "true",
    "false",
    "0",
    "42",
    "-123",
    "9223372036854775807",
    "3.5",
    "-0.75",
    "1e3",
    "2E-2",
    "6.02e23",
    r#""""#,
    r#""hello""#,
    r#""a\nb\tc\"d\\e\/f""#,
    "\"\\u0041\\u00e9\"",
    "\"\\uD83D\\uDE00\"",
    "\"héllo wörld\"",
    "{}",
    "[]",
    "[1, 2, 3]",
    r#"["string", 1, 2.5, true, false, null]"#,
    r#"{"foo":"bar"}"#,
    r#"{"a": 1, "b": [2, {"c": 3}], "d": {"e": null}}"#,
    r#"[{"foo":"bar"},[1,2,3]]"#,
    r#"{"a":1,"a":2}"#,
    "  {\n\t\"spaced\" :\r\n [ 1 ,\t2 ]\n}  ",
];

const INVALID: &[&str] = &[
    "",
    "   ",
    "{",
    "[",
    "}",
    "{\"a\":}",
    "[1,]",
    "{\"a\": 1,}",
    "{\"a\" 1}",
    "[1 2]",
    "{\"a\":1 \"b\":2}",
    "{1: 2}",
    "tru",
    "True",
    "nulll",
    "01",
    "1.",
    ".5",
    "+1",
    "--1",
    "1e",
    "\"\\x\"",
    "\"unterminated",
    "\"a\tb\"",
    "{} extra",
    "[1;2]",
    "{'a': 1}",
    "NaN",
    "Infinity",
];

#[test]
fn valid_documents_agree_with_reference() {
    for input in VALID {
        let mine = parse(input)
            .unwrap_or_else(|err| panic!("rejected valid document {input:?}: {err}"));
        let reference: serde_json::Value = serde_json::from_str(input)
            .unwrap_or_else(|err| panic!("reference rejected {input:?}: {err}"));
        assert_eq!(
            to_reference(&mine),
            reference,
            "structure mismatch for {input:?}"
        );
    }
}

#[test]
fn invalid_documents_rejected_by_both() {
    for input in INVALID {
        assert!(
            parse(input).is_err(),
            "accepted invalid document {input:?}"
        );
        assert!(
            serde_json::from_str::<serde_json::Value>(input).is_err(),
            "reference accepted {input:?}, corpus entry is wrong"
        );
    }
}

#[test]
fn number_kinds_match_reference() {
    let int = parse("7").unwrap();
    assert!(int.is_int());
    let reference: serde_json::Value = serde_json::from_str("7").unwrap();
    assert!(reference.is_i64());

    let float = parse("7.0").unwrap();
    assert!(float.is_float());
    let reference: serde_json::Value = serde_json::from_str("7.0").unwrap();
    assert!(reference.is_f64());
}
