//! JSON value tree.
//!
//! [`JsonValue`] is the closed set of shapes a parsed document can take.
//! Values form a tree built bottom-up from terminals: arrays and objects
//! exclusively own their children, so no sharing or cycles are possible.

use indexmap::IndexMap;

/// A parsed JSON value.
///
/// Equality is deep structural equality over the variants; `Int(1)` and
/// `Float(1.0)` are not equal even though the numbers compare equal, because
/// the number kind is part of the value.
///
/// Object fields keep their insertion order. Duplicate keys in the input
/// collapse to a single entry holding the last value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null literal.
    #[default]
    Null,
    /// JSON boolean (true/false).
    Bool(bool),
    /// JSON number written without a fractional part or exponent.
    Int(i64),
    /// JSON number written with a fractional part or exponent.
    Float(f64),
    /// JSON string, with escape sequences resolved.
    String(String),
    /// JSON array of values.
    Array(Vec<JsonValue>),
    /// JSON object with insertion-ordered fields.
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is an integer number.
    pub fn is_int(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    /// Returns true if this is a floating-point number.
    pub fn is_float(&self) -> bool {
        matches!(self, JsonValue::Float(_))
    }

    /// Returns true if this is a number of either kind.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Int(_) | JsonValue::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value if this is an Int, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float value if this is a Float, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the elements if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the fields if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Int(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}
