//! Value introspection: `identity` and `type_of`.

use crate::collection::is_sequence;
use crate::value::JsValue;
use std::fmt;

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Classification produced by [`type_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsType {
    String,
    Array,
    Object,
    Undefined,
    Number,
    Boolean,
    Null,
    Function,
}

impl JsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsType::String => "string",
            JsType::Array => "array",
            JsType::Object => "object",
            JsType::Undefined => "undefined",
            JsType::Number => "number",
            JsType::Boolean => "boolean",
            JsType::Null => "null",
            JsType::Function => "function",
        }
    }
}

impl fmt::Display for JsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primitive tag of the host, where sequences and `null` both read as
/// `"object"`.
fn primitive_tag(value: &JsValue) -> JsType {
    match value {
        JsValue::Undefined => JsType::Undefined,
        JsValue::Bool(_) => JsType::Boolean,
        JsValue::Number(_) => JsType::Number,
        JsValue::String(_) => JsType::String,
        JsValue::Function(_) => JsType::Function,
        JsValue::Null | JsValue::Array(_) | JsValue::Object(_) => JsType::Object,
    }
}

/// Classifies a value.
///
/// ```
/// use lodown::{type_of, JsType, JsValue};
/// use serde_json::json;
///
/// assert_eq!(type_of(&JsValue::from(134)), JsType::Number);
/// assert_eq!(type_of(&JsValue::from(json!([1, 2]))).as_str(), "array");
/// assert_eq!(type_of(&JsValue::Null).to_string(), "null");
/// ```
pub fn type_of(value: &JsValue) -> JsType {
    if is_sequence(value) {
        JsType::Array
    } else if matches!(value, JsValue::Null) {
        JsType::Null
    } else {
        primitive_tag(value)
    }
}
