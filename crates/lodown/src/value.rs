//! [`JsValue`] — the dynamic value every operator works over.
//!
//! Models the value space of a JavaScript-style host: the JSON values plus
//! `undefined` and callable functions.

use crate::equal::strict_equal;
use crate::error::Result;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered mapping from property name to value.
pub type Map = IndexMap<String, JsValue>;

type Callable = dyn Fn(&[JsValue]) -> JsValue + Send + Sync;

/// A shared callable value.
///
/// Cloning a `JsFunction` shares the underlying closure; two functions are
/// strictly equal only when they share it.
#[derive(Clone)]
pub struct JsFunction {
    inner: Arc<Callable>,
}

impl JsFunction {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[JsValue]) -> JsValue + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Invokes the function with positional arguments.
    pub fn call(&self, args: &[JsValue]) -> JsValue {
        (self.inner)(args)
    }

    pub fn ptr_eq(&self, other: &JsFunction) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

impl PartialEq for JsFunction {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Represents any value of the host: JSON-compatible data, `undefined`, or a
/// function.
#[derive(Debug, Clone, Default)]
pub enum JsValue {
    /// JavaScript `undefined`; also the absent-value marker.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Ordered sequence.
    Array(Vec<JsValue>),
    /// Mapping, enumerated in insertion order.
    Object(Map),
    Function(JsFunction),
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        strict_equal(self, other)
    }
}

/// Truthiness as the host defines it.
///
/// Falsy values are `undefined`, `null`, `false`, `0`, `-0`, `NaN` and the
/// empty string. Everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for JsValue {
    fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Bool(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            JsValue::Array(_) | JsValue::Object(_) | JsValue::Function(_) => true,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_truthy())
    }
}

/// Parses a canonical array index: decimal digits without a leading zero.
fn array_index(property: &str) -> Option<usize> {
    let bytes = property.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    property.parse().ok()
}

impl JsValue {
    /// Parses JSON text into a value.
    pub fn parse(text: &str) -> Result<JsValue> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(JsValue::from(json))
    }

    /// Renders the value as JSON text, with `JSON.stringify` conventions for
    /// values JSON cannot hold.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self.clone()).to_string()
    }

    /// Generic property lookup. Missing properties read as `Undefined`.
    ///
    /// ```
    /// use lodown::JsValue;
    /// use serde_json::json;
    ///
    /// let record = JsValue::from(json!({"a": "one", "list": [1, 2]}));
    /// assert_eq!(record.get("a"), JsValue::from("one"));
    /// assert_eq!(record.get("missing"), JsValue::Undefined);
    /// assert_eq!(record.get("list").get("length"), JsValue::from(2));
    /// ```
    pub fn get(&self, property: &str) -> JsValue {
        match self {
            JsValue::Object(map) => map.get(property).cloned().unwrap_or_default(),
            JsValue::Array(arr) => {
                if property == "length" {
                    return JsValue::from(arr.len());
                }
                array_index(property)
                    .and_then(|i| arr.get(i))
                    .cloned()
                    .unwrap_or_default()
            }
            JsValue::String(s) => {
                if property == "length" {
                    return JsValue::from(s.chars().count());
                }
                array_index(property)
                    .and_then(|i| s.chars().nth(i))
                    .map(|c| JsValue::String(c.to_string()))
                    .unwrap_or_default()
            }
            _ => JsValue::Undefined,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn as_array(&self) -> Option<&Vec<JsValue>> {
        match self {
            JsValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            JsValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => f.write_str("undefined"),
            JsValue::Function(_) => f.write_str("[Function]"),
            _ => f.write_str(&self.to_json_string()),
        }
    }
}

// ------------------------------------------------------------- Conversions

impl From<serde_json::Value> for JsValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsValue::Null,
            serde_json::Value::Bool(b) => JsValue::Bool(b),
            serde_json::Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => JsValue::String(s),
            serde_json::Value::Array(arr) => {
                JsValue::Array(arr.into_iter().map(JsValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsValue::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if !n.is_finite() {
        return serde_json::Value::Null;
    }
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return serde_json::json!(n as i64);
    }
    serde_json::json!(n)
}

impl From<JsValue> for serde_json::Value {
    fn from(v: JsValue) -> Self {
        match v {
            JsValue::Undefined | JsValue::Null | JsValue::Function(_) => serde_json::Value::Null,
            JsValue::Bool(b) => serde_json::Value::Bool(b),
            JsValue::Number(n) => number_to_json(n),
            JsValue::String(s) => serde_json::Value::String(s),
            JsValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            // Members JSON cannot hold are dropped, as JSON.stringify does.
            JsValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .filter(|(_, v)| !matches!(v, JsValue::Undefined | JsValue::Function(_)))
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Bool(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i64> for JsValue {
    fn from(n: i64) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(f64::from(n))
    }
}

impl From<usize> for JsValue {
    fn from(n: usize) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<Vec<JsValue>> for JsValue {
    fn from(arr: Vec<JsValue>) -> Self {
        JsValue::Array(arr)
    }
}

impl From<Map> for JsValue {
    fn from(map: Map) -> Self {
        JsValue::Object(map)
    }
}

impl From<JsFunction> for JsValue {
    fn from(f: JsFunction) -> Self {
        JsValue::Function(f)
    }
}

impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(JsValue::Undefined, Into::into)
    }
}
