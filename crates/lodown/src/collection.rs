//! Sequence/mapping dispatch and the `each` traversal primitive.
//!
//! Every operator that walks a collection goes through [`each`], which is the
//! only place the two container shapes are told apart.

use crate::value::{JsValue, Map};
use std::fmt;

/// Position of an element within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// 0-based index into a sequence.
    Index(usize),
    /// Own property name of a mapping.
    Name(&'a str),
}

impl Key<'_> {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<Key<'_>> for JsValue {
    fn from(key: Key<'_>) -> Self {
        match key {
            Key::Index(i) => JsValue::from(i),
            Key::Name(name) => JsValue::from(name),
        }
    }
}

/// The shape of a value, as seen by collection operators.
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    Sequence(&'a [JsValue]),
    Mapping(&'a Map),
    /// A string enumerates one property per character, named `"0"`, `"1"`, ...
    Text(&'a str),
    /// Anything else; it has no enumerable elements.
    Opaque,
}

impl<'a> Collection<'a> {
    /// The single sequence-vs-mapping discriminator.
    pub fn of(value: &'a JsValue) -> Self {
        match value {
            JsValue::Array(arr) => Collection::Sequence(arr),
            JsValue::Object(map) => Collection::Mapping(map),
            JsValue::String(s) => Collection::Text(s),
            _ => Collection::Opaque,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(arr) => arr.len(),
            Collection::Mapping(map) => map.len(),
            Collection::Text(s) => s.chars().count(),
            Collection::Opaque => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns `true` if `value` is an ordered sequence.
pub fn is_sequence(value: &JsValue) -> bool {
    matches!(Collection::of(value), Collection::Sequence(_))
}

/// Calls `action(value, key, collection)` once per element.
///
/// Sequences are visited by ascending index, mappings by their enumeration
/// order. Strings are not sequences but still enumerate: each character is
/// visited as a one-character string under its decimal position name. The
/// third argument is `collection` itself. Any other value is not visited at
/// all.
///
/// ```
/// use lodown::{each, JsValue};
/// use serde_json::json;
///
/// let record = JsValue::from(json!({"a": 1, "b": 2}));
/// let mut seen = Vec::new();
/// each(&record, |value, key, _| seen.push(format!("{}={}", key, value)));
/// assert_eq!(seen, vec!["a=1", "b=2"]);
/// ```
pub fn each<F>(collection: &JsValue, mut action: F)
where
    F: FnMut(&JsValue, Key<'_>, &JsValue),
{
    match Collection::of(collection) {
        Collection::Sequence(arr) => {
            for (i, value) in arr.iter().enumerate() {
                action(value, Key::Index(i), collection);
            }
        }
        Collection::Mapping(map) => {
            for (key, value) in map {
                action(value, Key::Name(key.as_str()), collection);
            }
        }
        Collection::Text(s) => {
            for (i, ch) in s.chars().enumerate() {
                let name = i.to_string();
                action(&JsValue::String(ch.to_string()), Key::Name(&name), collection);
            }
        }
        Collection::Opaque => {
            log::trace!("each: {} value has no elements to visit", crate::type_of(collection));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_sequence_order_and_identity() {
        let arr = JsValue::from(json!(["a", "b", "c"]));
        let mut calls = Vec::new();
        each(&arr, |value, key, col| {
            assert!(std::ptr::eq(col, &arr));
            calls.push((key.as_index().unwrap(), value.clone()));
        });
        assert_eq!(
            calls,
            vec![
                (0, JsValue::from("a")),
                (1, JsValue::from("b")),
                (2, JsValue::from("c")),
            ]
        );
    }

    #[test]
    fn test_each_mapping_keys() {
        let obj = JsValue::from(json!({"b": 1, "a": 2}));
        let mut keys = Vec::new();
        each(&obj, |_, key, _| keys.push(key.as_name().unwrap().to_string()));
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_each_string_characters() {
        let text = JsValue::from("añb");
        let mut calls = Vec::new();
        each(&text, |value, key, col| {
            assert!(std::ptr::eq(col, &text));
            calls.push(format!("{}={}", key.as_name().unwrap(), value.as_str().unwrap()));
        });
        assert_eq!(calls, vec!["0=a", "1=ñ", "2=b"]);

        let mut count = 0;
        each(&JsValue::from(""), |_, _, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_each_opaque_values() {
        for value in [JsValue::from(3), JsValue::from(true), JsValue::Null, JsValue::Undefined] {
            let mut count = 0;
            each(&value, |_, _, _| count += 1);
            assert_eq!(count, 0, "value: {}", value);
        }
    }

    #[test]
    fn test_is_sequence() {
        assert!(is_sequence(&JsValue::from(json!([]))));
        assert!(!is_sequence(&JsValue::from(json!({}))));
        assert!(!is_sequence(&JsValue::from("[]")));
    }

    #[test]
    fn test_collection_len() {
        let arr = JsValue::from(json!([1, 2, 3]));
        let obj = JsValue::from(json!({"a": 1}));
        let text = JsValue::from("añb");
        assert_eq!(Collection::of(&arr).len(), 3);
        assert_eq!(Collection::of(&obj).len(), 1);
        assert_eq!(Collection::of(&text).len(), 3);
        assert!(Collection::of(&JsValue::from(json!({}))).is_empty());
        assert!(Collection::of(&JsValue::Null).is_empty());
        assert!(!Collection::of(&arr).is_empty());
    }

    #[test]
    fn test_key_conversion() {
        assert_eq!(JsValue::from(Key::Index(3)), JsValue::from(3));
        assert_eq!(JsValue::from(Key::Name("x")), JsValue::from("x"));
        assert_eq!(Key::Index(7).to_string(), "7");
    }
}
