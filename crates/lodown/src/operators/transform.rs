//! Transform and filter family: `filter`, `reject`, `partition`, `map`, `pluck`.
//!
//! All of them traverse through [`each`], so a mapping contributes its values
//! in enumeration order and the result is always a sequence.

use crate::collection::{each, Collection, Key};
use crate::value::{JsValue, Truthy};

/// Elements for which `action(value, key, collection)` is truthy, in order.
///
/// ```
/// use lodown::{filter, JsValue};
/// use serde_json::json;
///
/// let numbers = JsValue::from(json!([1, 2, 3, 4, 5]));
/// let even = filter(&numbers, |n, _, _| n.as_f64().is_some_and(|n| n % 2.0 == 0.0));
/// assert_eq!(JsValue::from(even), JsValue::from(json!([2, 4])));
/// ```
pub fn filter<F, R>(collection: &JsValue, mut action: F) -> Vec<JsValue>
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> R,
    R: Truthy,
{
    let mut kept = Vec::new();
    each(collection, |value, key, col| {
        if action(value, key, col).is_truthy() {
            kept.push(value.clone());
        }
    });
    kept
}

/// Complement of [`filter`]: elements for which `action` is falsy.
pub fn reject<F, R>(collection: &JsValue, mut action: F) -> Vec<JsValue>
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> R,
    R: Truthy,
{
    filter(collection, |value, key, col| !action(value, key, col).is_truthy())
}

/// Splits a collection into `(matching, non_matching)`.
///
/// Same result as `(filter(c, p), reject(c, p))` for a pure predicate, but
/// `action` runs once per element.
pub fn partition<F, R>(collection: &JsValue, mut action: F) -> (Vec<JsValue>, Vec<JsValue>)
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> R,
    R: Truthy,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    each(collection, |value, key, col| {
        if action(value, key, col).is_truthy() {
            matching.push(value.clone());
        } else {
            rest.push(value.clone());
        }
    });
    (matching, rest)
}

/// Applies `action` to every element and collects the results.
///
/// The output is a sequence even when `collection` is a mapping.
///
/// ```
/// use lodown::{map, JsValue};
/// use serde_json::json;
///
/// let record = JsValue::from(json!({"a": 1, "b": 2}));
/// let keys: Vec<String> = map(&record, |_, key, _| key.to_string());
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub fn map<T, F>(collection: &JsValue, mut action: F) -> Vec<T>
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> T,
{
    let mut out = Vec::with_capacity(Collection::of(collection).len());
    each(collection, |value, key, col| out.push(action(value, key, col)));
    out
}

/// Reads `property` from every record; missing properties read as
/// `Undefined`.
pub fn pluck(collection: &JsValue, property: &str) -> Vec<JsValue> {
    map(collection, |record, _, _| record.get(property))
}
