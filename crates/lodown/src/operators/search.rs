//! Search and membership: `index_of`, `contains`, `unique`.

use crate::collection::Collection;
use crate::equal::strict_equal;
use crate::value::JsValue;

fn elements(array: &JsValue) -> &[JsValue] {
    match Collection::of(array) {
        Collection::Sequence(arr) => arr,
        _ => &[],
    }
}

/// Index of the first element strictly equal to `value`, or `-1`.
///
/// ```
/// use lodown::{index_of, JsValue};
/// use serde_json::json;
///
/// let letters = JsValue::from(json!(["a", "b", "c"]));
/// assert_eq!(index_of(&letters, &JsValue::from("c")), 2);
/// assert_eq!(index_of(&letters, &JsValue::from("d")), -1);
/// ```
pub fn index_of(array: &JsValue, value: &JsValue) -> i64 {
    elements(array)
        .iter()
        .position(|item| strict_equal(item, value))
        .map_or(-1, |i| i as i64)
}

/// Whether `value` occurs in `array` at least once.
pub fn contains(array: &JsValue, value: &JsValue) -> bool {
    index_of(array, value) != -1
}

/// Elements of `array` in first-occurrence order, duplicates removed.
///
/// An element is kept only when its first occurrence is its own position.
/// Values carry no hash that agrees with strict equality (`NaN`, `-0`), so
/// the scan stays quadratic.
pub fn unique(array: &JsValue) -> Vec<JsValue> {
    let arr = elements(array);
    arr.iter()
        .enumerate()
        .filter(|(i, item)| {
            arr.iter()
                .position(|other| strict_equal(other, item))
                .is_some_and(|first| first >= *i)
        })
        .map(|(_, item)| item.clone())
        .collect()
}
