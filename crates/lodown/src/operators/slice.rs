//! Slice operators: `first` and `last`.

use crate::collection::Collection;
use crate::value::JsValue;

/// Optional element count accepted by [`first`] and [`last`].
///
/// A count that was passed but is not a finite number is kept apart from one
/// that was never passed, although both fall back to the same behaviour. No
/// numeric coercion is attempted, so `"2"` is [`Count::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Count {
    Absent,
    Invalid,
    Valid(f64),
}

impl Count {
    fn is_negative(&self) -> bool {
        matches!(self, Count::Valid(n) if *n < 0.0)
    }

    /// Number of elements to take, or `None` for the single-element fallback.
    /// Zero is falsy and counts as omitted.
    fn amount(&self) -> Option<usize> {
        match self {
            Count::Valid(n) if *n != 0.0 => Some(n.trunc() as usize),
            _ => None,
        }
    }
}

impl From<&JsValue> for Count {
    fn from(value: &JsValue) -> Self {
        match value {
            JsValue::Undefined => Count::Absent,
            JsValue::Number(n) if n.is_finite() => Count::Valid(*n),
            _ => Count::Invalid,
        }
    }
}

impl From<Option<&JsValue>> for Count {
    fn from(value: Option<&JsValue>) -> Self {
        value.map_or(Count::Absent, Count::from)
    }
}

impl From<f64> for Count {
    fn from(n: f64) -> Self {
        Count::from(&JsValue::Number(n))
    }
}

impl From<i64> for Count {
    fn from(n: i64) -> Self {
        Count::Valid(n as f64)
    }
}

impl From<i32> for Count {
    fn from(n: i32) -> Self {
        Count::Valid(f64::from(n))
    }
}

impl From<usize> for Count {
    fn from(n: usize) -> Self {
        Count::Valid(n as f64)
    }
}

fn sequence<'a>(array: &'a JsValue, count: Count, op: &str) -> Option<&'a [JsValue]> {
    match Collection::of(array) {
        Collection::Sequence(arr) if !count.is_negative() => Some(arr),
        Collection::Sequence(_) => {
            log::trace!("{}: negative count {:?}", op, count);
            None
        }
        _ => {
            log::trace!("{}: {} is not a sequence", op, crate::type_of(array));
            None
        }
    }
}

/// Returns the leading elements of `array`.
///
/// - not a sequence, or a negative count: `[]`
/// - count omitted, zero or not a number: `[array[0]]`
/// - otherwise the first `number` elements, truncated at the end
///
/// ```
/// use lodown::{first, Count, JsValue};
/// use serde_json::json;
///
/// let letters = JsValue::from(json!(["a", "b", "c"]));
/// assert_eq!(first(&letters, 2), JsValue::from(json!(["a", "b"])));
/// assert_eq!(first(&letters, Count::Absent), JsValue::from(json!(["a"])));
/// assert_eq!(first(&JsValue::from("x"), 1), JsValue::from(json!([])));
/// ```
pub fn first(array: &JsValue, number: impl Into<Count>) -> JsValue {
    let count = number.into();
    let Some(arr) = sequence(array, count, "first") else {
        return JsValue::Array(Vec::new());
    };
    match count.amount() {
        None => JsValue::Array(vec![arr.first().cloned().unwrap_or_default()]),
        Some(n) => JsValue::Array(arr[..n.min(arr.len())].to_vec()),
    }
}

/// Returns the trailing elements of `array`.
///
/// Unlike [`first`], the fallback for an omitted, zero or non-numeric count
/// is the bare last element rather than a one-element sequence. A count
/// between zero and one yields the whole array.
///
/// ```
/// use lodown::{last, Count, JsValue};
/// use serde_json::json;
///
/// let letters = JsValue::from(json!(["a", "b", "c"]));
/// assert_eq!(last(&letters, 2), JsValue::from(json!(["b", "c"])));
/// assert_eq!(last(&letters, Count::Absent), JsValue::from("c"));
/// assert_eq!(last(&letters, 10), letters);
/// ```
pub fn last(array: &JsValue, number: impl Into<Count>) -> JsValue {
    let count = number.into();
    let Some(arr) = sequence(array, count, "last") else {
        return JsValue::Array(Vec::new());
    };
    match count.amount() {
        None => arr.last().cloned().unwrap_or_default(),
        // A count below one takes no elements off the front.
        Some(n) if n == 0 || n > arr.len() => JsValue::Array(arr.to_vec()),
        Some(n) => JsValue::Array(arr[arr.len() - n..].to_vec()),
    }
}
