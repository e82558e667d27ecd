//! Aggregation and merge: `reduce` and `extend`.

use crate::collection::Collection;
use crate::value::{JsValue, Map};

/// Folds a sequence into a single value.
///
/// `action(accumulator, current, index)` returns the next accumulator.
/// Without a seed (`None` or `Some(Undefined)`) the fold starts from element
/// 0 and visits indices from 1; with a seed, even a falsy one, it visits every
/// index. An empty sequence with no seed yields `Undefined` and `action` is
/// never called. A non-sequence folds as an empty sequence.
///
/// ```
/// use lodown::{reduce, JsValue};
/// use serde_json::json;
///
/// let numbers = JsValue::from(json!([1, 2, 3]));
/// let sum = |acc: JsValue, n: &JsValue, _| {
///     JsValue::from(acc.as_f64().unwrap_or(0.0) + n.as_f64().unwrap_or(0.0))
/// };
/// assert_eq!(reduce(&numbers, sum, Some(JsValue::from(0))), JsValue::from(6));
/// assert_eq!(reduce(&numbers, sum, None), JsValue::from(6));
/// assert_eq!(reduce(&JsValue::from(json!([])), sum, None), JsValue::Undefined);
/// ```
pub fn reduce<F>(array: &JsValue, mut action: F, seed: Option<JsValue>) -> JsValue
where
    F: FnMut(JsValue, &JsValue, usize) -> JsValue,
{
    let arr: &[JsValue] = match Collection::of(array) {
        Collection::Sequence(arr) => arr,
        _ => {
            log::trace!("reduce: {} is not a sequence", crate::type_of(array));
            &[]
        }
    };
    let (mut acc, start) = match seed {
        Some(seed) if !seed.is_undefined() => (seed, 0),
        _ => match arr.first() {
            Some(head) => (head.clone(), 1),
            None => {
                log::trace!("reduce: empty sequence without seed");
                return JsValue::Undefined;
            }
        },
    };
    for (i, value) in arr.iter().enumerate().skip(start) {
        acc = action(acc, value, i);
    }
    acc
}

/// Copies every own property of each source onto `target`, in order.
///
/// This is the one mutating operator: `target` is modified in place and the
/// same reference is handed back. Later sources overwrite earlier ones on
/// key collision; values are copied as-is, nested objects are not merged.
///
/// ```
/// use lodown::{extend, JsValue, Map};
///
/// let mut data = Map::new();
/// data.insert("a".to_string(), JsValue::from("one"));
/// let mut patch = Map::new();
/// patch.insert("b".to_string(), JsValue::from("two"));
///
/// let merged = extend(&mut data, [&patch]);
/// assert_eq!(merged.get("b"), Some(&JsValue::from("two")));
/// assert_eq!(data.len(), 2);
/// ```
pub fn extend<'t, 's, I>(target: &'t mut Map, sources: I) -> &'t mut Map
where
    I: IntoIterator<Item = &'s Map>,
{
    let mut written = 0;
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
            written += 1;
        }
    }
    log::debug!("extend: wrote {} properties, target now has {}", written, target.len());
    target
}

/// [`extend`] for a dynamic target. Only objects can receive properties;
/// any other target is left as it was.
pub fn extend_value<'t, 's, I>(target: &'t mut JsValue, sources: I) -> &'t mut JsValue
where
    I: IntoIterator<Item = &'s Map>,
{
    if let Some(map) = target.as_object_mut() {
        extend(map, sources);
    } else {
        log::trace!("extend: {} target cannot hold properties", crate::type_of(target));
    }
    target
}
