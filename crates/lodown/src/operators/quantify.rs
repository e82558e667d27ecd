//! Quantifiers: `every` and `some`.

use crate::collection::{each, Key};
use crate::value::{JsValue, Truthy};

/// Boolean test for [`every`] and [`some`] as a trait object.
///
/// Any action whose result is [`Truthy`] is accepted; this alias names the
/// type to write when the action is omitted, as in `every(&c, None::<Predicate>)`.
pub type Predicate<'p> = &'p mut dyn FnMut(&JsValue, Key<'_>, &JsValue) -> bool;

/// Runs the action, or falls back to the element's own truthiness.
fn holds<F, R>(action: &mut Option<F>, value: &JsValue, key: Key<'_>, col: &JsValue) -> bool
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> R,
    R: Truthy,
{
    match action {
        Some(test) => test(value, key, col).is_truthy(),
        None => value.is_truthy(),
    }
}

/// `true` when every element passes `action` (or is truthy, without one).
///
/// Vacuously `true` for an empty collection. Stops consulting `action` after
/// the first failure.
///
/// ```
/// use lodown::{every, JsValue, Key, Predicate};
/// use serde_json::json;
///
/// let even = |n: &JsValue| n.as_f64().is_some_and(|n| n % 2.0 == 0.0);
/// assert!(every(&JsValue::from(json!([2, 4, 6])), Some(|n: &JsValue, _: Key<'_>, _: &JsValue| even(n))));
/// assert!(!every(&JsValue::from(json!([1, 2, 3])), Some(|n: &JsValue, _: Key<'_>, _: &JsValue| even(n))));
/// assert!(every(&JsValue::from(json!([])), None::<Predicate>));
/// ```
pub fn every<F, R>(collection: &JsValue, mut action: Option<F>) -> bool
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> R,
    R: Truthy,
{
    let mut all = true;
    each(collection, |value, key, col| {
        if all && !holds(&mut action, value, key, col) {
            all = false;
        }
    });
    all
}

/// `true` when at least one element passes `action` (or is truthy, without
/// one).
///
/// `false` for an empty collection. Stops consulting `action` after the first
/// success.
pub fn some<F, R>(collection: &JsValue, mut action: Option<F>) -> bool
where
    F: FnMut(&JsValue, Key<'_>, &JsValue) -> R,
    R: Truthy,
{
    let mut any = false;
    each(collection, |value, key, col| {
        if !any && holds(&mut action, value, key, col) {
            any = true;
        }
    });
    any
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsFunction;
    use serde_json::json;

    fn v(json: serde_json::Value) -> JsValue {
        JsValue::from(json)
    }

    fn is_even(value: &JsValue, _: Key<'_>, _: &JsValue) -> bool {
        value.as_f64().is_some_and(|n| n % 2.0 == 0.0)
    }

    #[test]
    fn test_every() {
        assert!(every(&v(json!([2, 4, 6])), Some(is_even)));
        assert!(!every(&v(json!([1, 2, 3])), Some(is_even)));
        assert!(every(&v(json!([])), Some(|_: &JsValue, _: Key<'_>, _: &JsValue| false)));
    }

    #[test]
    fn test_every_without_action() {
        assert!(every(&v(json!([1, "a", true, {}])), None::<Predicate>));
        assert!(!every(&v(json!([1, 0, 2])), None::<Predicate>));
        assert!(!every(&v(json!({"a": 1, "b": null})), None::<Predicate>));
        assert!(every(&v(json!({})), None::<Predicate>));
    }

    #[test]
    fn test_every_stops_after_failure() {
        let mut seen = Vec::new();
        let result = every(
            &v(json!([2, 3, 4, 5])),
            Some(|n: &JsValue, key: Key<'_>, col: &JsValue| {
                seen.push(n.clone());
                is_even(n, key, col)
            }),
        );
        assert!(!result);
        assert_eq!(seen, vec![v(json!(2)), v(json!(3))]);
    }

    #[test]
    fn test_every_mapping_keys() {
        let obj = v(json!({"a": 1, "b": 2}));
        assert!(every(&obj, Some(|_: &JsValue, key: Key<'_>, _: &JsValue| key.as_name().is_some())));
    }

    #[test]
    fn test_some() {
        assert!(!some(&v(json!([1, 3, 5])), Some(is_even)));
        assert!(some(&v(json!([1, 2, 3])), Some(is_even)));
        assert!(!some(&v(json!([])), Some(|_: &JsValue, _: Key<'_>, _: &JsValue| true)));
    }

    #[test]
    fn test_some_without_action() {
        assert!(some(&v(json!([0, "", null, 7])), None::<Predicate>));
        assert!(!some(&v(json!([0, "", null, false])), None::<Predicate>));
        assert!(!some(&v(json!({})), None::<Predicate>));
        assert!(some(&JsValue::from("text"), None::<Predicate>));
        assert!(!some(&JsValue::from(""), None::<Predicate>));
    }

    #[test]
    fn test_some_stops_after_success() {
        let mut calls = 0;
        let found = some(
            &v(json!([1, 2, 3, 4])),
            Some(|n: &JsValue, key: Key<'_>, col: &JsValue| {
                calls += 1;
                is_even(n, key, col)
            }),
        );
        assert!(found);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_truthy_action_results() {
        let truthy = JsFunction::new(|args| args.first().cloned().unwrap_or_default());
        fn args(value: &JsValue, key: Key<'_>, col: &JsValue) -> Vec<JsValue> {
            vec![value.clone(), JsValue::from(key), col.clone()]
        }
        assert!(some(&v(json!([0, "", 3])), Some(|n: &JsValue, k: Key<'_>, c: &JsValue| truthy.call(&args(n, k, c)))));
        assert!(!every(&v(json!([1, null])), Some(|n: &JsValue, k: Key<'_>, c: &JsValue| truthy.call(&args(n, k, c)))));
        assert!(every(&v(json!(["x", [], {}])), Some(|n: &JsValue, k: Key<'_>, c: &JsValue| truthy.call(&args(n, k, c)))));
    }

    #[test]
    fn test_string_characters() {
        let word = v(json!("abc"));
        assert!(every(&word, Some(|c: &JsValue, _: Key<'_>, _: &JsValue| c.as_str().is_some())));
        assert!(some(&word, Some(|_: &JsValue, key: Key<'_>, _: &JsValue| key.as_name() == Some("2"))));
    }
}
