use crate::value::JsValue;

/// Equality without type coercion.
///
/// Values of different kinds are never equal and numbers compare by IEEE
/// value, so `NaN` differs from itself while `0` equals `-0`. Arrays and
/// objects are owned values here rather than shared references, so they are
/// compared member by member. Functions are equal only to themselves.
///
/// ```
/// use lodown::{strict_equal, JsValue};
///
/// assert!(strict_equal(&JsValue::from(1), &JsValue::from(1.0)));
/// assert!(!strict_equal(&JsValue::from(1), &JsValue::from("1")));
/// assert!(!strict_equal(&JsValue::Null, &JsValue::Undefined));
/// ```
pub fn strict_equal(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Undefined, JsValue::Undefined) => true,
        (JsValue::Null, JsValue::Null) => true,
        (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
        (JsValue::Number(a), JsValue::Number(b)) => a == b,
        (JsValue::String(a), JsValue::String(b)) => a == b,
        (JsValue::Array(arr_a), JsValue::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(a, b)| strict_equal(a, b))
        }
        (JsValue::Object(obj_a), JsValue::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => strict_equal(val_a, val_b),
                None => false,
            })
        }
        (JsValue::Function(a), JsValue::Function(b)) => a.ptr_eq(b),
        _ => false,
    }
}
