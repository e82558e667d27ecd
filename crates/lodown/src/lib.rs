//! lodown — functional collection helpers over dynamic values.
//!
//! # Overview
//!
//! A flat set of eager operators over [`JsValue`], a JavaScript-style dynamic
//! value. Operators accept either shape of collection: an ordered sequence
//! ([`JsValue::Array`]) or a mapping ([`JsValue::Object`]); a string
//! enumerates its characters like a mapping keyed `"0"`, `"1"`, and so on.
//! [`each`] is the only place the shapes are told apart; everything else
//! traverses through it.
//!
//! Malformed arguments never fail. A non-sequence where a sequence is
//! expected, a negative count, or a count that is not a number all fall back
//! to an empty or default result.
//!
//! # Example
//!
//! ```
//! use lodown::{filter, first, map, reduce, JsValue};
//! use serde_json::json;
//!
//! let scores = JsValue::from(json!([3, 8, 5, 10]));
//! let high: Vec<JsValue> = filter(&scores, |s, _, _| s.as_f64().is_some_and(|s| s > 4.0));
//! assert_eq!(JsValue::from(high), JsValue::from(json!([8, 5, 10])));
//!
//! let labels = map(&scores, |s, i, _| format!("#{}={}", i, s));
//! assert_eq!(labels[1], "#1=8");
//!
//! let total = reduce(&scores, |acc, s, _| {
//!     JsValue::from(acc.as_f64().unwrap_or(0.0) + s.as_f64().unwrap_or(0.0))
//! }, None);
//! assert_eq!(total, JsValue::from(26));
//!
//! assert_eq!(first(&scores, 2), JsValue::from(json!([3, 8])));
//! ```

pub mod collection;
pub mod equal;
pub mod error;
pub mod operators;
pub mod value;

// Re-export the operator namespace flat
pub use collection::{each, is_sequence, Collection, Key};
pub use equal::strict_equal;
pub use error::{LodownError, Result};
pub use operators::{
    contains, every, extend, extend_value, filter, first, identity, index_of, last, map, partition,
    pluck, reduce, reject, some, type_of, unique, Count, JsType, Predicate,
};
pub use value::{JsFunction, JsValue, Map, Truthy};
