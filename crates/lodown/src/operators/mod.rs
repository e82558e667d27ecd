//! The operator set, grouped by family.

pub mod aggregate;
pub mod introspect;
pub mod quantify;
pub mod search;
pub mod slice;
pub mod transform;

pub use aggregate::{extend, extend_value, reduce};
pub use introspect::{identity, type_of, JsType};
pub use quantify::{every, some, Predicate};
pub use search::{contains, index_of, unique};
pub use slice::{first, last, Count};
pub use transform::{filter, map, partition, pluck, reject};
