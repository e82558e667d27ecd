use thiserror::Error;

/// Errors raised while bringing outside data into [`JsValue`](crate::JsValue).
///
/// The collection operators themselves never fail; malformed arguments fall
/// back to empty or default results instead.
#[derive(Error, Debug)]
pub enum LodownError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LodownError>;
