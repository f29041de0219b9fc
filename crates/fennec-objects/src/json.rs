//! JSON conversion between plain data and typed shapes.
//!
//! [`serialize`] writes any `serde` value as JSON text. [`deserialize`] works
//! in two steps: the text is first parsed into a plain [`Value`], then the
//! plain data is rebuilt as the requested [`Shape`]. Keeping the steps apart
//! means malformed text and well-formed text with the wrong fields are
//! reported as different errors.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while converting to or from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input text is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}")]
    Parse {
        /// 1-based line of the syntax error.
        line: usize,
        /// 1-based column of the syntax error.
        column: usize,
        /// The underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The input is valid JSON but its fields do not fit the target shape.
    #[error("JSON does not fit shape `{shape}`")]
    Shape {
        /// [`Shape::NAME`] of the requested shape.
        shape: &'static str,
        /// The underlying conversion error.
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be encoded (e.g. a map with non-string keys).
    #[error("value cannot be serialized as JSON")]
    Serialize(#[source] serde_json::Error),
}

/// A type that can be rebuilt from plain JSON data.
///
/// The plain data supplies the fields; the implementing type supplies the
/// behavior. The provided [`Shape::from_plain`] goes through `serde`, so
/// deriving `Deserialize` and naming the shape is usually all that is needed:
///
/// ```
/// use fennec_objects::{Rectangle, deserialize};
///
/// let rect: Rectangle = deserialize(r#"{"width": 10, "height": 20}"#).unwrap();
/// assert_eq!(rect.area(), 200.0);
/// ```
pub trait Shape: DeserializeOwned {
    /// Human-readable name used in error messages.
    const NAME: &'static str;

    /// Build a value of this shape from already-parsed plain data.
    ///
    /// # Errors
    ///
    /// Returns an error if the plain data is missing fields or has fields of
    /// the wrong type for this shape.
    fn from_plain(plain: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(plain)
    }
}

/// The plain object itself: accepts any JSON value unchanged.
impl Shape for Value {
    const NAME: &'static str = "object";

    fn from_plain(plain: Value) -> Result<Self, serde_json::Error> {
        Ok(plain)
    }
}

/// Serialize `value` to compact JSON text.
///
/// Object keys are written in the value's own order: struct field order, or
/// insertion order for [`serde_json::Map`].
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as JSON.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize `value` to indented JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as JSON.
pub fn serialize_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Parse `text` as JSON and rebuild it as shape `S`.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] if `text` is not valid JSON, or
/// [`JsonError::Shape`] if it is valid JSON that does not fit `S`.
pub fn deserialize<S: Shape>(text: &str) -> Result<S, JsonError> {
    // STEP 1: Text to plain data.
    let plain: Value = serde_json::from_str(text).map_err(|source| JsonError::Parse {
        line: source.line(),
        column: source.column(),
        source,
    })?;

    // STEP 2: Plain data to shape.
    S::from_plain(plain).map_err(|source| JsonError::Shape {
        shape: S::NAME,
        source,
    })
}
