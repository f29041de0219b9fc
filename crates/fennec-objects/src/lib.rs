//! Value objects and JSON conversion for Fennec.
//!
//! # Scope
//!
//! This crate implements:
//! - **Rectangle** - a `width` x `height` value object with an `area()` accessor
//! - **JSON conversion** - [`serialize`] any `serde` value to text, and
//!   [`deserialize`] text back into a chosen [`Shape`], so the parsed fields
//!   pick up that shape's behavior

/// Shape-directed JSON serialization and deserialization.
pub mod json;
/// The rectangle value object.
pub mod rectangle;

pub use json::{JsonError, Shape, deserialize, serialize, serialize_pretty};
pub use rectangle::Rectangle;
