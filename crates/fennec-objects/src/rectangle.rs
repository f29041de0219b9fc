//! A rectangle defined by its width and height.

use fennec_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::Shape;

/// A `width` x `height` rectangle.
///
/// Dimensions are expected to be non-negative. Negative values are kept
/// as-is and reported once through the warning system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        if width < 0.0 || height < 0.0 {
            warn_once(
                "Objects",
                &format!("rectangle has a negative dimension ({width} x {height})"),
            );
        }
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    const NAME: &'static str = "Rectangle";

    /// Goes through [`Rectangle::new`] so JSON input gets the same
    /// negative-dimension check as direct construction.
    fn from_plain(plain: Value) -> Result<Self, serde_json::Error> {
        let Self { width, height } = serde_json::from_value(plain)?;
        Ok(Self::new(width, height))
    }
}
