//! Axis-aligned rectangles.

use serde::Deserialize;

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Used both as the universe of a diagram and as the sampling domain of
/// every shader drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check whether a point lies inside the rectangle, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

impl Default for Bounds {
    /// The universe used by the stock demo scenes.
    fn default() -> Self {
        Self::new(20.0, 20.0, 350.0, 325.0)
    }
}
