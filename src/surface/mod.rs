//! Drawing surfaces.
//!
//! The shading engine never touches pixels directly. It issues an ordered
//! stream of calls against a [`Surface`]; the stream (or the raster it
//! produces) is the only output of a diagram.

mod recorder;

pub use recorder::{DrawCommand, Recorder};

use crate::types::Colour;

/// The drawing capabilities a diagram needs.
///
/// Calls must be applied in the order they are issued: later points at the
/// same coordinate cover earlier ones.
pub trait Surface {
    /// Set the outline colour used by `rect`, `ellipse` and `point`.
    fn set_stroke(&mut self, colour: Colour);

    /// Set the interior colour of `rect` and `ellipse`.
    fn set_fill(&mut self, colour: Colour);

    /// Set the outline width, which is also the diameter of a point.
    fn set_stroke_weight(&mut self, weight: f64);

    /// Draw an axis-aligned rectangle from its top-left corner and size.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Draw an ellipse from its centre and diameters.
    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64);

    /// Draw a single point.
    fn point(&mut self, x: f64, y: f64);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_stroke(&mut self, colour: Colour) {
        (**self).set_stroke(colour)
    }

    fn set_fill(&mut self, colour: Colour) {
        (**self).set_fill(colour)
    }

    fn set_stroke_weight(&mut self, weight: f64) {
        (**self).set_stroke_weight(weight)
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).rect(x, y, width, height)
    }

    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        (**self).ellipse(cx, cy, width, height)
    }

    fn point(&mut self, x: f64, y: f64) {
        (**self).point(x, y)
    }
}
