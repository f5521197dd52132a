//! Raster output.
//!
//! [`Canvas`] is a [`Surface`](crate::surface::Surface) that rasterizes
//! draw calls into a `tiny_skia` pixmap; [`write_png`] saves it.

mod canvas;
mod png;

pub use canvas::Canvas;
pub use png::{scale_image, write_png};
