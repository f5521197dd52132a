//! PNG output for rendered canvases.
//!
//! Writes a canvas to a PNG file with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{Result, VennError};

use super::Canvas;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
///
/// Returns the dimensions of the written image.
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<(u32, u32)> {
    let img = scale_image(&canvas.to_image(), scale)?;

    img.save(path).map_err(|e| VennError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(img.dimensions())
}

/// Nearest-neighbour upscale by an integer factor; 0 is treated as 1.
///
/// Neither side of the result may exceed [`Canvas::MAX_SIDE`].
pub fn scale_image(source: &RgbaImage, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let (width, height) = scaled_size(source.dimensions(), scale)?;
    if scale == 1 {
        return Ok(source.clone());
    }

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        *source.get_pixel(x / scale, y / scale)
    }))
}

fn scaled_size((width, height): (u32, u32), scale: u32) -> Result<(u32, u32)> {
    let side = |n: u32| n.checked_mul(scale).filter(|&s| s <= Canvas::MAX_SIDE);

    side(width).zip(side(height)).ok_or_else(|| VennError::Configuration {
        message: format!("cannot scale a {}x{} image by {}", width, height, scale),
        help: Some(format!(
            "Scaled images are limited to {} pixels a side",
            Canvas::MAX_SIDE
        )),
    })
}
