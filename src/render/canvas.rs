//! Raster surface backed by a `tiny_skia` pixmap.
//!
//! Drawing coordinates are shifted by half a pixel so that pixel `(px, py)`
//! is centred on the point `(px, py)`. Strokes are centred on the geometric
//! edge and are `weight` wide; points are round dots whose diameter is the
//! stroke weight (one pixel at weight 1 or below).

use image::{ImageBuffer, Rgba, RgbaImage};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::error::{Result, VennError};
use crate::surface::Surface;
use crate::types::Colour;

/// A raster drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    stroke: Colour,
    fill: Colour,
    weight: f64,
    anti_alias: bool,
}

impl Canvas {
    /// Longest side a canvas, or a scaled image of one, may have.
    pub const MAX_SIDE: u32 = 16_384;

    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Result<Self> {
        let fits = width <= Self::MAX_SIDE && height <= Self::MAX_SIDE;
        let mut pixmap = fits
            .then(|| Pixmap::new(width, height))
            .flatten()
            .ok_or_else(|| VennError::Configuration {
                message: format!("cannot create a {}x{} canvas", width, height),
                help: Some(format!(
                    "Each side must be between 1 and {} pixels",
                    Self::MAX_SIDE
                )),
            })?;
        pixmap.fill(to_skia(background));

        Ok(Self {
            pixmap,
            stroke: Colour::BLACK,
            fill: Colour::WHITE,
            weight: 1.0,
            anti_alias: false,
        })
    }

    /// Smooth shape edges. Off by default, so dots and outlines keep
    /// exact colours.
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Colour::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Copy the pixels out with straight alpha.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            Rgba(self.get(x, y).unwrap_or(Colour::TRANSPARENT).to_rgba())
        })
    }

    /// Half the stroke width, never thinner than a single pixel.
    fn half_weight(&self) -> f32 {
        (self.weight / 2.0).max(0.5) as f32
    }

    fn has_stroke(&self) -> bool {
        self.weight > 0.0 && !self.stroke.is_transparent()
    }

    fn paint(&self, colour: Colour) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia(colour));
        paint.anti_alias = self.anti_alias;
        paint
    }

    /// Fill `path` with the fill colour, then stroke it.
    fn draw_path(&mut self, path: &Path) {
        let transform = Transform::from_translate(0.5, 0.5);

        if !self.fill.is_transparent() {
            let paint = self.paint(self.fill);
            self.pixmap
                .fill_path(path, &paint, FillRule::Winding, transform, None);
        }

        if self.has_stroke() {
            let paint = self.paint(self.stroke);
            let stroke = Stroke {
                width: self.half_weight() * 2.0,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(path, &paint, &stroke, transform, None);
        }
    }
}

impl Surface for Canvas {
    fn set_stroke(&mut self, colour: Colour) {
        self.stroke = colour;
    }

    fn set_fill(&mut self, colour: Colour) {
        self.fill = colour;
    }

    fn set_stroke_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (left, right) = (x.min(x + width), x.max(x + width));
        let (top, bottom) = (y.min(y + height), y.max(y + height));

        if let Some(rect) = Rect::from_ltrb(left as f32, top as f32, right as f32, bottom as f32) {
            self.draw_path(&PathBuilder::from_rect(rect));
        }
    }

    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        let (rx, ry) = ((width / 2.0).abs(), (height / 2.0).abs());
        let oval = Rect::from_ltrb((cx - rx) as f32, (cy - ry) as f32, (cx + rx) as f32, (cy + ry) as f32);

        if let Some(path) = oval.and_then(PathBuilder::from_oval) {
            self.draw_path(&path);
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if !self.has_stroke() {
            return;
        }

        let paint = self.paint(self.stroke);
        if let Some(dot) = PathBuilder::from_circle(x as f32, y as f32, self.half_weight()) {
            self.pixmap.fill_path(
                &dot,
                &paint,
                FillRule::Winding,
                Transform::from_translate(0.5, 0.5),
                None,
            );
        }
    }
}

fn to_skia(colour: Colour) -> Color {
    Color::from_rgba8(colour.r, colour.g, colour.b, colour.a)
}
