//! Shaders and sampling passes.

use log::debug;

use crate::error::{Result, VennError};
use crate::predicate::{not, Predicate};
use crate::surface::Surface;
use crate::types::Bounds;

use super::ShadingStyle;

/// Which side of a predicate a shader marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Paint where the predicate holds ("this is included").
    Positive,
    /// Paint where the predicate fails ("this is excluded").
    Negative,
}

impl Convention {
    fn flipped(self) -> Self {
        match self {
            Convention::Positive => Convention::Negative,
            Convention::Negative => Convention::Positive,
        }
    }
}

/// Outcome of one shading pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadeReport {
    /// Grid samples visited.
    pub sampled: usize,
    /// Points painted.
    pub painted: usize,
}

/// Most samples a single pass may visit.
pub const MAX_SAMPLES: usize = 1 << 24;

/// A validated style bound to a sampling domain.
///
/// Shaders keep no state between passes and can shade any number of
/// predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    style: ShadingStyle,
    domain: Bounds,
    convention: Convention,
    x: Axis,
    y: Axis,
}

/// Build a shader for `style` over `domain`.
pub fn make_shader(style: ShadingStyle, domain: Bounds) -> Result<Shader> {
    Shader::new(style, domain)
}

/// A shader that marks where predicates fail instead of where they hold.
pub fn negate(shader: &Shader) -> Shader {
    shader.negate()
}

impl Shader {
    /// Validate `style` and bind it to `domain`.
    ///
    /// A mesh that is not a positive finite number would never advance the
    /// sampling loop, and one so fine that a pass would exceed
    /// [`MAX_SAMPLES`] would never finish; both are rejected here.
    pub fn new(style: ShadingStyle, domain: Bounds) -> Result<Self> {
        if !(style.mesh.is_finite() && style.mesh > 0.0) {
            return Err(config_error(
                format!("mesh step must be positive, got {}", style.mesh),
                "Use a mesh of at least 1 for pixel-sized dots",
            ));
        }

        if !(style.weight.is_finite() && style.weight >= 0.0) {
            return Err(config_error(
                format!("stroke weight must be non-negative, got {}", style.weight),
                "Dots are drawn with the weight as their diameter",
            ));
        }

        if !(style.offset_x.is_finite() && style.offset_y.is_finite()) {
            return Err(config_error(
                format!(
                    "offsets must be finite, got ({}, {})",
                    style.offset_x, style.offset_y
                ),
                "Offsets inset the first sample from the universe corner",
            ));
        }

        let Bounds {
            left,
            top,
            width,
            height,
        } = domain;
        if ![left, top, width, height].iter().all(|v| v.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(config_error(
                format!("invalid sampling domain {:?}", domain),
                "The universe needs a finite corner and a non-negative size",
            ));
        }

        let x = Axis::new(left, width, style.offset_x, style.mesh)?;
        let y = Axis::new(top, height, style.offset_y, style.mesh)?;
        let total = x.count.checked_mul(y.count).unwrap_or(usize::MAX);
        if total > MAX_SAMPLES {
            return Err(too_many_samples(style.mesh));
        }

        Ok(Self {
            style,
            domain,
            convention: Convention::Positive,
            x,
            y,
        })
    }

    pub fn style(&self) -> &ShadingStyle {
        &self.style
    }

    pub fn domain(&self) -> Bounds {
        self.domain
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// The same shader under the opposite convention.
    ///
    /// Applying the result to `f` is the same as applying `self` to `!f`.
    pub fn negate(&self) -> Shader {
        Shader {
            convention: self.convention.flipped(),
            ..self.clone()
        }
    }

    /// Sample coordinates in painting order: column by column, top to bottom.
    pub fn samples(&self) -> Samples {
        Samples {
            x: self.x,
            y: self.y,
            column: 0,
            row: 0,
        }
    }

    /// Number of samples in one pass.
    pub fn sample_count(&self) -> usize {
        self.x.count * self.y.count
    }

    /// Shade `predicate` onto `surface`.
    ///
    /// A predicate failure stops the pass at the failing sample; points
    /// already painted stay on the surface.
    pub fn apply(&self, predicate: &Predicate, surface: &mut dyn Surface) -> Result<ShadeReport> {
        let target = match self.convention {
            Convention::Positive => predicate.clone(),
            Convention::Negative => not(predicate),
        };

        surface.set_stroke(self.style.colour);
        surface.set_stroke_weight(self.style.weight);

        let mut report = ShadeReport::default();
        for (x, y) in self.samples() {
            report.sampled += 1;
            if target.eval(x, y)? {
                surface.point(x, y);
                report.painted += 1;
            }
        }

        debug!(
            "shade({:?}, colour = {}, mesh = {}): painted {} of {} samples",
            self.convention, self.style.colour, self.style.mesh, report.painted, report.sampled
        );

        Ok(report)
    }
}

fn config_error(message: String, help: &str) -> VennError {
    VennError::Configuration {
        message,
        help: Some(help.to_string()),
    }
}

fn too_many_samples(mesh: f64) -> VennError {
    config_error(
        format!("mesh step {} is too fine for the universe", mesh),
        &format!("A pass may visit at most {} samples", MAX_SAMPLES),
    )
}

/// Samples along one axis: `start + i * step` for `i` in `0..count`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    start: f64,
    step: f64,
    count: usize,
}

impl Axis {
    fn new(origin: f64, extent: f64, offset: f64, step: f64) -> Result<Self> {
        let span = extent - offset;
        let count = if span < 0.0 {
            0
        } else {
            let steps = (span / step).floor();
            if steps >= MAX_SAMPLES as f64 {
                return Err(too_many_samples(step));
            }
            steps as usize + 1
        };

        Ok(Self {
            start: origin + offset,
            step,
            count,
        })
    }

    fn at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }
}

/// Iterator over the sample grid of a [`Shader`].
#[derive(Debug, Clone)]
pub struct Samples {
    x: Axis,
    y: Axis,
    column: usize,
    row: usize,
}

impl Iterator for Samples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        if self.y.count == 0 || self.column >= self.x.count {
            return None;
        }

        let sample = (self.x.at(self.column), self.y.at(self.row));

        self.row += 1;
        if self.row == self.y.count {
            self.row = 0;
            self.column += 1;
        }

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.y.count == 0 || self.column >= self.x.count {
            0
        } else {
            (self.x.count - self.column) * self.y.count - self.row
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}
