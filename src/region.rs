//! Base regions: the universe and circular classes.
//!
//! A [`Region`] is built without touching any surface. Drawing its outline
//! is a separate call, so membership can be tested on its own. The
//! [`RegionFactory`] joins the two steps: every region it creates has its
//! outline drawn exactly once, at creation.

use log::debug;

use crate::predicate::Predicate;
use crate::surface::Surface;
use crate::types::{Bounds, Colour};

/// How region outlines are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub border: Colour,
    pub fill: Colour,
    /// Border weight of the universe rectangle.
    pub universe_weight: f64,
    /// Border weight of class circles; heavier than the universe.
    pub class_weight: f64,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            border: Colour::BLACK,
            fill: Colour::TRANSPARENT,
            universe_weight: 1.0,
            class_weight: 3.0,
        }
    }
}

/// The drawn boundary of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Rect(Bounds),
    Circle { cx: f64, cy: f64, r: f64 },
}

/// A membership predicate together with its outline.
#[derive(Debug, Clone)]
pub struct Region {
    predicate: Predicate,
    outline: Outline,
}

impl Region {
    /// The universe: every point belongs to it, wherever it lies.
    pub fn universe(bounds: Bounds) -> Self {
        Self {
            predicate: Predicate::always(),
            outline: Outline::Rect(bounds),
        }
    }

    /// The closed disk of radius `r` around `(cx, cy)`.
    ///
    /// Membership compares squared distances with `<=` and no tolerance,
    /// so points exactly on the rim are subject to float rounding.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        let r2 = r * r;
        Self {
            predicate: Predicate::new(move |x, y| {
                let (dx, dy) = (x - cx, y - cy);
                dx * dx + dy * dy <= r2
            }),
            outline: Outline::Circle { cx, cy, r },
        }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn outline(&self) -> Outline {
        self.outline
    }

    pub fn into_predicate(self) -> Predicate {
        self.predicate
    }

    /// Draw the outline with the weight appropriate to its kind.
    pub fn draw(&self, surface: &mut dyn Surface, style: &OutlineStyle) {
        surface.set_fill(style.fill);
        surface.set_stroke(style.border);

        match self.outline {
            Outline::Rect(b) => {
                surface.set_stroke_weight(style.universe_weight);
                surface.rect(b.left, b.top, b.width, b.height);
            }
            Outline::Circle { cx, cy, r } => {
                surface.set_stroke_weight(style.class_weight);
                surface.ellipse(cx, cy, r * 2.0, r * 2.0);
            }
        }
    }
}

/// Creates regions on a surface, drawing each outline as it goes.
pub struct RegionFactory<'s> {
    surface: &'s mut dyn Surface,
    universe: Bounds,
    style: OutlineStyle,
}

impl<'s> RegionFactory<'s> {
    pub fn new(surface: &'s mut dyn Surface, universe: Bounds) -> Self {
        Self {
            surface,
            universe,
            style: OutlineStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OutlineStyle) -> Self {
        self.style = style;
        self
    }

    /// The bounds the universe outline is drawn at.
    pub fn bounds(&self) -> Bounds {
        self.universe
    }

    /// Draw the universe rectangle and return its always-true predicate.
    pub fn universe(&mut self) -> Predicate {
        debug!("universe {:?}", self.universe);
        self.create(Region::universe(self.universe))
    }

    /// Draw a circle outline and return its disk predicate.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) -> Predicate {
        debug!("circle(cx = {}, cy = {}, r = {})", cx, cy, r);
        self.create(Region::circle(cx, cy, r))
    }

    fn create(&mut self, region: Region) -> Predicate {
        region.draw(&mut *self.surface, &self.style);
        region.into_predicate()
    }
}
