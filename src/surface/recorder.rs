//! A surface that records calls instead of drawing them.

use std::fmt;

use crate::types::Colour;

use super::Surface;

/// One call made against a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Stroke(Colour),
    Fill(Colour),
    StrokeWeight(f64),
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Ellipse { cx: f64, cy: f64, width: f64, height: f64 },
    Point { x: f64, y: f64 },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Stroke(c) => write!(f, "stroke {}", c),
            DrawCommand::Fill(c) => write!(f, "fill {}", c),
            DrawCommand::StrokeWeight(w) => write!(f, "weight {}", w),
            DrawCommand::Rect { x, y, width, height } => {
                write!(f, "rect {} {} {} {}", x, y, width, height)
            }
            DrawCommand::Ellipse { cx, cy, width, height } => {
                write!(f, "ellipse {} {} {} {}", cx, cy, width, height)
            }
            DrawCommand::Point { x, y } => write!(f, "point {} {}", x, y),
        }
    }
}

/// Records every call in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Coordinates of every recorded point, in drawing order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Point { x, y } => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    /// Check whether a point was drawn at exactly `(x, y)`.
    pub fn painted(&self, x: f64, y: f64) -> bool {
        self.commands
            .iter()
            .any(|c| *c == DrawCommand::Point { x, y })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// One command per line, for logs and snapshots.
    pub fn to_log(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for Recorder {
    fn set_stroke(&mut self, colour: Colour) {
        self.commands.push(DrawCommand::Stroke(colour));
    }

    fn set_fill(&mut self, colour: Colour) {
        self.commands.push(DrawCommand::Fill(colour));
    }

    fn set_stroke_weight(&mut self, weight: f64) {
        self.commands.push(DrawCommand::StrokeWeight(weight));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect { x, y, width, height });
    }

    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Ellipse { cx, cy, width, height });
    }

    fn point(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Point { x, y });
    }
}
