//! Compiling and rendering scenes.

use std::collections::HashMap;

use log::debug;

use crate::error::{Result, VennError};
use crate::predicate::{Predicate, PredicateExpr};
use crate::region::{OutlineStyle, RegionFactory};
use crate::render::Canvas;
use crate::shading::{BuiltinStyles, ShadeReport, Shader, ShadingStyle};
use crate::surface::Surface;
use crate::types::Bounds;
use crate::validation::validate_scene;

use super::{CanvasDef, RegionDef, SceneDef, UNIVERSE_NAMES};

/// A validated scene, ready to render any number of times.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    canvas: CanvasDef,
    universe: Bounds,
    outline: OutlineStyle,
    regions: Vec<RegionDef>,
    layers: Vec<Layer>,
}

#[derive(Debug, Clone)]
struct Layer {
    label: String,
    shader: Shader,
    expr: PredicateExpr,
}

/// Result of shading one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerReport {
    pub label: String,
    pub report: ShadeReport,
}

impl Scene {
    /// Validate a scene document and prepare its shaders and expressions.
    ///
    /// Any validation error rejects the scene; warnings are left to callers
    /// that run [`validate_scene`] themselves.
    pub fn from_def(def: SceneDef) -> Result<Self> {
        validate_scene(&def).into_result()?;

        let declared: HashMap<&str, ShadingStyle> = def
            .styles
            .iter()
            .map(|s| {
                let style = ShadingStyle::new(s.colour, s.weight, s.mesh, s.offset[0], s.offset[1]);
                (s.name.as_str(), style)
            })
            .collect();

        let layers = def
            .layers
            .iter()
            .map(|layer| {
                let style = declared
                    .get(layer.style.as_str())
                    .copied()
                    .or_else(|| BuiltinStyles::get(&layer.style))
                    .ok_or_else(|| VennError::Validation {
                        message: format!("Unknown style: {}", layer.style),
                        help: None,
                    })?;

                let shader = Shader::new(style, def.universe)?;
                Ok(Layer {
                    label: layer.label(),
                    shader: if layer.negate { shader.negate() } else { shader },
                    expr: PredicateExpr::parse(&layer.shade)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: def.name,
            canvas: def.canvas,
            universe: def.universe,
            outline: OutlineStyle::default(),
            regions: def.regions,
            layers,
        })
    }

    /// Use a non-default outline style for the universe and regions.
    pub fn with_outline(mut self, outline: OutlineStyle) -> Self {
        self.outline = outline;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> Bounds {
        self.universe
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Draw the scene onto `surface`.
    ///
    /// Outlines come first (universe, then regions in declaration order),
    /// then each layer in order. A failing layer stops the render; whatever
    /// was drawn before it stays.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<Vec<LayerReport>> {
        let mut predicates: HashMap<&str, Predicate> = HashMap::new();
        {
            let mut factory = RegionFactory::new(&mut *surface, self.universe).with_style(self.outline);

            let universe = factory.universe();
            for name in UNIVERSE_NAMES {
                predicates.insert(name, universe.clone());
            }
            for region in &self.regions {
                let disk = factory.circle(region.x, region.y, region.r);
                predicates.insert(region.name.as_str(), disk);
            }
        }

        let lookup = |name: &str| predicates.get(name).cloned();
        let mut reports = Vec::with_capacity(self.layers.len());

        for layer in &self.layers {
            debug!("{}: layer {}", self.name, layer.expr);
            let predicate = layer.expr.compile(&lookup)?;
            let report = layer.shader.apply(&predicate, surface)?;
            reports.push(LayerReport {
                label: layer.label.clone(),
                report,
            });
        }

        Ok(reports)
    }

    /// Smooth edges regardless of the scene's canvas setting.
    pub fn with_anti_alias(mut self) -> Self {
        self.canvas.anti_alias = true;
        self
    }

    /// Render onto a fresh canvas sized and coloured per the scene.
    pub fn render_canvas(&self) -> Result<(Canvas, Vec<LayerReport>)> {
        let CanvasDef {
            width,
            height,
            background,
            anti_alias,
        } = self.canvas;
        let mut canvas = Canvas::new(width, height, background)?.with_anti_alias(anti_alias);
        let reports = self.render(&mut canvas)?;
        Ok((canvas, reports))
    }
}
