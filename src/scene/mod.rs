//! Scene documents.
//!
//! A scene says which regions exist and which combinations of them to shade,
//! in which order. It is plain data, so any identity can be illustrated
//! without code changes:
//!
//! ```yaml
//! name: complement
//! universe: { left: 20, top: 20, width: 350, height: 325 }
//! regions:
//!   - { name: f, x: 145, y: 140, r: 80 }
//! styles:
//!   - { name: dots, colour: "#FF0000", weight: 4, mesh: 8, offset: [2, 2] }
//! layers:
//!   - { style: dots, shade: "f", negate: true }
//! ```

mod build;

pub use build::{LayerReport, Scene};

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, VennError};
use crate::types::{Bounds, Colour};

/// Region names that always resolve to the universe.
pub const UNIVERSE_NAMES: [&str; 2] = ["U", "universe"];

/// Starter scene written by `venn init`: three classes, with the complement
/// of the first excluded and `f & (g | h)` filled in.
pub const STARTER_SCENE: &str = r##"name: starter
canvas: { width: 400, height: 400, background: "#FFFFFF" }
universe: { left: 20, top: 20, width: 350, height: 325 }

regions:
  - { name: f, x: 145, y: 140, r: 80 }
  - { name: g, x: 235, y: 140, r: 80 }
  - { name: h, x: 190, y: 220, r: 80 }

styles:
  - { name: polka, colour: "#FF0000", weight: 4, mesh: 8, offset: [2, 2] }
  - { name: ocean, colour: "#0000FF", weight: 1, mesh: 2, offset: [1, 1] }
  - { name: squid, colour: "#000000", weight: 2, mesh: 5, offset: [3, 3] }

layers:
  - { style: polka, shade: "!f" }
  - { style: ocean, shade: "f & (g | h)" }
  - { style: squid, shade: "U" }
"##;

/// A parsed scene document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDef {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub canvas: CanvasDef,

    #[serde(default)]
    pub universe: Bounds,

    /// Circles, drawn in declaration order.
    #[serde(default)]
    pub regions: Vec<RegionDef>,

    /// Named shading styles. Builtin styles are available without declaring them.
    #[serde(default)]
    pub styles: Vec<StyleDef>,

    /// Shading passes, applied in order; later layers paint over earlier ones.
    #[serde(default)]
    pub layers: Vec<LayerDef>,
}

fn default_name() -> String {
    "scene".to_string()
}

/// Output raster size and background.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasDef {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: Colour,
    /// Smooth outline and dot edges.
    #[serde(default)]
    pub anti_alias: bool,
}

fn default_background() -> Colour {
    Colour::WHITE
}

impl Default for CanvasDef {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: default_background(),
            anti_alias: false,
        }
    }
}

/// A circular class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionDef {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// A named shading style.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleDef {
    pub name: String,
    pub colour: Colour,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub mesh: f64,
    #[serde(default)]
    pub offset: [f64; 2],
}

fn default_weight() -> f64 {
    1.0
}

/// One shading pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerDef {
    /// Style name, declared or builtin.
    pub style: String,
    /// Predicate expression over region names.
    pub shade: String,
    /// Mark where the expression fails instead of where it holds.
    #[serde(default)]
    pub negate: bool,
}

impl LayerDef {
    /// Short description for logs and diagnostics.
    pub fn label(&self) -> String {
        if self.negate {
            format!("{} on not ({})", self.style, self.shade)
        } else {
            format!("{} on {}", self.style, self.shade)
        }
    }
}

/// Parse a scene document from YAML.
pub fn parse_scene(source: &str) -> Result<SceneDef> {
    serde_yaml::from_str(source).map_err(|e| VennError::Parse {
        message: format!("Invalid scene: {}", e),
        help: Some("A scene has `regions`, `styles` and `layers` lists".to_string()),
    })
}

/// Read and parse a scene file.
pub fn load_scene(path: &Path) -> Result<SceneDef> {
    let source = fs::read_to_string(path).map_err(|e| VennError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read scene: {}", e),
    })?;
    parse_scene(&source)
}
