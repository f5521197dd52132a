//! Validation checks for scene documents.
//!
//! Each check takes a `&SceneDef` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::predicate::PredicateExpr;
use crate::render::Canvas;
use crate::scene::{SceneDef, UNIVERSE_NAMES};
use crate::shading::BuiltinStyles;

use super::warning::{Diagnostic, ValidationResult};

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Check for region or style names declared twice.
pub fn check_duplicate_names(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut seen = HashSet::new();
    for region in &scene.regions {
        if !seen.insert(region.name.as_str()) {
            result.push(Diagnostic::error(
                "venn::validate::duplicate-region",
                format!("Region '{}' is declared more than once", region.name),
            ));
        }
    }

    let mut seen = HashSet::new();
    for style in &scene.styles {
        if !seen.insert(style.name.as_str()) {
            result.push(Diagnostic::error(
                "venn::validate::duplicate-style",
                format!("Style '{}' is declared more than once", style.name),
            ));
        }
    }

    result
}

/// Check that region names can be written in expressions and don't shadow
/// the universe or the boolean constants.
pub fn check_region_names(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    for region in &scene.regions {
        let name = region.name.as_str();
        if UNIVERSE_NAMES.contains(&name) || name == "true" || name == "false" {
            result.push(
                Diagnostic::error(
                    "venn::validate::reserved-name",
                    format!("Region name '{}' is reserved", name),
                )
                .with_help("U, universe, true and false already have a meaning"),
            );
        } else if !is_identifier(name) {
            result.push(
                Diagnostic::error(
                    "venn::validate::bad-name",
                    format!("Region name '{}' cannot be used in expressions", name),
                )
                .with_help("Use letters, digits and underscores only"),
            );
        }
    }

    result
}

/// Check that the universe is a real rectangle and the canvas can be
/// allocated.
pub fn check_universe(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    let u = scene.universe;

    let finite = [u.left, u.top, u.width, u.height].iter().all(|v| v.is_finite());
    if !finite || u.width < 0.0 || u.height < 0.0 {
        result.push(
            Diagnostic::error(
                "venn::validate::bad-universe",
                format!(
                    "Universe ({}, {}, {}, {}) is not a valid rectangle",
                    u.left, u.top, u.width, u.height
                ),
            )
            .with_help("Give a finite corner and a non-negative width and height"),
        );
    }

    let canvas = scene.canvas;
    let fits = |side: u32| (1..=Canvas::MAX_SIDE).contains(&side);
    if !fits(canvas.width) || !fits(canvas.height) {
        result.push(Diagnostic::error(
            "venn::validate::bad-canvas",
            format!(
                "Canvas is {}x{}; each side must be between 1 and {} pixels",
                canvas.width,
                canvas.height,
                Canvas::MAX_SIDE
            ),
        ));
    }

    result
}

/// Check circle geometry: radii must be positive, and disks should fit in
/// the universe.
pub fn check_region_geometry(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    let u = scene.universe;

    for region in &scene.regions {
        let finite = region.x.is_finite() && region.y.is_finite() && region.r.is_finite();
        if !finite || region.r <= 0.0 {
            result.push(Diagnostic::error(
                "venn::validate::bad-radius",
                format!(
                    "Region '{}' needs a finite centre and a positive radius",
                    region.name
                ),
            ));
            continue;
        }

        let fits = region.x - region.r >= u.left
            && region.x + region.r <= u.right()
            && region.y - region.r >= u.top
            && region.y + region.r <= u.bottom();
        if !fits {
            result.push(
                Diagnostic::warning(
                    "venn::validate::outside-universe",
                    format!("Region '{}' extends past the universe", region.name),
                )
                .with_help("Parts of it outside the universe are never sampled"),
            );
        }
    }

    result
}

/// Check style parameters before any shader is built from them.
pub fn check_styles(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();
    let u = scene.universe;

    for style in &scene.styles {
        if !(style.mesh.is_finite() && style.mesh > 0.0) {
            result.push(
                Diagnostic::error(
                    "venn::validate::bad-mesh",
                    format!("Style '{}' has mesh {}", style.name, style.mesh),
                )
                .with_help("The mesh step must be a positive number"),
            );
        }

        if !(style.weight.is_finite() && style.weight >= 0.0) {
            result.push(Diagnostic::error(
                "venn::validate::bad-weight",
                format!("Style '{}' has weight {}", style.name, style.weight),
            ));
        }

        let [ox, oy] = style.offset;
        if !(ox.is_finite() && oy.is_finite()) {
            result.push(Diagnostic::error(
                "venn::validate::bad-offset",
                format!("Style '{}' has a non-finite offset", style.name),
            ));
        } else if ox > u.width || oy > u.height {
            result.push(Diagnostic::warning(
                "venn::validate::empty-grid",
                format!(
                    "Style '{}' is offset past the universe and samples nothing",
                    style.name
                ),
            ));
        }
    }

    result
}

/// Check that every layer names a known style and a valid expression over
/// declared regions.
pub fn check_layer_refs(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    let styles: HashSet<&str> = scene.styles.iter().map(|s| s.name.as_str()).collect();
    let regions: HashSet<&str> = scene
        .regions
        .iter()
        .map(|r| r.name.as_str())
        .chain(UNIVERSE_NAMES)
        .collect();

    for (index, layer) in scene.layers.iter().enumerate() {
        if !styles.contains(layer.style.as_str()) && BuiltinStyles::get(&layer.style).is_none() {
            result.push(
                Diagnostic::error(
                    "venn::validate::undefined-style",
                    format!("Layer {} uses undefined style '{}'", index + 1, layer.style),
                )
                .with_help("Declare it under `styles:` or use polka, ocean or squid"),
            );
        }

        let expr = match PredicateExpr::parse(&layer.shade) {
            Ok(expr) => expr,
            Err(e) => {
                result.push(Diagnostic::error(
                    "venn::validate::bad-expression",
                    format!("Layer {}: {}", index + 1, e),
                ));
                continue;
            }
        };

        for name in expr.regions() {
            if !regions.contains(name) {
                result.push(
                    Diagnostic::error(
                        "venn::validate::undefined-region",
                        format!("Layer {} shades undefined region '{}'", index + 1, name),
                    )
                    .with_help("Declare the region under `regions:`"),
                );
            }
        }
    }

    result
}

/// Warn about regions that no layer refers to.
pub fn check_unused_regions(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    let exprs: Vec<PredicateExpr> = scene
        .layers
        .iter()
        .filter_map(|layer| PredicateExpr::parse(&layer.shade).ok())
        .collect();
    let used: HashSet<&str> = exprs.iter().flat_map(|e| e.regions()).collect();

    for region in &scene.regions {
        if !used.contains(region.name.as_str()) {
            result.push(Diagnostic::warning(
                "venn::validate::unused-region",
                format!("Region '{}' is drawn but never shaded", region.name),
            ));
        }
    }

    result
}

/// Warn when a scene has nothing to shade.
pub fn check_has_layers(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    if scene.layers.is_empty() {
        result.push(
            Diagnostic::warning(
                "venn::validate::no-layers",
                format!("Scene '{}' has no layers", scene.name),
            )
            .with_help("Only outlines will be drawn"),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::parse_scene;

    fn scene(yaml: &str) -> SceneDef {
        parse_scene(yaml).unwrap()
    }

    #[test]
    fn test_duplicate_names() {
        let s = scene(
            r##"
regions:
  - { name: f, x: 100, y: 100, r: 10 }
  - { name: f, x: 120, y: 100, r: 10 }
styles:
  - { name: a, colour: "#000", mesh: 1 }
  - { name: a, colour: "#000", mesh: 2 }
"##,
        );
        let result = check_duplicate_names(&s);
        assert_eq!(result.error_count(), 2);
        assert!(result.has_code("venn::validate::duplicate-region"));
        assert!(result.has_code("venn::validate::duplicate-style"));
    }

    #[test]
    fn test_reserved_and_bad_names() {
        let s = scene(
            r#"
regions:
  - { name: U, x: 100, y: 100, r: 10 }
  - { name: "a-b", x: 100, y: 100, r: 10 }
  - { name: ok_1, x: 100, y: 100, r: 10 }
"#,
        );
        let result = check_region_names(&s);
        assert_eq!(result.error_count(), 2);
        assert!(result.has_code("venn::validate::reserved-name"));
        assert!(result.has_code("venn::validate::bad-name"));
    }

    #[test]
    fn test_universe_and_canvas() {
        assert!(check_universe(&scene("name: fine\n")).is_clean());

        let s = scene(
            r#"
canvas: { width: 0, height: 400 }
universe: { left: 20, top: 20, width: -350, height: 325 }
"#,
        );
        let result = check_universe(&s);
        assert_eq!(result.error_count(), 2);
        assert!(result.has_code("venn::validate::bad-universe"));
        assert!(result.has_code("venn::validate::bad-canvas"));

        let s = scene("canvas: { width: 100000, height: 400 }\nuniverse: { left: .nan, top: 0, width: 1, height: 1 }\n");
        assert_eq!(check_universe(&s).error_count(), 2);
    }

    #[test]
    fn test_region_geometry() {
        let s = scene(
            r#"
regions:
  - { name: a, x: 100, y: 100, r: 0 }
  - { name: b, x: 25, y: 100, r: 50 }
  - { name: c, x: 145, y: 140, r: 80 }
"#,
        );
        let result = check_region_geometry(&s);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert!(result.has_code("venn::validate::outside-universe"));
    }

    #[test]
    fn test_styles() {
        let s = scene(
            r##"
styles:
  - { name: zero, colour: "#000", mesh: 0 }
  - { name: heavy, colour: "#000", weight: -1, mesh: 2 }
  - { name: far, colour: "#000", mesh: 2, offset: [400, 0] }
  - { name: fine, colour: "#000", mesh: 2, offset: [1, 1] }
"##,
        );
        let result = check_styles(&s);
        assert!(result.has_code("venn::validate::bad-mesh"));
        assert!(result.has_code("venn::validate::bad-weight"));
        assert!(result.has_code("venn::validate::empty-grid"));
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_layer_refs() {
        let s = scene(
            r#"
regions:
  - { name: f, x: 145, y: 140, r: 80 }
layers:
  - { style: polka, shade: "!f | U" }
  - { style: plaid, shade: "f" }
  - { style: ocean, shade: "f & g" }
  - { style: squid, shade: "f &" }
"#,
        );
        let result = check_layer_refs(&s);
        assert_eq!(result.error_count(), 3);
        assert!(result.has_code("venn::validate::undefined-style"));
        assert!(result.has_code("venn::validate::undefined-region"));
        assert!(result.has_code("venn::validate::bad-expression"));
    }

    #[test]
    fn test_unused_regions() {
        let s = scene(
            r#"
regions:
  - { name: f, x: 145, y: 140, r: 80 }
  - { name: g, x: 235, y: 140, r: 80 }
layers:
  - { style: polka, shade: "!f" }
"#,
        );
        let result = check_unused_regions(&s);
        assert_eq!(result.warning_count(), 1);
        assert!(result.iter().any(|d| d.message.contains("'g'")));
    }

    #[test]
    fn test_has_layers() {
        assert_eq!(check_has_layers(&scene("name: empty\n")).warning_count(), 1);
        assert!(check_has_layers(&scene("layers: [{ style: squid, shade: U }]\n")).is_clean());
    }
}
