//! Validation of scene documents.
//!
//! Runs a suite of checks against a parsed scene and reports errors and
//! warnings. Used by `venn validate`, and by `Scene::from_def` to refuse
//! scenes with errors before anything is drawn.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::scene::SceneDef;

/// Run all validation checks against the scene.
pub fn validate_scene(scene: &SceneDef) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_universe(scene));
    result.merge(checks::check_duplicate_names(scene));
    result.merge(checks::check_region_names(scene));
    result.merge(checks::check_region_geometry(scene));
    result.merge(checks::check_styles(scene));
    result.merge(checks::check_layer_refs(scene));
    result.merge(checks::check_unused_regions(scene));
    result.merge(checks::check_has_layers(scene));

    result
}
