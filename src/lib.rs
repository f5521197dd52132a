//! venn - Venn diagrams that prove set-algebra identities by shading.
//!
//! Regions are membership predicates over the plane. The predicate algebra
//! combines them, and shaders sample the result on a regular mesh, painting
//! a dot wherever it holds (or, negated, wherever it fails). Layering a few
//! shaders shows at a glance that, say, `!(f | g)` and `!f & !g` cover the
//! same ground.
//!
//! ```
//! use venn::{make_shader, BuiltinStyles, Bounds, Recorder, RegionFactory};
//!
//! let mut surface = Recorder::new();
//! let universe = Bounds::default();
//!
//! let f = RegionFactory::new(&mut surface, universe).circle(145.0, 140.0, 80.0);
//! let polka = make_shader(BuiltinStyles::POLKA, universe).unwrap();
//! polka.apply(&!&f, &mut surface).unwrap();
//!
//! assert!(surface.painted(22.0, 22.0));
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod predicate;
pub mod region;
pub mod render;
pub mod scene;
pub mod shading;
pub mod surface;
pub mod types;
pub mod validation;

pub use error::{Result, VennError};
pub use predicate::{and, iff, implies_only_if, not, or, xor, Predicate, PredicateExpr};
pub use region::{Outline, OutlineStyle, Region, RegionFactory};
pub use render::{write_png, Canvas};
pub use scene::{load_scene, parse_scene, LayerReport, Scene, SceneDef};
pub use shading::{make_shader, negate, BuiltinStyles, Convention, ShadeReport, Shader, ShadingStyle};
pub use surface::{DrawCommand, Recorder, Surface};
pub use types::{Bounds, Colour};
pub use validation::{validate_scene, Diagnostic, Severity, ValidationResult};
