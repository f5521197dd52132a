//! Mesh-sampled shading.
//!
//! A [`Shader`] walks a regular grid over the universe and paints a dot at
//! every sample where a predicate holds. Coarse meshes with heavy dots give
//! polka-dot patterns; fine meshes approach a solid fill. The cost of a pass
//! grows with the square of `1 / mesh`.

mod shader;
mod style;

pub use shader::{make_shader, negate, Convention, Samples, ShadeReport, Shader, MAX_SAMPLES};
pub use style::{BuiltinStyles, ShadingStyle};
