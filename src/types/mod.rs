//! Core value types shared by regions, shaders and surfaces.
//!
//! - `Colour` - RGBA colour values
//! - `Bounds` - the universe rectangle and sampling domain

mod bounds;
mod colour;

pub use bounds::Bounds;
pub use colour::Colour;
