//! Shading styles.

use crate::types::Colour;

/// How a shader paints: dot colour, dot size, grid spacing and grid origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingStyle {
    /// Dot colour.
    pub colour: Colour,
    /// Stroke width, i.e. dot diameter.
    pub weight: f64,
    /// Distance between neighbouring samples on each axis. Must be positive.
    pub mesh: f64,
    /// Inset of the first column from the universe's left edge.
    pub offset_x: f64,
    /// Inset of the first row from the universe's top edge.
    pub offset_y: f64,
}

impl ShadingStyle {
    pub const fn new(colour: Colour, weight: f64, mesh: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            colour,
            weight,
            mesh,
            offset_x,
            offset_y,
        }
    }
}

/// Styles used by the stock scenes.
pub struct BuiltinStyles;

impl BuiltinStyles {
    /// Large red dots on a coarse grid, for marking excluded areas.
    pub const POLKA: ShadingStyle = ShadingStyle::new(Colour::RED, 4.0, 8.0, 2.0, 2.0);

    /// Fine blue stipple that reads as a near-solid fill.
    pub const OCEAN: ShadingStyle = ShadingStyle::new(Colour::BLUE, 1.0, 2.0, 1.0, 1.0);

    /// Medium black dots, usually for a universe background.
    pub const SQUID: ShadingStyle = ShadingStyle::new(Colour::BLACK, 2.0, 5.0, 3.0, 3.0);

    /// Get all builtin styles with their names.
    pub fn all() -> Vec<(&'static str, ShadingStyle)> {
        vec![
            ("polka", Self::POLKA),
            ("ocean", Self::OCEAN),
            ("squid", Self::SQUID),
        ]
    }

    /// Get a builtin style by name.
    pub fn get(name: &str) -> Option<ShadingStyle> {
        Self::all()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, style)| style)
    }
}
