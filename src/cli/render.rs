//! Render command implementation.
//!
//! Loads a scene, shades it onto a canvas and writes a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::scene::{load_scene, Scene};
use crate::validation::validate_scene;

use super::validate::print_diagnostics;

/// Render a scene to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Scene file to render
    #[arg(required = true)]
    pub scene: PathBuf,

    /// Output PNG (default: scene path with a .png extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Smooth outline and dot edges
    #[arg(long)]
    pub anti_alias: bool,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let def = load_scene(&args.scene)?;

    let diagnostics = validate_scene(&def);
    if !diagnostics.is_clean() {
        print_diagnostics(&diagnostics, printer);
    }

    let mut scene = Scene::from_def(def)?;
    if args.anti_alias {
        scene = scene.with_anti_alias();
    }
    printer.status(
        "Rendering",
        &format!(
            "{} ({})",
            scene.name(),
            plural(scene.layer_count(), "layer", "layers")
        ),
    );

    let (canvas, reports) = scene.render_canvas()?;
    for layer in &reports {
        printer.info(
            "Shaded",
            &format!(
                "{} {}",
                layer.label,
                printer.dim(&format!(
                    "({} of {} samples)",
                    layer.report.painted, layer.report.sampled
                ))
            ),
        );
    }

    let output = args
        .output
        .unwrap_or_else(|| args.scene.with_extension("png"));
    let (width, height) = write_png(&canvas, &output, args.scale)?;

    printer.success(
        "Finished",
        &format!(
            "{} -> {} ({}x{})",
            scene.name(),
            display_path(&output),
            width,
            height
        ),
    );

    Ok(())
}
