pub mod init;
pub mod render;
pub mod validate;

use clap::{Parser, Subcommand};

/// venn - Shade Venn diagrams from scene files
#[derive(Parser, Debug)]
#[command(name = "venn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log shading passes to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a scene to PNG
    Render(render::RenderArgs),

    /// Check scene files without rendering
    Validate(validate::ValidateArgs),

    /// Write a starter scene file
    Init(init::InitArgs),
}
