//! Init command implementation.
//!
//! Writes a starter scene to get a new diagram going.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, VennError};
use crate::output::{display_path, Printer};
use crate::scene::STARTER_SCENE;

/// Write a starter scene file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the scene
    #[arg(default_value = "scene.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(VennError::Io {
            path: args.path.clone(),
            message: "file already exists (use --force to overwrite)".to_string(),
        });
    }

    fs::write(&args.path, STARTER_SCENE).map_err(|e| VennError::Io {
        path: args.path.clone(),
        message: format!("Failed to write scene: {}", e),
    })?;

    printer.success("Created", &display_path(&args.path));
    Ok(())
}
