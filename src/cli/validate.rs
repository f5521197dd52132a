//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, VennError};
use crate::output::{display_path, plural, Printer};
use crate::scene::load_scene;
use crate::validation::{validate_scene, ValidationResult};

/// Check scene files without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Scene files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut failed = 0;

    for file in &args.files {
        printer.status("Checking", &display_path(file));

        let result = validate_scene(&load_scene(file)?);
        print_diagnostics(&result, printer);
        if result.has_errors() {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(VennError::Validation {
            message: format!("{} failed validation", plural(failed, "scene", "scenes")),
            help: None,
        });
    }

    printer.success(
        "Finished",
        &format!("{} valid", plural(args.files.len(), "scene", "scenes")),
    );
    Ok(())
}

/// Print diagnostics and a one-line summary to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!(
            "  {}[{}]: {}",
            printer.severity(&d.severity.to_string(), d.is_error()),
            d.code,
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Invalid",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning("Valid", &format!("with {}", plural(warnings, "warning", "warnings")));
    }
}
