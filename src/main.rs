use clap::Parser;
use miette::Result;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use venn::cli::{Cli, Commands};
use venn::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let config = ConfigBuilder::new().add_filter_allow_str("venn").build();
        TermLogger::init(LevelFilter::Debug, config, TerminalMode::Stderr, ColorChoice::Auto).ok();
    }

    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => venn::cli::render::run(args, &printer)?,
        Commands::Validate(args) => venn::cli::validate::run(args, &printer)?,
        Commands::Init(args) => venn::cli::init::run(args, &printer)?,
    }

    Ok(())
}
