use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use sepgen::cli::{Cli, Commands};
use sepgen::cmd::Execute;
use sepgen::logging;
use sepgen::styles::resolve_styles;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let resolved = resolve_styles(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Header(cmd) => cmd.execute(&resolved),
        Commands::Region(cmd) => cmd.execute(&resolved),
        Commands::Line(cmd) => cmd.execute(&resolved),
        Commands::Interactive(cmd) => cmd.execute(&resolved),
        Commands::Styles(cmd) => cmd.execute(&resolved),
        Commands::Version(cmd) => cmd.execute(&resolved),
    }
}
