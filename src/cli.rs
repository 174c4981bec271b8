use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cmd::{HeaderCmd, InteractiveCmd, LineCmd, RegionCmd, StylesCmd, VersionCmd};

#[derive(Parser)]
#[command(name = "sepgen")]
#[command(about = "Generate decorative comment separators")]
pub struct Cli {
    /// Style file (defaults to the nearest sepgen.toml, then built-in styles)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one header separator
    Header(HeaderCmd),
    /// Print a region separator pair
    Region(RegionCmd),
    /// Print separators for one raw input, "region ..." selecting region mode
    Line(LineCmd),
    /// Prompt for labels until end of input (default)
    Interactive(InteractiveCmd),
    /// Print the effective styles as TOML
    Styles(StylesCmd),
    /// Print version information
    Version(VersionCmd),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Interactive(InteractiveCmd::default())
    }
}
