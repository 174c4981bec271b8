use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::Execute;
use crate::styles::ResolvedStyles;

/// Print version information
#[derive(Args)]
pub struct VersionCmd;

impl Execute for VersionCmd {
    fn execute(&self, _resolved: &ResolvedStyles) -> Result<ExitCode> {
        println!("sepgen {}", env!("CARGO_PKG_VERSION"));
        Ok(ExitCode::SUCCESS)
    }
}
