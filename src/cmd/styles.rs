use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::Execute;
use crate::styles::{ResolvedStyles, serialize_styles};

/// Print the effective styles as TOML
#[derive(Args)]
pub struct StylesCmd;

impl Execute for StylesCmd {
    fn execute(&self, resolved: &ResolvedStyles) -> Result<ExitCode> {
        println!("# source: {}", resolved.source);
        print!("{}", serialize_styles(&resolved.styles)?);
        Ok(ExitCode::SUCCESS)
    }
}
