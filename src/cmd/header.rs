use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::{Execute, print_blocks};
use crate::styles::ResolvedStyles;

/// Print one header separator
#[derive(Args)]
pub struct HeaderCmd {
    /// Label placed after the opening delimiter (omit for a plain rule)
    pub label: Option<String>,
}

impl Execute for HeaderCmd {
    fn execute(&self, resolved: &ResolvedStyles) -> Result<ExitCode> {
        let label = self.label.as_deref().unwrap_or_default();
        print_blocks(&[resolved.styles.header.render(label)])
    }
}
