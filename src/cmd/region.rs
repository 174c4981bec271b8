use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::{Execute, print_blocks, styles_with_branch};
use crate::styles::ResolvedStyles;

/// Print a region separator pair
#[derive(Args)]
pub struct RegionCmd {
    /// Region name (omit for an unnamed region)
    pub label: Option<String>,
    /// Drop the label spacing only when the label is empty
    #[arg(long)]
    pub label_branch: bool,
}

impl Execute for RegionCmd {
    fn execute(&self, resolved: &ResolvedStyles) -> Result<ExitCode> {
        let styles = styles_with_branch(&resolved.styles, self.label_branch);
        let label = self.label.as_deref().unwrap_or_default();
        print_blocks(&styles.region.render(label).into_lines())
    }
}
