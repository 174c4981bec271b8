use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::{Execute, print_blocks, styles_with_branch};
use crate::dispatch::render;
use crate::styles::ResolvedStyles;

/// Print separators for one raw input line
#[derive(Args)]
pub struct LineCmd {
    /// Input as typed at the prompt, e.g. "region Helpers"
    pub input: String,
    /// Drop the region label spacing only when the label is empty
    #[arg(long)]
    pub label_branch: bool,
}

impl Execute for LineCmd {
    fn execute(&self, resolved: &ResolvedStyles) -> Result<ExitCode> {
        let styles = styles_with_branch(&resolved.styles, self.label_branch);
        print_blocks(&render(&self.input, &styles))
    }
}
