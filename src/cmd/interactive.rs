use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::{Execute, styles_with_branch};
use crate::session::{Policy, run_session};
use crate::styles::ResolvedStyles;

/// Prompt for labels until end of input
#[derive(Args, Default)]
pub struct InteractiveCmd {
    /// Input that ends the session
    #[arg(short, long)]
    pub quit: Option<String>,
    /// Stop after this many inputs
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
    /// Drop the region label spacing only when the label is empty
    #[arg(long)]
    pub label_branch: bool,
}

impl Execute for InteractiveCmd {
    fn execute(&self, resolved: &ResolvedStyles) -> Result<ExitCode> {
        let styles = styles_with_branch(&resolved.styles, self.label_branch);
        let policy = Policy {
            quit_word: self.quit.clone(),
            max_count: self.count,
        };

        let mut input = std::io::stdin().lock();
        let mut output = std::io::stdout().lock();
        run_session(&mut input, &mut output, &styles, &policy)?;
        Ok(ExitCode::SUCCESS)
    }
}
