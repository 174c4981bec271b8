mod header;
mod interactive;
mod line;
mod region;
mod styles;
mod version;

pub use header::HeaderCmd;
pub use interactive::InteractiveCmd;
pub use line::LineCmd;
pub use region::RegionCmd;
pub use styles::StylesCmd;
pub use version::VersionCmd;

use anyhow::{Context, Result};
use std::io::Write;
use std::process::ExitCode;

use crate::emit::write_blocks;
use crate::styles::ResolvedStyles;
use crate::types::{RegionBranch, Styles};

/// Trait for command execution.
pub trait Execute {
    fn execute(&self, resolved: &ResolvedStyles) -> Result<ExitCode>;
}

/// Copy of `styles` with the label-keyed region branch forced on if asked.
pub(crate) fn styles_with_branch(styles: &Styles, label_branch: bool) -> Styles {
    let mut styles = styles.clone();
    if label_branch {
        styles.region.branch = RegionBranch::Label;
    }
    styles
}

/// Helper for commands that print separator blocks to stdout.
pub(crate) fn print_blocks<S: AsRef<str>>(lines: &[S]) -> Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    write_blocks(&mut out, lines)
        .and_then(|()| out.flush())
        .context("failed to write to stdout")?;
    Ok(ExitCode::SUCCESS)
}
