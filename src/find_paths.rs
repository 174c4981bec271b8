use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Style file picked up from the current directory or any ancestor
pub const STYLE_FILE_NAME: &str = "sepgen.toml";

/// Find the nearest style file, walking up from the current directory
pub fn find_style_file() -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(find_style_file_from(&cwd))
}

/// Find the nearest style file, walking up from `start`
pub fn find_style_file_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(STYLE_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
