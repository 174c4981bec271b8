use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::find_paths::find_style_file;
use crate::types::Styles;

/// Where the effective styles came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::Builtin => write!(f, "built-in defaults"),
            StyleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Styles together with their source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyles {
    pub styles: Styles,
    pub source: StyleSource,
}

/// Load styles from a TOML file
pub fn load_styles(path: &Path) -> Result<Styles> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read style file: {}", path.display()))?;
    parse_styles(&content).with_context(|| format!("invalid style file: {}", path.display()))
}

/// Parse styles from a TOML string
pub fn parse_styles(toml_str: &str) -> Result<Styles> {
    toml::from_str(toml_str).context("failed to parse style TOML")
}

/// Serialize styles to a TOML string
pub fn serialize_styles(styles: &Styles) -> Result<String> {
    toml::to_string(styles).context("failed to serialize styles")
}

/// Pick the effective styles: an explicit file, else the nearest
/// `sepgen.toml`, else the built-in defaults.
pub fn resolve_styles(explicit: Option<&Path>) -> Result<ResolvedStyles> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_style_file()?,
    };

    match path {
        Some(path) => {
            let styles = load_styles(&path)?;
            info!(path = %path.display(), "loaded style file");
            Ok(ResolvedStyles {
                styles,
                source: StyleSource::File(path),
            })
        }
        None => {
            info!("no style file, using built-in defaults");
            Ok(ResolvedStyles {
                styles: Styles::default(),
                source: StyleSource::Builtin,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeaderStyle, RegionBranch, RegionStyle};

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(parse_styles("").unwrap(), Styles::default());
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let styles = parse_styles("[header]\nwidth = 80\n").unwrap();
        assert_eq!(styles.header.width, 80);
        assert_eq!(styles.header.begin, HeaderStyle::default().begin);
        assert_eq!(styles.region, RegionStyle::default());
    }

    #[test]
    fn branch_parses_kebab_case() {
        let styles = parse_styles("[region]\nbranch = \"label\"\n").unwrap();
        assert_eq!(styles.region.branch, RegionBranch::Label);
        let styles = parse_styles("[region]\nbranch = \"dash-count\"\n").unwrap();
        assert_eq!(styles.region.branch, RegionBranch::DashCount);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_styles("[header]\nbegn = \"#\"\n").is_err());
        assert!(parse_styles("[footer]\n").is_err());
    }

    #[test]
    fn unknown_branch_is_rejected() {
        assert!(parse_styles("[region]\nbranch = \"sometimes\"\n").is_err());
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = serialize_styles(&Styles::default()).unwrap();
        assert!(text.contains("[header]"));
        assert!(text.contains("branch = \"dash-count\""));
        assert_eq!(parse_styles(&text).unwrap(), Styles::default());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = resolve_styles(Some(Path::new("/nonexistent/sepgen.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read style file"));
    }

    #[test]
    fn source_display() {
        assert_eq!(StyleSource::Builtin.to_string(), "built-in defaults");
        assert_eq!(
            StyleSource::File(PathBuf::from("x/sepgen.toml")).to_string(),
            "x/sepgen.toml"
        );
    }
}
