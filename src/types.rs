use serde::{Deserialize, Serialize};

use crate::header::header_separator;
use crate::region::{RegionLines, region_separator};

pub const HEADER_BEGIN: &str = "/* =----";
pub const HEADER_END: &str = "-= */";
pub const HEADER_WIDTH: usize = 69;

pub const REGION_BEGIN: &str = "// +----";
pub const REGION_END: &str = "----+";
pub const REGION_WIDTH: usize = 66;

/// How the region generator decides to leave the label out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionBranch {
    /// Leave the label out only when the unadjusted top fill is exactly zero.
    /// An empty label still gets its surrounding spaces.
    #[default]
    DashCount,

    /// Leave the label out when it is empty.
    Label,
}

/// Delimiters and target width for header lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderStyle {
    pub begin: String,
    pub end: String,
    pub width: usize,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            begin: HEADER_BEGIN.to_string(),
            end: HEADER_END.to_string(),
            width: HEADER_WIDTH,
        }
    }
}

impl HeaderStyle {
    pub fn render(&self, label: &str) -> String {
        header_separator(label, &self.begin, &self.end, self.width)
    }
}

/// Delimiters, target width and branch policy for region line pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegionStyle {
    pub begin: String,
    pub end: String,
    pub width: usize,
    pub branch: RegionBranch,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            begin: REGION_BEGIN.to_string(),
            end: REGION_END.to_string(),
            width: REGION_WIDTH,
            branch: RegionBranch::default(),
        }
    }
}

impl RegionStyle {
    pub fn render(&self, label: &str) -> RegionLines {
        region_separator(label, &self.begin, &self.end, self.width, self.branch)
    }
}

/// Both separator styles, as read from a style file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Styles {
    #[serde(default)]
    pub header: HeaderStyle,
    #[serde(default)]
    pub region: RegionStyle,
}
