use tracing::warn;

use crate::fill::{base_fill, char_len, dashes};
use crate::types::RegionBranch;

/// Marker placed before `end` on the closing line of a region
pub const END_MARKER: &str = " END ";

/// Opening and closing lines of a region separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLines {
    pub top: String,
    pub end: String,
}

impl RegionLines {
    pub fn into_lines(self) -> Vec<String> {
        vec![self.top, self.end]
    }
}

/// Build the opening and closing lines of a region separator.
///
/// Both lines share one prefix (`begin`, then ` label ` unless the branch
/// policy leaves it out). The closing line gives up `len(END_MARKER)` dashes
/// to make room for [`END_MARKER`] before `end`.
///
/// With [`RegionBranch::DashCount`] the label is left out only when the
/// unadjusted top fill is exactly zero, whether or not a label was given.
/// An empty label otherwise still produces its two spaces.
pub fn region_separator(
    label: &str,
    begin: &str,
    end: &str,
    max_width: usize,
    branch: RegionBranch,
) -> RegionLines {
    let mut top_fill = base_fill(max_width, begin, end, 1);
    let mut end_fill = base_fill(max_width, begin, end, char_len(END_MARKER) + 1);

    let bare = match branch {
        RegionBranch::DashCount => top_fill == 0,
        RegionBranch::Label => label.is_empty(),
    };

    let mut prefix = String::from(begin);
    if bare {
        if !label.is_empty() {
            warn!(label, max_width, "region label dropped: no room left for fill");
        }
    } else {
        let taken = char_len(label) + 2;
        top_fill -= taken;
        end_fill -= taken;
        prefix.push(' ');
        prefix.push_str(label);
        prefix.push(' ');
    }

    RegionLines {
        top: format!("{prefix}{}{end}", dashes(top_fill)),
        end: format!("{prefix}{}{END_MARKER}{end}", dashes(end_fill)),
    }
}
