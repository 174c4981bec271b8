//! Mode selection for a raw input line.

use tracing::debug;

use crate::types::Styles;

/// Inputs starting with this word (any ASCII case) select region mode.
pub const REGION_PREFIX: &str = "region";

/// A raw input line split into mode and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    /// Label used verbatim
    Header(&'a str),
    /// Label with the prefix stripped and surrounding whitespace trimmed
    Region(&'a str),
}

/// Classify an input line by the region prefix convention.
pub fn parse_request(input: &str) -> Request<'_> {
    // A non-boundary slice means a multibyte char, which cannot match anyway
    match input.get(..REGION_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(REGION_PREFIX) => {
            Request::Region(input[REGION_PREFIX.len()..].trim())
        }
        _ => Request::Header(input),
    }
}

/// Render one input line into its separator lines, top to bottom.
pub fn render(input: &str, styles: &Styles) -> Vec<String> {
    match parse_request(input) {
        Request::Header(label) => {
            debug!(label, "header separator");
            vec![styles.header.render(label)]
        }
        Request::Region(label) => {
            debug!(label, "region separator");
            styles.region.render(label).into_lines()
        }
    }
}
