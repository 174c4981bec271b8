use crate::fill::{base_fill, char_len, dashes};

/// Build a single header separator: `begin`, an optional ` label `, a dash
/// run, then `end`.
///
/// The dash run is `max_width - len(begin) - len(end) - 1`, less
/// `len(label) + 2` when a label is present. A run that works out to zero or
/// less is simply left out, so long labels give a line shorter than
/// `max_width` rather than an error.
pub fn header_separator(label: &str, begin: &str, end: &str, max_width: usize) -> String {
    let mut fill = base_fill(max_width, begin, end, 1);
    let mut line = String::from(begin);

    if !label.is_empty() {
        fill -= char_len(label) + 2;
        line.push(' ');
        line.push_str(label);
        line.push(' ');
    }

    line.push_str(&dashes(fill));
    line.push_str(end);
    line
}
