use tracing::debug;

pub const FILL_CHAR: char = '-';

/// Length in chars, signed so fill arithmetic can go negative.
pub fn char_len(s: &str) -> i64 {
    s.chars().count() as i64
}

/// Fill left over once `begin`, `end` and `reserved` extra columns are
/// taken out of `width`. May be zero or negative.
pub fn base_fill(width: usize, begin: &str, end: &str, reserved: i64) -> i64 {
    width as i64 - char_len(begin) - char_len(end) - reserved
}

/// A run of `count` fill chars, or nothing when `count` is not positive.
pub fn dashes(count: i64) -> String {
    match usize::try_from(count) {
        Ok(n) => std::iter::repeat_n(FILL_CHAR, n).collect(),
        Err(_) => {
            debug!(count, "negative fill clamped to zero");
            String::new()
        }
    }
}
