//! Interactive prompt loop: read a label, print its separators, repeat.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::dispatch::render;
use crate::emit::write_blocks;
use crate::types::Styles;

pub const PROMPT: &str = "Insert label name: ";

/// When a session stops, besides running out of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// An input line equal to this ends the session without rendering
    pub quit_word: Option<String>,
    /// Stop after this many rendered inputs
    pub max_count: Option<usize>,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    EndOfInput,
    QuitWord,
    CountReached,
}

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rendered: usize,
    pub stop: Stop,
}

/// Prompt on `output`, read labels from `input`, and write the separators
/// for each until `policy` or end of input stops the loop.
pub fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    styles: &Styles,
    policy: &Policy,
) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut rendered = 0;
    let mut buf = String::new();

    let stop = loop {
        if policy.max_count.is_some_and(|max| rendered >= max) {
            break Stop::CountReached;
        }

        output
            .write_all(PROMPT.as_bytes())
            .and_then(|()| output.flush())
            .context("failed to write prompt")?;

        buf.clear();
        let n = input.read_line(&mut buf).context("failed to read label")?;
        if n == 0 {
            // leave the terminal on a fresh line after the dangling prompt
            writeln!(output).context("failed to write output")?;
            break Stop::EndOfInput;
        }

        let label = strip_line_ending(&buf);
        if policy.quit_word.as_deref() == Some(label) {
            break Stop::QuitWord;
        }

        write_blocks(output, &render(label, styles)).context("failed to write separator")?;
        rendered += 1;
    };

    info!(rendered, ?stop, "session finished");
    Ok(Summary { rendered, stop })
}

fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, policy: &Policy) -> (String, Summary) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let summary = run_session(&mut reader, &mut out, &Styles::default(), policy).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn stops_at_end_of_input() {
        let (out, summary) = run("TEST\n", &Policy::default());
        assert_eq!(
            summary,
            Summary {
                rendered: 1,
                stop: Stop::EndOfInput
            }
        );
        let header = Styles::default().header.render("TEST");
        assert_eq!(out, format!("{PROMPT}\n{header}\n\n{PROMPT}\n"));
    }

    #[test]
    fn empty_input_only_prompts() {
        let (out, summary) = run("", &Policy::default());
        assert_eq!(summary.rendered, 0);
        assert_eq!(out, format!("{PROMPT}\n"));
    }

    #[test]
    fn last_line_without_newline_is_rendered() {
        let (out, summary) = run("region foo", &Policy::default());
        assert_eq!(summary.rendered, 1);
        let lines = Styles::default().region.render("foo");
        assert!(out.contains(&lines.top));
        assert!(out.contains(&lines.end));
    }

    #[test]
    fn crlf_is_stripped() {
        let (out, _) = run("TEST\r\n", &Policy::default());
        assert!(out.contains(&Styles::default().header.render("TEST")));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn blank_line_renders_empty_header() {
        let (out, summary) = run("\n", &Policy::default());
        assert_eq!(summary.rendered, 1);
        assert!(out.contains(&Styles::default().header.render("")));
    }

    #[test]
    fn quit_word_stops_without_rendering() {
        let policy = Policy {
            quit_word: Some("q".to_string()),
            ..Policy::default()
        };
        let (out, summary) = run("one\nq\ntwo\n", &policy);
        assert_eq!(summary.stop, Stop::QuitWord);
        assert_eq!(summary.rendered, 1);
        assert!(!out.contains(" two "));
    }

    #[test]
    fn count_caps_rendered_inputs() {
        let policy = Policy {
            max_count: Some(2),
            ..Policy::default()
        };
        let (out, summary) = run("a\nb\nc\n", &policy);
        assert_eq!(summary.stop, Stop::CountReached);
        assert_eq!(summary.rendered, 2);
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn zero_count_never_prompts() {
        let policy = Policy {
            max_count: Some(0),
            ..Policy::default()
        };
        let (out, summary) = run("a\n", &policy);
        assert_eq!(summary.stop, Stop::CountReached);
        assert!(out.is_empty());
    }

    #[test]
    fn strip_line_ending_only_removes_terminator() {
        assert_eq!(strip_line_ending("  x  \n"), "  x  ");
        assert_eq!(strip_line_ending("x\r\n"), "x");
        assert_eq!(strip_line_ending("x"), "x");
    }
}
