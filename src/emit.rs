use std::io::{self, Write};

/// Write `line` with a blank line above and below it.
pub fn write_block<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "\n{line}\n")
}

/// Write each line as its own block, in order.
pub fn write_blocks<W, S>(out: &mut W, lines: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        write_block(out, line.as_ref())?;
    }
    Ok(())
}
