//! The "changes found" summary printed after a correction.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use corretor_core::ChangeRecord;

pub fn print_summary<W: Write>(
    changes: &[ChangeRecord],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let header = format!("Changes found ({})", changes.len());
    if supports_color {
        writeln!(writer, "\n{}", header.bold())?;
    } else {
        writeln!(writer, "\n{}", header)?;
    }

    if changes.is_empty() {
        writeln!(writer, "  No rule matched this text.")?;
        return Ok(());
    }

    for change in changes {
        if supports_color {
            writeln!(writer, "  {} → {}", change.original.red(), change.replacement.green())?;
        } else {
            writeln!(writer, "  {} → {}", change.original, change.replacement)?;
        }
    }
    Ok(())
}
