//! Unified diff between the original and the corrected text.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a line-oriented diff. Removed lines are prefixed `-`, added `+`.
pub fn print_diff<W: Write>(
    original: &str,
    corrected: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, corrected);

    if patch.hunks().is_empty() {
        return writeln!(writer, "No changes.");
    }

    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    let text = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("- {}", text).red())?;
                    } else {
                        writeln!(writer, "- {}", text)?;
                    }
                }
                DiffLine::Insert(s) => {
                    let text = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("+ {}", text).green())?;
                    } else {
                        writeln!(writer, "+ {}", text)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }
    Ok(())
}
