//! Terminal rendering helpers: status messages, change summaries, rule
//! tables and diffs. Every writer-based function takes an explicit
//! `supports_color` flag so output can be tested without a terminal.

pub mod change_summary;
pub mod diff_viewer;
pub mod output_format;
pub mod rule_table;

use is_terminal::IsTerminal;
use std::io;

/// Colour decisions for one run.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub stdout_color: bool,
    pub stderr_color: bool,
    pub quiet: bool,
}

impl OutputStyle {
    pub fn detect(no_color: bool, quiet: bool) -> Self {
        Self {
            stdout_color: !no_color && io::stdout().is_terminal(),
            stderr_color: !no_color && io::stderr().is_terminal(),
            quiet,
        }
    }

    /// Plain output, used by tests.
    pub fn plain() -> Self {
        Self {
            stdout_color: false,
            stderr_color: false,
            quiet: false,
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            let _ = output_format::print_info_message(
                &mut io::stderr(),
                msg.as_ref(),
                self.stderr_color,
            );
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        let _ =
            output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), self.stderr_color);
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        let _ =
            output_format::print_error_message(&mut io::stderr(), msg.as_ref(), self.stderr_color);
    }
}
