// corretor/src/cli.rs
//! Command-line interface definition for the corretor application.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::RULES_FILE_ENV;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "corretor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Apply a group's wrong → right correction rules to text",
    long_about = "corretor keeps a shared list of \"wrong → right\" substitution rules and applies every matching rule to a sentence, preserving the capitalisation of what it replaces and reporting each substitution it made.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress informational messages and logging.
    #[arg(
        long,
        short = 'q',
        global = true,
        help = "Suppress all informational and debug messages."
    )]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Never colour output, even on a terminal.
    #[arg(long = "no-color", global = true, help = "Disable coloured output.")]
    pub no_color: bool,

    /// JSON file holding the rules.
    #[arg(
        long = "rules-file",
        value_name = "FILE",
        env = RULES_FILE_ENV,
        global = true,
        help = "Path to the JSON rules file (defaults to the user data directory)."
    )]
    pub rules_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Applies all rules to a text and reports every change.
    #[command(about = "Correct a text using the stored rules.")]
    Correct(CorrectCommand),

    /// Manages the stored rules.
    #[command(subcommand, about = "Add, list, delete or seed rules.")]
    Rules(RulesCommand),

    /// Writes a JSON backup of every rule.
    #[command(about = "Export all rules as a JSON backup.")]
    Export(ExportCommand),

    /// Restores rules from a JSON backup.
    #[command(about = "Import rules from a JSON backup.")]
    Import(ImportCommand),
}

/// Arguments for the `correct` command.
#[derive(Args, Debug)]
pub struct CorrectCommand {
    /// Text to correct. Reads the input file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    #[arg(
        long,
        short = 'i',
        value_name = "FILE",
        conflicts_with = "text",
        help = "Read input from a file instead of stdin."
    )]
    pub input_file: Option<PathBuf>,

    #[arg(long, help = "Print {\"input\", \"corrected\", \"changes\"} as JSON.")]
    pub json: bool,

    #[arg(long, short = 'D', conflicts_with = "json", help = "Show a unified diff of the changes.")]
    pub diff: bool,

    #[arg(long = "no-summary", help = "Do not print the list of changes.")]
    pub no_summary: bool,

    #[arg(
        long = "line-buffered",
        conflicts_with_all = ["text", "input_file", "json", "diff"],
        help = "Correct stdin line by line, flushing each line."
    )]
    pub line_buffered: bool,
}

/// Subcommands for `rules`.
#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    #[command(about = "Add a new rule.")]
    Add {
        /// The erroneous form, e.g. "nós vai".
        #[arg(value_name = "WRONG")]
        wrong: String,
        /// The corrected form, e.g. "nós vamos".
        #[arg(value_name = "RIGHT")]
        right: String,
        /// Why the correction applies.
        #[arg(long, short = 'n', value_name = "TEXT", default_value = "")]
        notes: String,
    },
    #[command(about = "List rules in the order they are applied.")]
    List {
        #[arg(long, help = "Print the rules as JSON.")]
        json: bool,
    },
    #[command(about = "Delete a rule by id.")]
    Delete {
        #[arg(value_name = "ID")]
        id: u64,
    },
    #[command(about = "Delete every rule.")]
    Clear {
        #[arg(long, short = 'y', help = "Confirm deleting all rules.")]
        yes: bool,
    },
    #[command(about = "Add every rule from a YAML seed file.")]
    Seed {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

/// Arguments for `export`.
#[derive(Args, Debug)]
pub struct ExportCommand {
    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        help = "Write the backup to a file, or to regras-backup.json inside a directory."
    )]
    pub output: Option<PathBuf>,
}

/// Arguments for `import`.
#[derive(Args, Debug)]
pub struct ImportCommand {
    #[arg(
        long,
        short = 'i',
        value_name = "FILE",
        help = "Read the backup from a file instead of stdin."
    )]
    pub input_file: Option<PathBuf>,

    #[arg(long = "replace-all", help = "Delete the current rules before importing.")]
    pub replace_all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_rules_add_with_notes() {
        let cli = Cli::try_parse_from([
            "corretor", "rules", "add", "nós vai", "nós vamos", "--notes", "plural",
        ])
        .unwrap();
        match cli.command {
            Commands::Rules(RulesCommand::Add { wrong, right, notes }) => {
                assert_eq!(wrong, "nós vai");
                assert_eq!(right, "nós vamos");
                assert_eq!(notes, "plural");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn json_and_diff_conflict() {
        assert!(Cli::try_parse_from(["corretor", "correct", "x", "--json", "--diff"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["corretor", "correct", "x", "--rules-file", "r.json", "-q"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.rules_file, Some(PathBuf::from("r.json")));
    }
}
