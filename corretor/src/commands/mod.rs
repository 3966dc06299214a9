//! Command implementations and the top-level dispatcher.

pub mod backup;
pub mod correct;
pub mod rules;

use anyhow::Result;
use log::info;

use corretor_core::JsonRuleStore;

use crate::cli::{Cli, Commands};
use crate::settings::resolve_rules_path;
use crate::ui::OutputStyle;

/// Runs the parsed command line against the configured rules file.
pub fn dispatch(cli: Cli, style: &OutputStyle) -> Result<()> {
    let path = resolve_rules_path(cli.rules_file);
    let mut store = JsonRuleStore::new(path);
    info!("Rules file: {}", store.path().display());

    match cli.command {
        Commands::Correct(cmd) => correct::run_correct(&store, &cmd, style),
        Commands::Rules(cmd) => rules::run_rules(&mut store, cmd, style),
        Commands::Export(cmd) => backup::run_export(&store, &cmd, style),
        Commands::Import(cmd) => backup::run_import(&mut store, &cmd, style),
    }
}
