//! The `rules` subcommands: add, list, delete, clear and seed.

use anyhow::{Context, Result};
use std::io::{self, Write};

use corretor_core::{NewRule, RuleSeed, RuleStore};

use crate::cli::RulesCommand;
use crate::errors::CliError;
use crate::ui::{rule_table, OutputStyle};

pub fn run_rules(store: &mut dyn RuleStore, cmd: RulesCommand, style: &OutputStyle) -> Result<()> {
    match cmd {
        RulesCommand::Add { wrong, right, notes } => {
            let rule = store
                .add_rule(NewRule { wrong, right, notes })
                .context("Failed to add rule")?;
            style.info(format!("Added rule {}: {} → {}", rule.id, rule.wrong, rule.right));
            println!("{}", rule.id);
        }
        RulesCommand::List { json } => {
            let rules = store.list_rules().context("Failed to load rules")?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &rules)?;
                writeln!(out)?;
            } else if rules.is_empty() {
                style.info("No rules yet. Add one with `corretor rules add WRONG RIGHT`.");
            } else {
                writeln!(out, "{}", rule_table::render_rules(&rules))?;
                style.info(format!("Total rules: {}", rules.len()));
            }
        }
        RulesCommand::Delete { id } => {
            if !store.delete_rule(id).context("Failed to delete rule")? {
                return Err(CliError::RuleNotFound(id).into());
            }
            style.info(format!("Deleted rule {}.", id));
        }
        RulesCommand::Clear { yes } => {
            if !yes {
                return Err(CliError::ConfirmationRequired.into());
            }
            let removed = store.clear_rules().context("Failed to clear rules")?;
            style.info(format!("Deleted {} rule(s).", removed));
        }
        RulesCommand::Seed { path } => {
            let seed = RuleSeed::load_from_file(&path)?;
            let added = seed.apply(store)?;
            style.info(format!("Added {} rule(s) from {}.", added, path.display()));
        }
    }
    Ok(())
}
