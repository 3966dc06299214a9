//! The `export` and `import` commands.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use corretor_core::{export_rules, import_rules, RuleStore};

use crate::cli::{ExportCommand, ImportCommand};
use crate::ui::OutputStyle;

/// File name used when `export -o` points at a directory.
pub const BACKUP_FILE_NAME: &str = "regras-backup.json";

/// Resolves `export -o`: a directory gets [`BACKUP_FILE_NAME`] inside it.
fn backup_target(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(BACKUP_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

pub fn run_export(store: &dyn RuleStore, cmd: &ExportCommand, style: &OutputStyle) -> Result<()> {
    let backup = export_rules(store).context("Failed to export rules")?;
    let json = backup.to_pretty_json()?;

    match cmd.output.as_deref().map(backup_target) {
        Some(path) => {
            fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write backup to {}", path.display()))?;
            style.info(format!(
                "Exported {} rule(s) to {}.",
                backup.rules.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn run_import(
    store: &mut dyn RuleStore,
    cmd: &ImportCommand,
    style: &OutputStyle,
) -> Result<()> {
    let payload = match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read backup file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read backup from stdin")?;
            buf
        }
    };

    let report = import_rules(store, &payload, cmd.replace_all).context("Import failed")?;

    if report.replaced > 0 {
        style.info(format!("Removed {} existing rule(s).", report.replaced));
    }
    if report.skipped > 0 {
        style.warn(format!("Skipped {} invalid backup entries.", report.skipped));
    }
    style.info(format!("Import finished: {} rule(s) added.", report.imported));
    Ok(())
}
