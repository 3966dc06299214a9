//! Backup and restore of rule sets as JSON documents.
//!
//! The export format is
//! `{"exported_at": "...", "rules": [{"wrong", "right", "notes", "created_at"}]}`.
//! Imports are lenient about individual entries (bad ones are skipped) but
//! strict about the envelope: a payload that is not a JSON object, or whose
//! `rules` field is not a list, is rejected before the store is touched.
//!
//! License: MIT OR Apache-2.0

use chrono::NaiveDateTime;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CorretorError;
use crate::rule::{now_timestamp, NewRule};
use crate::store::RuleStore;

/// One exported rule. Ids are store-local and therefore not exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRule {
    pub wrong: String,
    pub right: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// A full export of a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBackup {
    pub exported_at: NaiveDateTime,
    pub rules: Vec<BackupRule>,
}

impl RuleBackup {
    pub fn to_pretty_json(&self) -> Result<String, CorretorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Outcome of [`import_rules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Rules added to the store.
    pub imported: usize,
    /// Entries ignored because they were not objects or had blank forms.
    pub skipped: usize,
    /// Rules removed beforehand because `replace_all` was requested.
    pub replaced: usize,
}

/// Snapshots every rule in `store`, in application order.
pub fn export_rules(store: &dyn RuleStore) -> Result<RuleBackup, CorretorError> {
    let rules: Vec<BackupRule> = store
        .list_rules()?
        .into_iter()
        .map(|r| BackupRule {
            wrong: r.wrong,
            right: r.right,
            notes: r.notes,
            created_at: r.created_at,
        })
        .collect();

    debug!("Exporting {} rules.", rules.len());
    Ok(RuleBackup {
        exported_at: now_timestamp(),
        rules,
    })
}

fn string_field(item: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match item.get(key) {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => None,
    }
}

/// Parses a backup entry into a creation request; `None` means "skip it".
fn entry_to_new_rule(item: &Value) -> Option<NewRule> {
    let obj = item.as_object()?;
    let wrong = string_field(obj, "wrong")?;
    let right = string_field(obj, "right")?;
    let notes = string_field(obj, "notes").unwrap_or_default();

    if wrong.is_empty() || right.is_empty() {
        return None;
    }
    Some(NewRule { wrong, right, notes })
}

/// Adds every valid rule from a backup `payload` to `store`.
///
/// Imported rules get fresh ids and creation times; the exported
/// `created_at` values are informational only. A missing `rules` key is an
/// empty import. With `replace_all`, the store is cleared once the envelope
/// has been validated.
pub fn import_rules(
    store: &mut dyn RuleStore,
    payload: &str,
    replace_all: bool,
) -> Result<ImportReport, CorretorError> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(CorretorError::EmptyImport);
    }

    let document: Value = serde_json::from_str(payload)
        .map_err(|e| CorretorError::InvalidBackup(e.to_string()))?;
    let envelope = document
        .as_object()
        .ok_or_else(|| CorretorError::InvalidBackup("expected a JSON object".to_string()))?;

    let empty = Vec::new();
    let entries = match envelope.get("rules") {
        None => &empty,
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(CorretorError::InvalidBackup(
                "the `rules` field is not a list".to_string(),
            ))
        }
    };

    let mut report = ImportReport::default();
    if replace_all {
        report.replaced = store.clear_rules()?;
    }

    for (index, item) in entries.iter().enumerate() {
        match entry_to_new_rule(item) {
            Some(new_rule) => {
                store.add_rule(new_rule)?;
                report.imported += 1;
            }
            None => {
                warn!("Skipping backup entry #{}: not a rule with non-empty forms.", index);
                report.skipped += 1;
            }
        }
    }

    info!(
        "Import finished: {} imported, {} skipped, {} replaced.",
        report.imported, report.skipped, report.replaced
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRuleStore;

    fn seeded() -> MemoryRuleStore {
        MemoryRuleStore::with_rules(vec![
            NewRule::new("vai", "vou").with_notes("1ª pessoa"),
            NewRule::new("nós vai", "nós vamos"),
        ])
        .unwrap()
    }

    #[test]
    fn export_follows_store_order() {
        let backup = export_rules(&seeded()).unwrap();
        assert_eq!(backup.rules.len(), 2);
        assert_eq!(backup.rules[0].wrong, "nós vai");
        assert_eq!(backup.rules[1].notes, "1ª pessoa");
    }

    #[test]
    fn export_then_import_copies_rules() {
        let json = export_rules(&seeded()).unwrap().to_pretty_json().unwrap();
        let mut target = MemoryRuleStore::new();
        let report = import_rules(&mut target, &json, false).unwrap();
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 0);

        let wrongs: Vec<String> =
            target.list_rules().unwrap().into_iter().map(|r| r.wrong).collect();
        assert_eq!(wrongs, vec!["nós vai", "vai"]);
    }

    #[test]
    fn empty_payload_is_an_error() {
        let mut store = MemoryRuleStore::new();
        assert!(matches!(
            import_rules(&mut store, "   \n", false),
            Err(CorretorError::EmptyImport)
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let mut store = MemoryRuleStore::new();
        assert!(matches!(
            import_rules(&mut store, "{not json", false),
            Err(CorretorError::InvalidBackup(_))
        ));
        assert!(matches!(
            import_rules(&mut store, "[1, 2]", false),
            Err(CorretorError::InvalidBackup(_))
        ));
    }

    #[test]
    fn non_list_rules_leaves_store_untouched() {
        let mut store = seeded();
        let result = import_rules(&mut store, r#"{"rules": {"wrong": "x"}}"#, true);
        assert!(matches!(result, Err(CorretorError::InvalidBackup(_))));
        assert_eq!(store.list_rules().unwrap().len(), 2);
    }

    #[test]
    fn missing_rules_key_imports_nothing() {
        let mut store = MemoryRuleStore::new();
        let payload = r#"{"exported_at": "2024-01-01T00:00:00"}"#;
        let report = import_rules(&mut store, payload, false).unwrap();
        assert_eq!(report, ImportReport::default());
    }

    #[test]
    fn bad_entries_are_skipped() {
        let payload = r#"{"rules": [
            {"wrong": " eles foi ", "right": "eles foram", "notes": null},
            {"wrong": "", "right": "x"},
            {"wrong": "a", "right": "   "},
            "not an object",
            {"wrong": 3, "right": "três"},
            {"right": "sem errado"}
        ]}"#;
        let mut store = MemoryRuleStore::new();
        let report = import_rules(&mut store, payload, false).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 5);

        let rules = store.list_rules().unwrap();
        assert_eq!(rules[0].wrong, "eles foi");
        assert_eq!(rules[0].notes, "");
    }

    #[test]
    fn replace_all_clears_first() {
        let mut store = seeded();
        let payload = r#"{"rules": [{"wrong": "foi", "right": "foram"}]}"#;
        let report = import_rules(&mut store, payload, true).unwrap();
        assert_eq!(report.replaced, 2);
        assert_eq!(report.imported, 1);
        assert_eq!(store.list_rules().unwrap().len(), 1);
    }

    #[test]
    fn import_without_replace_appends() {
        let mut store = seeded();
        let payload = r#"{"rules": [{"wrong": "vai", "right": "vou"}]}"#;
        import_rules(&mut store, payload, false).unwrap();
        assert_eq!(store.list_rules().unwrap().len(), 3);
    }
}
