//! Rule storage.
//!
//! The correction engine only needs an ordered snapshot of rules; this module
//! defines the [`RuleStore`] contract that supplies it, plus two
//! implementations: an in-memory store and a JSON file store.
//!
//! Every store returns rules in application order (see [`crate::rule::sort_rules`]).
//!
//! License: MIT OR Apache-2.0

use fs2::FileExt;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::CorretorError;
use crate::rule::{now_timestamp, sort_rules, NewRule, Rule};

/// File name used when no explicit rules file is configured.
pub const DEFAULT_RULES_FILE_NAME: &str = "regras.json";

/// Persistence contract for correction rules.
pub trait RuleStore {
    /// All rules, longest `wrong` first, newest first on ties.
    fn list_rules(&self) -> Result<Vec<Rule>, CorretorError>;

    /// Trims and validates `new_rule`, then stores it under a fresh id.
    fn add_rule(&mut self, new_rule: NewRule) -> Result<Rule, CorretorError>;

    /// Returns `false` when no rule has this id.
    fn delete_rule(&mut self, id: u64) -> Result<bool, CorretorError>;

    /// Removes every rule and returns how many were removed. Ids are not reused.
    fn clear_rules(&mut self) -> Result<usize, CorretorError>;
}

/// The state shared by both stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
struct RuleTable {
    next_id: u64,
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            rules: Vec::new(),
        }
    }
}

impl RuleTable {
    fn ordered(&self) -> Vec<Rule> {
        let mut rules = self.rules.clone();
        sort_rules(&mut rules);
        rules
    }

    fn insert(&mut self, new_rule: NewRule) -> Result<Rule, CorretorError> {
        let normalized = new_rule.normalized()?;
        let exhausted = || CorretorError::StoreError("rule ids exhausted".to_string());
        let max_existing = self.rules.iter().map(|r| r.id).max().unwrap_or(0);
        let id = self
            .next_id
            .max(max_existing.checked_add(1).ok_or_else(exhausted)?);
        self.next_id = id.checked_add(1).ok_or_else(exhausted)?;

        let rule = normalized.into_rule(id, now_timestamp());
        self.rules.push(rule.clone());
        Ok(rule)
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.id != id);
        before != self.rules.len()
    }

    fn clear(&mut self) -> usize {
        let removed = self.rules.len();
        self.rules.clear();
        removed
    }
}

/// Rules held in process memory. Used for tests and one-shot runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryRuleStore {
    table: RuleTable,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `rules`, added in the given order.
    pub fn with_rules<I>(rules: I) -> Result<Self, CorretorError>
    where
        I: IntoIterator<Item = NewRule>,
    {
        let mut store = Self::new();
        for rule in rules {
            store.add_rule(rule)?;
        }
        Ok(store)
    }
}

impl RuleStore for MemoryRuleStore {
    fn list_rules(&self) -> Result<Vec<Rule>, CorretorError> {
        Ok(self.table.ordered())
    }

    fn add_rule(&mut self, new_rule: NewRule) -> Result<Rule, CorretorError> {
        self.table.insert(new_rule)
    }

    fn delete_rule(&mut self, id: u64) -> Result<bool, CorretorError> {
        Ok(self.table.remove(id))
    }

    fn clear_rules(&mut self) -> Result<usize, CorretorError> {
        Ok(self.table.clear())
    }
}

/// Rules persisted as a JSON document on disk.
///
/// Every operation re-reads the file, so several processes can share it.
/// Mutations hold an exclusive lock on a sidecar `.lock` file for the whole
/// read-modify-write and replace the file atomically (temp file + rename).
#[derive(Debug, Clone)]
pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/corretor/regras.json`, or `./regras.json` when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("corretor").join(DEFAULT_RULES_FILE_NAME),
            None => PathBuf::from(DEFAULT_RULES_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn with_lock<T>(
        &self,
        exclusive: bool,
        op: impl FnOnce() -> Result<T, CorretorError>,
    ) -> Result<T, CorretorError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;

        if exclusive {
            FileExt::lock_exclusive(&lock_file)?;
        } else {
            FileExt::lock_shared(&lock_file)?;
        }
        let result = op();
        FileExt::unlock(&lock_file)?;
        result
    }

    fn load_table(&self) -> Result<RuleTable, CorretorError> {
        if !self.path.exists() {
            debug!("No rules file at {:?}, starting with empty store", self.path);
            return Ok(RuleTable::default());
        }

        let mut raw = String::new();
        File::open(&self.path)?.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Ok(RuleTable::default());
        }

        let table: RuleTable = serde_json::from_str(&raw).map_err(|e| {
            CorretorError::StoreError(format!(
                "failed to parse rules file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!("Loaded {} rules from {:?}", table.rules.len(), self.path);
        Ok(table)
    }

    fn save_table(&self, table: &RuleTable) -> Result<(), CorretorError> {
        let content = serde_json::to_vec_pretty(table)?;
        let tmp_path = self.path.with_extension("json.tmp");

        {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(&content)?;
            tmp.sync_all()?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CorretorError::StoreError(format!(
                "failed to replace rules file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Persisted {} rules to {:?}", table.rules.len(), self.path);
        Ok(())
    }

    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut RuleTable) -> Result<T, CorretorError>,
    ) -> Result<T, CorretorError> {
        self.with_lock(true, || {
            let mut table = self.load_table()?;
            let out = op(&mut table)?;
            self.save_table(&table)?;
            Ok(out)
        })
    }
}

impl RuleStore for JsonRuleStore {
    fn list_rules(&self) -> Result<Vec<Rule>, CorretorError> {
        // Reading must not create the data directory or the lock file.
        if !self.path.exists() {
            debug!("No rules file at {:?}, nothing to list", self.path);
            return Ok(Vec::new());
        }
        self.with_lock(false, || Ok(self.load_table()?.ordered()))
    }

    fn add_rule(&mut self, new_rule: NewRule) -> Result<Rule, CorretorError> {
        let rule = self.mutate(|table| table.insert(new_rule))?;
        info!("Added rule {} to {}", rule.id, self.path.display());
        Ok(rule)
    }

    fn delete_rule(&mut self, id: u64) -> Result<bool, CorretorError> {
        self.mutate(|table| Ok(table.remove(id)))
    }

    fn clear_rules(&mut self) -> Result<usize, CorretorError> {
        let removed = self.mutate(|table| Ok(table.clear()))?;
        info!("Cleared {} rules from {}", removed, self.path.display());
        Ok(removed)
    }
}
