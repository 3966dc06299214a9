//! YAML seed files for adding many rules at once.
//!
//! ```yaml
//! rules:
//!   - wrong: nós vai
//!     right: nós vamos
//!     notes: 1ª pessoa do plural
//!   - wrong: eles foi
//!     right: eles foram
//! ```
//!
//! Unlike backup imports, seeds are validated as a whole: one bad entry
//! rejects the file and nothing is added.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::rule::NewRule;
use crate::store::RuleStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleSeed {
    #[serde(default)]
    pub rules: Vec<NewRule>,
}

impl RuleSeed {
    /// Loads and validates a seed file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rule seed from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?;
        info!("Loaded {} rules from seed {}.", seed.rules.len(), path.display());
        Ok(seed)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let seed: RuleSeed = serde_yml::from_str(text).context("Failed to parse YAML")?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reports every invalid entry at once.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .rules
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.normalized().err().map(|e| format!("entry #{}: {}", i + 1, e)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Seed validation failed:\n{}", errors.join("\n")))
        }
    }

    /// Adds every seed rule to `store`, in file order. Returns how many were added.
    pub fn apply(&self, store: &mut dyn RuleStore) -> Result<usize> {
        for rule in &self.rules {
            store
                .add_rule(rule.clone())
                .with_context(|| format!("Failed to add seed rule '{}'", rule.wrong))?;
        }
        debug!("Applied {} seed rules.", self.rules.len());
        Ok(self.rules.len())
    }
}
