// corretor-core/src/headless.rs
//! Convenience wrappers for one-shot corrections without managing an engine.

use anyhow::{Context, Result};

use crate::change::CorrectionResult;
use crate::engine::CorrectionEngine;
use crate::engines::rule_engine::RuleEngine;
use crate::store::RuleStore;

/// Reads the current rule snapshot from `store` once and corrects `text` with it.
///
/// Only the store read can fail; the correction itself always succeeds.
pub fn headless_correct(store: &dyn RuleStore, text: &str) -> Result<CorrectionResult> {
    let rules = store
        .list_rules()
        .context("Failed to read rules from the store")?;
    let engine = RuleEngine::new(rules);
    Ok(engine.correct(text))
}
