// corretor-core/src/engines/rule_engine.rs
//! A `CorrectionEngine` that applies literal "wrong → right" rules one after
//! another, each rule seeing the text as already rewritten by the previous ones.
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use std::sync::Arc;

use crate::case::apply_case_like;
use crate::change::{log_change_debug, ChangeRecord, CorrectionResult};
use crate::compiler::{get_or_compile_rules, CompiledRule, CompiledRules};
use crate::engine::CorrectionEngine;
use crate::rule::{is_ordered, sort_rules, Rule};

#[derive(Debug)]
pub struct RuleEngine {
    rules: Vec<Rule>,
    compiled_rules: Arc<CompiledRules>,
}

impl RuleEngine {
    /// Builds an engine over a rule snapshot.
    ///
    /// The snapshot is put into application order if the caller did not
    /// already do so.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        if !is_ordered(&rules) {
            debug!("Rule snapshot not in application order; sorting {} rules.", rules.len());
            sort_rules(&mut rules);
        }
        let compiled_rules = get_or_compile_rules(&rules);
        Self {
            rules,
            compiled_rules,
        }
    }

    /// Rewrites `text` with a single rule, appending one record per match.
    fn apply_rule(
        compiled: &CompiledRule,
        text: &str,
        changes: &mut Vec<ChangeRecord>,
    ) -> Option<String> {
        let matches = compiled.find_matches(text);
        if matches.is_empty() {
            return None;
        }

        let mut out = String::with_capacity(text.len());
        let mut last_end = 0;

        for m in &matches {
            let replacement = apply_case_like(m.as_str(), &compiled.right);
            log_change_debug(module_path!(), compiled.rule_id, m.as_str(), &replacement);

            out.push_str(&text[last_end..m.start()]);
            out.push_str(&replacement);
            last_end = m.end();

            changes.push(ChangeRecord::new(m.as_str(), replacement));
        }
        out.push_str(&text[last_end..]);

        trace!(
            "Rule {} ({:?}) replaced {} occurrence(s).",
            compiled.rule_id,
            compiled.kind,
            matches.len()
        );
        Some(out)
    }
}

impl CorrectionEngine for RuleEngine {
    fn correct(&self, text: &str) -> CorrectionResult {
        if text.is_empty() || self.compiled_rules.rules.is_empty() {
            return CorrectionResult::unchanged(text);
        }

        let mut corrected = text.to_string();
        let mut changes = Vec::new();

        for compiled in &self.compiled_rules.rules {
            if let Some(next) = Self::apply_rule(compiled, &corrected, &mut changes) {
                corrected = next;
            }
        }

        debug!(
            "Correction pass finished: {} rule(s), {} change(s).",
            self.compiled_rules.rules.len(),
            changes.len()
        );

        CorrectionResult {
            corrected_text: corrected,
            changes,
        }
    }

    fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}
