//! compiler.rs - Compiles correction rules into boundary-aware patterns and caches them.
//!
//! Every rule's `wrong` form is escaped and compiled into a case-insensitive
//! regular expression. The `regex` crate has no look-around, so the
//! "not adjacent to a word character" constraint is enforced by
//! [`CompiledRule::find_matches`], which inspects the neighbours of each
//! candidate match.
//!
//! Compiled rule sets are kept in a global cache keyed by a fingerprint of the
//! ordered rule snapshot. Any change to the rules produces a different key.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Match, Regex, RegexBuilder};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::errors::CorretorError;
use crate::rule::Rule;

/// Upper bound on the compiled size of a single rule's regex.
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Number of distinct rule sets kept in the cache before it is flushed.
pub const MAX_CACHED_RULE_SETS: usize = 32;

/// Whether a rule targets a single token or a whitespace-separated phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Word,
    Phrase,
}

impl PatternKind {
    pub fn of(wrong: &str) -> Self {
        if wrong.chars().any(char::is_whitespace) {
            PatternKind::Phrase
        } else {
            PatternKind::Word
        }
    }
}

/// A single rule ready to be applied.
#[derive(Debug)]
pub struct CompiledRule {
    /// Case-insensitive literal pattern for `wrong`.
    pub regex: Regex,
    pub rule_id: u64,
    pub wrong: String,
    /// The stored replacement, before case adjustment.
    pub right: String,
    pub kind: PatternKind,
}

/// The ordered set of compiled rules for one rule snapshot.
#[derive(Debug, Default)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
    /// Rules that were dropped because they could not be compiled.
    pub skipped: usize,
    /// Hex SHA-256 of the snapshot this set was compiled from.
    pub fingerprint: String,
}

lazy_static! {
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<String, Arc<CompiledRules>>> =
        RwLock::new(HashMap::new());
}

/// Word constituents: letters, digits (any script) and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when neither side of `haystack[start..end]` touches a word character.
pub fn is_word_isolated(haystack: &str, start: usize, end: usize) -> bool {
    let before_ok = haystack[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    let after_ok = haystack[end..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

impl CompiledRule {
    /// Finds all non-overlapping, word-isolated matches from left to right.
    ///
    /// A rejected candidate only advances the search by one character, so a
    /// valid match overlapping a rejected one is still found.
    pub fn find_matches<'t>(&self, haystack: &'t str) -> Vec<Match<'t>> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= haystack.len() {
            let Some(m) = self.regex.find_at(haystack, pos) else {
                break;
            };
            if m.is_empty() {
                break;
            }
            if is_word_isolated(haystack, m.start(), m.end()) {
                found.push(m);
                pos = m.end();
            } else {
                let step = haystack[m.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                pos = m.start() + step;
            }
        }

        found
    }
}

/// Compiles one rule. Blank `wrong` forms and regex build failures are errors.
pub fn compile_rule(rule: &Rule) -> Result<CompiledRule, CorretorError> {
    let wrong = rule.wrong.trim();
    if wrong.is_empty() {
        return Err(CorretorError::InvalidRule(format!(
            "rule {} has an empty `wrong` form",
            rule.id
        )));
    }

    let regex = RegexBuilder::new(&regex::escape(wrong))
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| CorretorError::RuleCompilationError(wrong.to_string(), e))?;

    Ok(CompiledRule {
        regex,
        rule_id: rule.id,
        wrong: wrong.to_string(),
        right: rule.right.clone(),
        kind: PatternKind::of(wrong),
    })
}

/// Compiles an ordered rule snapshot, keeping the input order.
///
/// A rule that fails to compile is logged and skipped; it never aborts the set.
pub fn compile_rules(rules: &[Rule]) -> CompiledRules {
    debug!("Starting compilation of {} rules.", rules.len());

    let mut compiled = Vec::with_capacity(rules.len());
    let mut skipped = 0;

    for rule in rules {
        match compile_rule(rule) {
            Ok(c) => {
                debug!(
                    target: "corretor_core::compiler",
                    "Rule {} ({:?}) compiled successfully.",
                    rule.id,
                    c.kind
                );
                compiled.push(c);
            }
            Err(e) => {
                warn!("Skipping rule {}: {}", rule.id, e);
                skipped += 1;
            }
        }
    }

    debug!(
        "Finished compiling rules. Total compiled: {}, skipped: {}.",
        compiled.len(),
        skipped
    );

    CompiledRules {
        rules: compiled,
        skipped,
        fingerprint: fingerprint_rules(rules),
    }
}

/// Stable fingerprint of an ordered rule snapshot.
///
/// Text fields are length-prefixed, so no choice of rule text can make two
/// different snapshots hash the same input.
pub fn fingerprint_rules(rules: &[Rule]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((rules.len() as u64).to_le_bytes());
    for rule in rules {
        hasher.update(rule.id.to_le_bytes());
        for field in [&rule.wrong, &rule.right] {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

/// Gets the compiled set for `rules` from the cache, compiling it on a miss.
///
/// A poisoned cache lock only disables caching; compilation still happens.
pub fn get_or_compile_rules(rules: &[Rule]) -> Arc<CompiledRules> {
    let key = fingerprint_rules(rules);

    if let Ok(cache) = COMPILED_RULES_CACHE.read() {
        if let Some(hit) = cache.get(&key) {
            debug!("Serving compiled rules from cache for key: {}", &key[..12]);
            return Arc::clone(hit);
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = Arc::new(compile_rules(rules));

    match COMPILED_RULES_CACHE.write() {
        Ok(mut cache) => {
            if cache.len() >= MAX_CACHED_RULE_SETS {
                debug!("Compiled rules cache full ({} sets), flushing.", cache.len());
                cache.clear();
            }
            cache.insert(key, Arc::clone(&compiled));
        }
        Err(_) => warn!("Compiled rules cache lock poisoned; result not cached."),
    }

    compiled
}
