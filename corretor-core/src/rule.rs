//! Data model for correction rules and the ordering policy the engine relies on.
//!
//! Rules are immutable once created: a store can only add or delete them.
//! The order in which rules are applied is part of the correction semantics,
//! see [`sort_rules`].
//!
//! License: MIT OR Apache-2.0

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::errors::CorretorError;

/// A single stored "wrong → right" substitution rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Opaque identifier assigned by the store. Strictly increasing.
    pub id: u64,
    /// The erroneous form to look for (trimmed, non-empty).
    pub wrong: String,
    /// The corrected form to substitute (trimmed, non-empty).
    pub right: String,
    /// Optional explanation shown next to the rule.
    #[serde(default)]
    pub notes: String,
    /// Local creation time, seconds precision.
    pub created_at: NaiveDateTime,
}

impl Rule {
    /// Length of `wrong` as used by the ordering policy (characters, not bytes).
    pub fn wrong_len(&self) -> usize {
        self.wrong.chars().count()
    }
}

/// A request to create a rule. Stores normalise it with [`NewRule::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRule {
    pub wrong: String,
    pub right: String,
    #[serde(default)]
    pub notes: String,
}

impl NewRule {
    pub fn new(wrong: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            wrong: wrong.into(),
            right: right.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Trims every field and rejects requests with a blank `wrong` or `right`.
    pub fn normalized(&self) -> Result<NewRule, CorretorError> {
        let wrong = self.wrong.trim();
        let right = self.right.trim();

        if wrong.is_empty() {
            return Err(CorretorError::InvalidRule(
                "the `wrong` form is empty".to_string(),
            ));
        }
        if right.is_empty() {
            return Err(CorretorError::InvalidRule(format!(
                "the `right` form for '{}' is empty",
                wrong
            )));
        }

        Ok(NewRule {
            wrong: wrong.to_string(),
            right: right.to_string(),
            notes: self.notes.trim().to_string(),
        })
    }

    /// Builds the stored rule. Callers are expected to pass a normalised request.
    pub fn into_rule(self, id: u64, created_at: NaiveDateTime) -> Rule {
        Rule {
            id,
            wrong: self.wrong,
            right: self.right,
            notes: self.notes,
            created_at,
        }
    }
}

/// Current local time truncated to whole seconds.
pub fn now_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Application order: longer `wrong` first, newer rule first on ties.
pub fn rule_order(a: &Rule, b: &Rule) -> Ordering {
    b.wrong_len()
        .cmp(&a.wrong_len())
        .then_with(|| b.id.cmp(&a.id))
}

/// Sorts rules into application order.
///
/// A phrase such as "nós vai" has to run before "vai" alone, otherwise the
/// shorter rule rewrites part of the phrase first.
pub fn sort_rules(rules: &mut [Rule]) {
    rules.sort_by(rule_order);
}

/// Returns true when the slice is already in application order.
pub fn is_ordered(rules: &[Rule]) -> bool {
    rules
        .windows(2)
        .all(|pair| rule_order(&pair[0], &pair[1]) != Ordering::Greater)
}
