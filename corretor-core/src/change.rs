//! Data structures describing the outcome of a correction pass, plus the
//! debug-logging helpers that keep user text out of logs by default.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Set once from `CORRETOR_ALLOW_DEBUG_TEXT`; when false, matched text is masked in debug logs.
static DEBUG_TEXT_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("CORRETOR_ALLOW_DEBUG_TEXT")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// One matched-and-replaced occurrence.
///
/// The wire names `de`/`para` are part of the external JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// The exact text that was matched, with its original casing.
    #[serde(rename = "de")]
    pub original: String,
    /// The case-adjusted text that replaced it.
    #[serde(rename = "para")]
    pub replacement: String,
}

impl ChangeRecord {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

/// Corrected text plus the ordered audit trail of substitutions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub changes: Vec<ChangeRecord>,
}

impl CorrectionResult {
    /// A result for text that no rule touched.
    pub fn unchanged(text: &str) -> Self {
        Self {
            corrected_text: text.to_string(),
            changes: Vec::new(),
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Builds the JSON wire representation for `input`.
    pub fn into_report(self, input: &str) -> CorrectionReport {
        CorrectionReport {
            input: input.to_string(),
            corrected: self.corrected_text,
            changes: self.changes,
        }
    }
}

/// `{"input", "corrected", "changes": [{"de", "para"}]}` as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub input: String,
    pub corrected: String,
    pub changes: Vec<ChangeRecord>,
}

pub fn mask_text(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[TEXT]".to_string()
    } else {
        format!("[TEXT: {} chars]", len)
    }
}

fn loggable(text: &str) -> String {
    if *DEBUG_TEXT_ALLOWED {
        text.to_string()
    } else {
        mask_text(text)
    }
}

pub fn log_change_debug(module_path: &str, rule_id: u64, original: &str, replacement: &str) {
    debug!(
        "{} Change by rule {}: Original='{}', Replacement='{}'",
        module_path,
        rule_id,
        loggable(original),
        loggable(replacement)
    );
}
