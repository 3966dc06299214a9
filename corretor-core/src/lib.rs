// corretor-core/src/lib.rs
//! # Corretor Core Library
//!
//! `corretor-core` holds the platform-independent logic of the corretor
//! tool: a set of "wrong → right" substitution rules maintained by a group,
//! and an engine that applies every matching rule to a sentence while keeping
//! an audit trail of each substitution.
//!
//! The engine is pure and stateless. It receives an ordered snapshot of rules
//! and never reaches into storage by itself.
//!
//! ## Modules
//!
//! * `rule`: The `Rule` model and the ordering policy (longest `wrong` first,
//!   newest first on ties).
//! * `case`: Case-preserving replacement (`VAI` → `VOU`, `Vai` → `Vou`).
//! * `compiler`: Turns rules into word-isolated, case-insensitive patterns and caches them.
//! * `engine`: The `CorrectionEngine` trait.
//! * `engines`: Concrete engines; `RuleEngine` is the sequential rule rewriter.
//! * `change`: `ChangeRecord`, `CorrectionResult` and the JSON wire report.
//! * `store`: The `RuleStore` contract with in-memory and JSON-file stores.
//! * `backup`: JSON export and import of whole rule sets.
//! * `seed`: YAML seed files for bulk rule creation.
//! * `headless`: One-shot correction straight from a store.
//!
//! ## Usage Example
//!
//! ```rust
//! use corretor_core::{CorrectionEngine, MemoryRuleStore, NewRule, RuleEngine, RuleStore};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let store = MemoryRuleStore::with_rules(vec![
//!         NewRule::new("vai", "vou"),
//!         NewRule::new("nós vai", "nós vamos"),
//!     ])?;
//!
//!     let engine = RuleEngine::new(store.list_rules()?);
//!     let result = engine.correct("Nós vai amanhã. Ele disse que VAI também.");
//!
//!     assert_eq!(result.corrected_text, "Nós vamos amanhã. Ele disse que VOU também.");
//!     assert_eq!(result.changes.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Store and backup operations return `CorretorError`; application-level
//! helpers use `anyhow::Error`. A correction pass itself never fails: a rule
//! that cannot be compiled is skipped and logged.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod backup;
pub mod case;
pub mod change;
pub mod compiler;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rule;
pub mod seed;
pub mod store;

/// Re-exports the rule model and ordering policy.
pub use rule::{sort_rules, NewRule, Rule};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CorretorError;

/// Re-exports the engine trait and its rule-based implementation.
pub use engine::CorrectionEngine;
pub use engines::rule_engine::RuleEngine;

/// Re-exports correction outcome types.
pub use change::{ChangeRecord, CorrectionReport, CorrectionResult};

/// Re-exports the case-preservation entry point.
pub use case::apply_case_like;

/// Re-exports compilation types for callers that inspect compiled rules.
pub use compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules, PatternKind};

/// Re-exports rule storage.
pub use store::{JsonRuleStore, MemoryRuleStore, RuleStore};

/// Re-exports backup import/export.
pub use backup::{export_rules, import_rules, BackupRule, ImportReport, RuleBackup};

pub use seed::RuleSeed;

pub use headless::headless_correct;
