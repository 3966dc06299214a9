// corretor-core/src/engine.rs
//! Defines the core `CorrectionEngine` trait.
//!
//! The trait decouples callers (CLI, headless helpers, tests) from the way a
//! correction pass is carried out. Engines receive their rule snapshot when
//! they are built and never reach into a store on their own.
//!
//! License: MIT OR APACHE 2.0

use crate::change::CorrectionResult;
use crate::compiler::CompiledRules;
use crate::rule::Rule;

/// A deterministic, rule-driven text rewriter.
pub trait CorrectionEngine: Send + Sync {
    /// Applies every rule, in order, to `text`.
    ///
    /// This operation is total: rules that cannot be applied contribute
    /// nothing and the pass always yields a result.
    fn correct(&self, text: &str) -> CorrectionResult;

    /// The ordered rule snapshot this engine was built from.
    fn rules(&self) -> &[Rule];

    /// The compiled form of [`CorrectionEngine::rules`], minus skipped rules.
    fn compiled_rules(&self) -> &CompiledRules;
}
