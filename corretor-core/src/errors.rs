//! errors.rs - Custom error types for the corretor-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `corretor-core` library.
///
/// `#[non_exhaustive]` lets new variants be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CorretorError {
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Failed to compile correction rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule with id {0} not found")]
    RuleNotFound(u64),

    #[error("Nothing to import: the payload is empty")]
    EmptyImport,

    #[error("Invalid backup payload: {0}")]
    InvalidBackup(String),

    #[error("Rule store failure: {0}")]
    StoreError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to (de)serialize rules: {0}")]
    SerializationError(#[from] serde_json::Error),
}
