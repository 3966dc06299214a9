//! Concrete implementations of the `CorrectionEngine` trait.
//!
//! # License
//! MIT OR Apache-2.0

pub mod rule_engine;
