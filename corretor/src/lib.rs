// corretor/src/lib.rs
//! # corretor CLI
//!
//! Terminal front end for `corretor-core`: correct text with the stored
//! rules, manage those rules, and move them between machines as JSON backups.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logger;
pub mod settings;
pub mod ui;

pub use commands::dispatch;
