//! Errors raised by the command layer (as opposed to the core library).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No rule with id {0}")]
    RuleNotFound(u64),

    #[error("Refusing to delete all rules without confirmation; pass --yes")]
    ConfirmationRequired,
}
