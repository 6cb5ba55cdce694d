//! Errors raised while linking rule chains.

use thiserror::Error;

/// Programming errors in how a rule chain is assembled.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("Invalid rule chain: {reason}")]
    InvalidChain { reason: String },
}
