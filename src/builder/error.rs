//! Build errors for rule sets and their configuration.

use crate::core::Strategy;
use thiserror::Error;

/// Errors that can occur when assembling or running a rule set.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Rule set has no rules. Call .ensure(selector, chain) before validating")]
    EmptyRuleSet,

    #[error("Rule bound to {found:?} cannot join a rule set using {expected:?}")]
    StrategyMismatch { expected: Strategy, found: Strategy },

    #[error("Invalid validation config: {0}")]
    InvalidConfig(String),
}
