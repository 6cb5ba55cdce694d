//! Evaluation strategies for a validation run.

use serde::{Deserialize, Serialize};

/// Policy deciding whether a run continues past a failing rule.
///
/// A strategy is bound when the root node of a chain is created and copied
/// into every node derived from it. It never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Evaluate every node of every chain and report all failures
    #[default]
    CompleteValidation,

    /// Stop at the first failing node and report only its messages
    FailFast,
}

impl Strategy {
    /// Whether a failure under this strategy ends the run.
    pub fn stops_on_failure(self) -> bool {
        matches!(self, Self::FailFast)
    }
}
