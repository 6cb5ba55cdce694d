//! Configuration for rule sets.

use crate::builder::error::BuildError;
use crate::core::Strategy;
use serde::{Deserialize, Serialize};

/// Settings applied when a rule set is created.
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Strategy bound to every chain of the rule set
    pub strategy: Strategy,
}

impl ValidationConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }
}
