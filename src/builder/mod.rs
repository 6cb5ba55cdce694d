//! Builder API for declaring rule sets.
//!
//! This module provides the fluent surface callers use to describe, per
//! property, which rules an object must satisfy:
//! - [`RuleSet`] collects one chain per property under a single strategy
//! - [`ChainBuilder`] appends rules, conditions and messages to a chain
//! - [`ValidationConfig`] carries settings loaded from configuration

pub mod chain;
pub mod config;
pub mod error;
pub mod ruleset;

pub use chain::ChainBuilder;
pub use config::ValidationConfig;
pub use error::BuildError;
pub use ruleset::RuleSet;
