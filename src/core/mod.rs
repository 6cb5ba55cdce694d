//! Core value types of the validation engine.
//!
//! This module contains the building blocks every rule node is made of:
//! - Property selectors shared across a chain
//! - Predicates and guard conditions
//! - The evaluation strategy bound to a chain
//! - Immutable validation results

mod guard;
mod result;
mod selector;
mod strategy;

pub use guard::{Condition, Predicate};
pub use result::{InconsistentResult, ValidationResult, DEFAULT_FAILURE_MESSAGE};
pub use selector::PropertySelector;
pub use strategy::Strategy;
