//! Rulechain: a fluent, declarative validation engine
//!
//! Callers describe, per property of an object, a chain of rules with
//! optional guard conditions and error messages, then ask for one aggregated
//! pass/fail result.
//!
//! # Core Concepts
//!
//! - **Rule nodes**: links of a per-property chain holding a selector, a
//!   predicate, guard conditions and error messages
//! - **Strategy**: `CompleteValidation` reports every failure, `FailFast`
//!   stops at the first one
//! - **Results**: immutable verdicts that are either succeeded with no
//!   messages or failed with at least one
//!
//! # Example
//!
//! ```rust
//! use rulechain::{RuleSet, Strategy};
//!
//! struct Order {
//!     quantity: u32,
//! }
//!
//! let express_checkout = false;
//! let rules = RuleSet::new(Strategy::FailFast).ensure(
//!     |o: &Order| o.quantity,
//!     |chain| {
//!         chain
//!             .is_greater_than(0)
//!             .with_message("quantity must be positive")
//!             .is_less_than_or_equal_to(10)
//!             .when(move || express_checkout)
//!             .with_message("express orders are limited to 10 items")
//!     },
//! );
//!
//! let result = rules.validate(&Order { quantity: 0 });
//! assert_eq!(result.error_messages(), ["quantity must be positive"]);
//!
//! let result = rules.validate(&Order { quantity: 25 });
//! assert!(result.is_succeeded());
//! ```

pub mod builder;
pub mod core;
pub mod report;
pub mod rules;
pub mod runner;

// Re-export commonly used types
pub use builder::{BuildError, ChainBuilder, RuleSet, ValidationConfig};
pub use self::core::{Condition, Predicate, PropertySelector, Strategy, ValidationResult};
pub use report::{ReportError, ValidationReport};
pub use rules::{Rule, RuleAccessor, RuleError, RuleNode};
pub use runner::Validator;
