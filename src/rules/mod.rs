//! Rule nodes and the chains they form.
//!
//! A chain is a sequence of [`RuleNode`]s for one property, each linked to
//! the node it was derived from. All nodes of a chain share one property
//! selector and one [`Strategy`](crate::core::Strategy).
//!
//! Nodes expose two capabilities:
//! - [`Rule`]: evaluation and read-only traversal, usable on frozen chains
//! - [`RuleAccessor`]: mutation, only available while a node is still owned
//!
//! # Example
//!
//! ```rust
//! use rulechain::core::{Predicate, PropertySelector, Strategy};
//! use rulechain::rules::{root_first, RuleAccessor, RuleNode};
//! use std::sync::Arc;
//!
//! struct Account {
//!     balance: i64,
//! }
//!
//! let mut root = RuleNode::new(
//!     PropertySelector::new(|a: &Account| a.balance),
//!     Strategy::FailFast,
//! );
//! root.set_predicate(Predicate::new(|b: &i64| *b >= 0));
//!
//! let mut limit = RuleNode::derive(Arc::new(root));
//! limit.set_predicate(Predicate::new(|b: &i64| *b < 1_000_000));
//!
//! assert_eq!(limit.strategy(), Strategy::FailFast);
//! assert_eq!(root_first::<Account>(&limit).len(), 2);
//! ```

mod chain;
pub mod error;
mod node;

pub use chain::{nearest_first, root_first};
pub use error::RuleError;
pub use node::{Rule, RuleAccessor, RuleNode};
