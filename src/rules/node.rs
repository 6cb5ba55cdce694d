//! Rule nodes: single links of a per-property rule chain.

use crate::core::{Condition, Predicate, PropertySelector, Strategy, ValidationResult};
use crate::rules::error::RuleError;
use std::sync::Arc;
use tracing::trace;

/// Read-only view of a rule node, erased over the property type.
///
/// This is the capability handed to runners: it can evaluate a node and walk
/// back through the chain, but offers no way to change either.
pub trait Rule<T>: Send + Sync {
    /// Evaluate this node alone against `object`.
    fn validate(&self, object: &T) -> ValidationResult;

    /// Strategy bound to the chain this node belongs to.
    fn strategy(&self) -> Strategy;

    /// The node this one was derived from, if any.
    fn previous(&self) -> Option<&dyn Rule<T>>;
}

/// Mutation capability over a node under construction.
///
/// Every method takes `&mut self`. Once a node is frozen behind an [`Arc`]
/// (by deriving a successor from it or building the chain) these methods are
/// no longer reachable.
pub trait RuleAccessor<T, P> {
    /// Replace the node's predicate. The last call wins.
    fn set_predicate(&mut self, predicate: Predicate<P>) -> &mut Self;

    /// Append a guard condition; conditions run in insertion order.
    fn add_condition(&mut self, condition: Condition) -> &mut Self;

    /// Append a message reported when the node fails.
    fn add_error_message(&mut self, message: impl Into<String>) -> &mut Self;
}

/// One link in a rule chain for a property of type `P` on objects of type `T`.
///
/// # Example
///
/// ```rust
/// use rulechain::core::{Predicate, PropertySelector, Strategy};
/// use rulechain::rules::{RuleAccessor, RuleNode};
///
/// struct Order {
///     quantity: u32,
/// }
///
/// let mut node = RuleNode::new(
///     PropertySelector::new(|o: &Order| o.quantity),
///     Strategy::CompleteValidation,
/// );
/// node.set_predicate(Predicate::new(|q: &u32| *q > 5))
///     .add_error_message("too small");
///
/// assert!(node.validate(&Order { quantity: 10 }).is_succeeded());
/// assert_eq!(
///     node.validate(&Order { quantity: 3 }).error_messages(),
///     ["too small"]
/// );
/// ```
pub struct RuleNode<T, P> {
    selector: PropertySelector<T, P>,
    predicate: Option<Predicate<P>>,
    conditions: Vec<Condition>,
    error_messages: Vec<String>,
    previous: Option<Arc<RuleNode<T, P>>>,
    strategy: Strategy,
}

impl<T, P> RuleNode<T, P> {
    /// Create the root node of a new chain.
    pub fn new(selector: PropertySelector<T, P>, strategy: Strategy) -> Self {
        Self {
            selector,
            predicate: None,
            conditions: Vec::new(),
            error_messages: Vec::new(),
            previous: None,
            strategy,
        }
    }

    /// Derive a node from `previous`, sharing its selector and strategy.
    ///
    /// The new node starts without predicate, conditions or messages.
    pub fn derive(previous: Arc<Self>) -> Self {
        Self {
            selector: previous.selector.clone(),
            predicate: None,
            conditions: Vec::new(),
            error_messages: Vec::new(),
            strategy: previous.strategy,
            previous: Some(previous),
        }
    }

    /// Like [`derive`](Self::derive), but rejects a missing predecessor.
    pub fn derive_from(previous: Option<Arc<Self>>) -> Result<Self, RuleError> {
        let previous = previous.ok_or_else(|| RuleError::InvalidChain {
            reason: "cannot derive a rule from an absent previous rule".to_string(),
        })?;

        Ok(Self::derive(previous))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn property_selector(&self) -> &PropertySelector<T, P> {
        &self.selector
    }

    pub fn previous_rule(&self) -> Option<&Arc<Self>> {
        self.previous.as_ref()
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Number of nodes from the chain root up to and including this one.
    pub fn chain_len(&self) -> usize {
        let mut len = 1;
        let mut current = self.previous.as_deref();
        while let Some(node) = current {
            len += 1;
            current = node.previous.as_deref();
        }
        len
    }

    /// Evaluate this node against `object`.
    ///
    /// Every condition runs, in order, even after one returns false. The node
    /// fails only when all conditions hold and the predicate rejects the
    /// selected property.
    pub fn validate(&self, object: &T) -> ValidationResult {
        let property = self.selector.select(object);

        let conditions_hold = self
            .conditions
            .iter()
            .fold(true, |all, condition| condition.check() & all);

        let satisfied = self
            .predicate
            .as_ref()
            .is_none_or(|predicate| predicate.check(&property));

        trace!(
            conditions_hold,
            satisfied,
            conditions = self.conditions.len(),
            "evaluated rule node"
        );

        if conditions_hold && !satisfied {
            ValidationResult::failed(self.error_messages.iter().cloned())
        } else {
            ValidationResult::succeeded()
        }
    }
}

impl<T, P> RuleAccessor<T, P> for RuleNode<T, P> {
    fn set_predicate(&mut self, predicate: Predicate<P>) -> &mut Self {
        self.predicate = Some(predicate);
        self
    }

    fn add_condition(&mut self, condition: Condition) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    fn add_error_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.error_messages.push(message.into());
        self
    }
}

impl<T, P> Rule<T> for RuleNode<T, P> {
    fn validate(&self, object: &T) -> ValidationResult {
        RuleNode::validate(self, object)
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn previous(&self) -> Option<&dyn Rule<T>> {
        self.previous
            .as_deref()
            .map(|node| node as &dyn Rule<T>)
    }
}
