//! Fluent builder appending rules to a single property chain.

use crate::core::{Condition, Predicate, PropertySelector, Strategy};
use crate::rules::{RuleAccessor, RuleNode};
use std::sync::Arc;

/// Builder for one property's rule chain with a fluent API.
///
/// [`satisfies`](Self::satisfies) (and every generic rule built on it) fills
/// the current node when it has no predicate yet, and otherwise freezes it
/// and derives a new node carrying the predicate. [`when`](Self::when) and
/// [`with_message`](Self::with_message) apply to the current node, so they
/// qualify the most recent rule, or the next one when called before any rule
/// (or right after [`extend`](Self::extend)).
///
/// # Example
///
/// ```rust
/// use rulechain::builder::ChainBuilder;
/// use rulechain::core::{PropertySelector, Strategy};
///
/// struct Product {
///     price: f64,
/// }
///
/// let chain = ChainBuilder::new(
///     PropertySelector::new(|p: &Product| p.price),
///     Strategy::CompleteValidation,
/// )
/// .is_greater_than(0.0)
/// .with_message("price must be positive")
/// .build();
///
/// assert!(chain.validate(&Product { price: 9.99 }).is_succeeded());
/// assert!(chain.validate(&Product { price: -1.0 }).is_failed());
/// ```
pub struct ChainBuilder<T, P> {
    current: RuleNode<T, P>,
}

impl<T, P> ChainBuilder<T, P> {
    /// Start a chain rooted at `selector`.
    pub fn new(selector: PropertySelector<T, P>, strategy: Strategy) -> Self {
        Self {
            current: RuleNode::new(selector, strategy),
        }
    }

    /// Continue an existing, already frozen chain.
    ///
    /// The next rule lands on a node derived from `previous`.
    pub fn extend(previous: Arc<RuleNode<T, P>>) -> Self {
        Self {
            current: RuleNode::derive(previous),
        }
    }

    /// Append a rule checking the property with `predicate`.
    pub fn satisfies<F>(self, predicate: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        let mut current = if self.current.has_predicate() {
            RuleNode::derive(Arc::new(self.current))
        } else {
            self.current
        };
        current.set_predicate(Predicate::new(predicate));
        Self { current }
    }

    /// Only apply the current rule while `condition` holds.
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.current.add_condition(Condition::new(condition));
        self
    }

    /// Report `message` when the current rule fails.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.current.add_error_message(message);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.current.strategy()
    }

    /// Freeze the chain and return its last node.
    pub fn build(self) -> Arc<RuleNode<T, P>> {
        Arc::new(self.current)
    }
}

impl<T, P> ChainBuilder<T, P>
where
    T: 'static,
    P: PartialEq + Send + Sync + 'static,
{
    pub fn is_equal_to(self, expected: P) -> Self {
        self.satisfies(move |value: &P| *value == expected)
    }

    pub fn is_not_equal_to(self, unexpected: P) -> Self {
        self.satisfies(move |value: &P| *value != unexpected)
    }
}

/// Ordering rules. Values that are unordered with the bound (such as NaN)
/// fail every one of them.
impl<T, P> ChainBuilder<T, P>
where
    T: 'static,
    P: PartialOrd + Send + Sync + 'static,
{
    pub fn is_greater_than(self, bound: P) -> Self {
        self.satisfies(move |value: &P| *value > bound)
    }

    pub fn is_greater_than_or_equal_to(self, bound: P) -> Self {
        self.satisfies(move |value: &P| *value >= bound)
    }

    pub fn is_less_than(self, bound: P) -> Self {
        self.satisfies(move |value: &P| *value < bound)
    }

    pub fn is_less_than_or_equal_to(self, bound: P) -> Self {
        self.satisfies(move |value: &P| *value <= bound)
    }

    /// Inclusive on both ends.
    pub fn is_between(self, min: P, max: P) -> Self {
        self.satisfies(move |value: &P| *value >= min && *value <= max)
    }
}

impl<T: 'static, P: 'static> ChainBuilder<T, Option<P>> {
    pub fn required(self) -> Self {
        self.satisfies(Option::is_some)
    }
}

/// String rules; lengths count chars, not bytes.
impl<T: 'static> ChainBuilder<T, String> {
    pub fn is_not_empty(self) -> Self {
        self.satisfies(|value: &String| !value.is_empty())
    }

    pub fn min_length(self, min: usize) -> Self {
        self.satisfies(move |value: &String| value.chars().count() >= min)
    }

    pub fn max_length(self, max: usize) -> Self {
        self.satisfies(move |value: &String| value.chars().count() <= max)
    }
}
