//! Rule sets collecting one chain per validated property.

use crate::builder::chain::ChainBuilder;
use crate::builder::config::ValidationConfig;
use crate::builder::error::BuildError;
use crate::core::{PropertySelector, Strategy, ValidationResult};
use crate::rules::Rule;
use crate::runner::Validator;
use std::sync::Arc;

/// Collection of rule chains validated together under one strategy.
///
/// The strategy is fixed when the set is created; every chain added through
/// [`ensure`](Self::ensure) is bound to it.
///
/// # Example
///
/// ```rust
/// use rulechain::builder::RuleSet;
/// use rulechain::core::Strategy;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let rules = RuleSet::new(Strategy::CompleteValidation)
///     .ensure(|u: &User| u.name.clone(), |chain| {
///         chain.is_not_empty().with_message("name is required")
///     })
///     .ensure(|u: &User| u.age, |chain| {
///         chain.is_greater_than_or_equal_to(18).with_message("must be an adult")
///     });
///
/// let user = User { name: String::new(), age: 12 };
/// let result = rules.validate(&user);
///
/// assert_eq!(
///     result.error_messages(),
///     ["name is required", "must be an adult"]
/// );
/// ```
pub struct RuleSet<T> {
    strategy: Strategy,
    rules: Vec<Arc<dyn Rule<T>>>,
}

impl<T: 'static> RuleSet<T> {
    /// Create an empty rule set bound to `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rules: Vec::new(),
        }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.strategy)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Add a chain for the property picked by `selector`.
    ///
    /// `build` receives a builder positioned at the chain root and returns it
    /// with the chain's rules appended.
    pub fn ensure<P, S, F>(mut self, selector: S, build: F) -> Self
    where
        P: 'static,
        S: Fn(&T) -> P + Send + Sync + 'static,
        F: FnOnce(ChainBuilder<T, P>) -> ChainBuilder<T, P>,
    {
        let root = ChainBuilder::new(PropertySelector::new(selector), self.strategy);
        let chain = build(root).build();
        self.rules.push(chain);
        self
    }

    /// Add a prebuilt chain, identified by its last node.
    ///
    /// The chain must be bound to the same strategy as this set.
    pub fn add_rule(mut self, rule: Arc<dyn Rule<T>>) -> Result<Self, BuildError> {
        if rule.strategy() != self.strategy {
            return Err(BuildError::StrategyMismatch {
                expected: self.strategy,
                found: rule.strategy(),
            });
        }

        self.rules.push(rule);
        Ok(self)
    }

    /// Last nodes of every chain, in registration order.
    pub fn rules(&self) -> &[Arc<dyn Rule<T>>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Prepare a validation run of this set against `object`.
    pub fn for_object<'a>(&'a self, object: &'a T) -> Validator<'a, T> {
        Validator::new(self.strategy, &self.rules, object)
    }

    /// Validate `object` against every chain. An empty set succeeds.
    pub fn validate(&self, object: &T) -> ValidationResult {
        self.for_object(object).validate()
    }

    /// Validate `object`, rejecting a set with no chains.
    pub fn try_validate(&self, object: &T) -> Result<ValidationResult, BuildError> {
        if self.is_empty() {
            return Err(BuildError::EmptyRuleSet);
        }

        Ok(self.validate(object))
    }
}

impl<T: 'static> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
