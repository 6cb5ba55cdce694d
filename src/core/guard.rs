//! Predicates and guard conditions attached to rule nodes.
//!
//! A predicate is the actual pass/fail check over a property value. A
//! condition is a zero-argument guard that decides whether the predicate is
//! consulted at all.

/// Boolean check over a selected property value.
///
/// # Example
///
/// ```rust
/// use rulechain::core::Predicate;
///
/// let positive = Predicate::new(|value: &i32| *value > 0);
///
/// assert!(positive.check(&5));
/// assert!(!positive.check(&-1));
/// ```
pub struct Predicate<P> {
    check: Box<dyn Fn(&P) -> bool + Send + Sync>,
}

impl<P> Predicate<P> {
    /// Create a predicate from a closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        Predicate {
            check: Box::new(check),
        }
    }

    /// Whether `value` satisfies this predicate.
    pub fn check(&self, value: &P) -> bool {
        (self.check)(value)
    }
}

/// Zero-argument guard gating a node's predicate.
///
/// Conditions may have side effects (counters, logging); nodes always run
/// every condition they hold.
///
/// # Example
///
/// ```rust
/// use rulechain::core::Condition;
///
/// let always = Condition::new(|| true);
/// assert!(always.check());
/// ```
pub struct Condition {
    check: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Condition {
    /// Create a condition from a closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Condition {
            check: Box::new(check),
        }
    }

    pub fn check(&self) -> bool {
        (self.check)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn predicate_checks_values() {
        let greater_than_five = Predicate::new(|v: &i32| *v > 5);

        assert!(greater_than_five.check(&10));
        assert!(!greater_than_five.check(&3));
    }

    #[test]
    fn predicate_is_deterministic() {
        let predicate = Predicate::new(|s: &String| s.starts_with('a'));
        let value = "abc".to_string();

        assert_eq!(predicate.check(&value), predicate.check(&value));
    }

    #[test]
    fn condition_runs_on_every_check() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let condition = Condition::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        assert!(!condition.check());
        assert!(!condition.check());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
