//! Runner evaluating rule sets against a concrete object.
//!
//! Chains are visited in registration order and each chain is walked from
//! its root to its last node. A failing node bound to
//! [`Strategy::FailFast`] ends the run with that node's result; otherwise
//! every failure is accumulated with Stillwater's `Validation`.

use crate::core::{Strategy, ValidationResult};
use crate::report::ValidationReport;
use crate::rules::{root_first, Rule};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// One validation run: a set of chains bound to the object they check.
pub struct Validator<'a, T> {
    strategy: Strategy,
    rules: &'a [Arc<dyn Rule<T>>],
    object: &'a T,
}

/// Verdict of a run together with how many nodes were evaluated.
struct RunOutcome {
    result: ValidationResult,
    nodes_evaluated: usize,
}

impl<'a, T> Validator<'a, T> {
    /// Every chain in `rules` must already be bound to `strategy`;
    /// [`RuleSet`](crate::builder::RuleSet) guarantees this.
    pub(crate) fn new(strategy: Strategy, rules: &'a [Arc<dyn Rule<T>>], object: &'a T) -> Self {
        debug_assert!(rules.iter().all(|rule| rule.strategy() == strategy));
        Self {
            strategy,
            rules,
            object,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Evaluate every chain and aggregate the verdict.
    pub fn validate(&self) -> ValidationResult {
        self.run().result
    }

    /// Evaluate every chain and describe the run in a serializable report.
    pub fn report(&self) -> ValidationReport {
        let outcome = self.run();
        ValidationReport::new(self.strategy, outcome.nodes_evaluated, outcome.result)
    }

    fn run(&self) -> RunOutcome {
        let mut nodes_evaluated = 0;
        let mut checks: Vec<Validation<(), NonEmptyVec<String>>> = Vec::new();

        for (chain, tail) in self.rules.iter().enumerate() {
            for node in root_first(&**tail) {
                let result = node.validate(self.object);
                nodes_evaluated += 1;

                if result.is_failed() {
                    debug!(
                        chain,
                        messages = result.error_messages().len(),
                        "rule failed"
                    );

                    if node.strategy().stops_on_failure() {
                        debug!(nodes_evaluated, "fail-fast strategy stopped validation");
                        return RunOutcome {
                            result,
                            nodes_evaluated,
                        };
                    }
                }

                checks.push(result.into_validation());
            }
        }

        let result = ValidationResult::from(Validation::all_vec(checks).map(|_| ()));
        debug!(
            nodes_evaluated,
            succeeded = result.is_succeeded(),
            "validation complete"
        );

        RunOutcome {
            result,
            nodes_evaluated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ChainBuilder, RuleSet};
    use crate::core::PropertySelector;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Model {
        value: i32,
    }

    fn counted_chain(
        strategy: Strategy,
        calls: &Arc<AtomicUsize>,
    ) -> Arc<dyn Rule<Model>> {
        let first = Arc::clone(calls);
        let second = Arc::clone(calls);
        ChainBuilder::new(PropertySelector::new(|m: &Model| m.value), strategy)
            .satisfies(move |v| {
                first.fetch_add(1, Ordering::SeqCst);
                *v > 5
            })
            .with_message("P1 failed")
            .satisfies(move |v| {
                second.fetch_add(1, Ordering::SeqCst);
                *v > 50
            })
            .with_message("P2 failed")
            .build()
    }

    #[test]
    fn fail_fast_stops_at_first_failing_node() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = [counted_chain(Strategy::FailFast, &calls)];
        let object = Model { value: 3 };

        let result = Validator::new(Strategy::FailFast, &rules, &object).validate();

        assert_eq!(result.error_messages(), ["P1 failed"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn complete_validation_evaluates_every_node() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = [counted_chain(Strategy::CompleteValidation, &calls)];
        let object = Model { value: 3 };

        let result = Validator::new(Strategy::CompleteValidation, &rules, &object).validate();

        assert_eq!(result.error_messages(), ["P1 failed", "P2 failed"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn fail_fast_skips_later_chains() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = [
            counted_chain(Strategy::FailFast, &calls),
            counted_chain(Strategy::FailFast, &calls),
        ];
        let object = Model { value: 3 };

        Validator::new(Strategy::FailFast, &rules, &object).validate();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn fail_fast_passes_through_succeeding_nodes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = [counted_chain(Strategy::FailFast, &calls)];
        let object = Model { value: 10 };

        let result = Validator::new(Strategy::FailFast, &rules, &object).validate();

        assert_eq!(result.error_messages(), ["P2 failed"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn report_counts_evaluated_nodes() {
        let rules = RuleSet::new(Strategy::FailFast)
            .ensure(|m: &Model| m.value, |chain| chain.is_less_than(0).is_less_than(-10));

        let report = rules.for_object(&Model { value: 1 }).report();

        assert_eq!(report.nodes_evaluated, 1);
        assert_eq!(report.strategy, Strategy::FailFast);
        assert!(report.result.is_failed());
    }

    #[test]
    fn passing_run_succeeds() {
        let rules = RuleSet::new(Strategy::CompleteValidation)
            .ensure(|m: &Model| m.value, |chain| chain.is_between(0, 10));

        let report = rules.for_object(&Model { value: 5 }).report();

        assert!(report.result.is_succeeded());
        assert_eq!(report.nodes_evaluated, 1);
    }

    #[test]
    fn report_records_the_strategy_the_run_followed() {
        let rules = RuleSet::new(Strategy::CompleteValidation).ensure(
            |m: &Model| m.value,
            |chain| {
                chain
                    .is_greater_than(5)
                    .with_message("a")
                    .is_greater_than(6)
                    .with_message("b")
            },
        );

        let report = rules.for_object(&Model { value: 0 }).report();

        assert_eq!(report.strategy, Strategy::CompleteValidation);
        assert_eq!(report.result.error_messages(), ["a", "b"]);
        assert_eq!(report.nodes_evaluated, 2);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn mismatched_strategy_is_rejected() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = [counted_chain(Strategy::CompleteValidation, &calls)];

        Validator::new(Strategy::FailFast, &rules, &Model { value: 0 });
    }
}
