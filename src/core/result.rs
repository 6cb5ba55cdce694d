//! Immutable pass/fail verdicts produced by rule evaluation.

use serde::{Deserialize, Serialize};
use std::ops::BitAnd;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Message reported by a failure that carries no caller-supplied messages.
pub const DEFAULT_FAILURE_MESSAGE: &str = "validation rule failed";

/// Verdict of validating an object against one rule or a whole rule set.
///
/// A result is either succeeded with no messages or failed with at least one
/// message. The only way to build one is through [`ValidationResult::succeeded`]
/// and [`ValidationResult::failed`], so the two can never disagree.
///
/// # Example
///
/// ```rust
/// use rulechain::core::ValidationResult;
///
/// let ok = ValidationResult::succeeded();
/// assert!(ok.is_succeeded());
/// assert!(ok.error_messages().is_empty());
///
/// let failed = ValidationResult::failed(["too small"]);
/// assert!(failed.is_failed());
/// assert_eq!(failed.error_messages(), ["too small"]);
///
/// let combined = ok & failed;
/// assert_eq!(combined.error_messages(), ["too small"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResult")]
pub struct ValidationResult {
    succeeded: bool,
    error_messages: Vec<String>,
}

/// Decoded result whose flag and messages contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inconsistent result: succeeded = {succeeded} with {message_count} error message(s)")]
pub struct InconsistentResult {
    pub succeeded: bool,
    pub message_count: usize,
}

#[derive(Deserialize)]
struct RawResult {
    succeeded: bool,
    #[serde(default)]
    error_messages: Vec<String>,
}

impl TryFrom<RawResult> for ValidationResult {
    type Error = InconsistentResult;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        if raw.succeeded == raw.error_messages.is_empty() {
            Ok(Self {
                succeeded: raw.succeeded,
                error_messages: raw.error_messages,
            })
        } else {
            Err(InconsistentResult {
                succeeded: raw.succeeded,
                message_count: raw.error_messages.len(),
            })
        }
    }
}

impl ValidationResult {
    /// A passing verdict with no messages.
    pub fn succeeded() -> Self {
        Self {
            succeeded: true,
            error_messages: Vec::new(),
        }
    }

    /// A failing verdict carrying `messages` in order.
    ///
    /// An empty message list is replaced by [`DEFAULT_FAILURE_MESSAGE`].
    pub fn failed<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let mut error_messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if error_messages.is_empty() {
            error_messages.push(DEFAULT_FAILURE_MESSAGE.to_string());
        }

        Self {
            succeeded: false,
            error_messages,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn is_failed(&self) -> bool {
        !self.succeeded
    }

    /// Failure messages in the order they were received.
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn into_error_messages(self) -> Vec<String> {
        self.error_messages
    }

    /// Merge two verdicts, keeping `self`'s messages ahead of `other`'s.
    pub fn combine(self, other: Self) -> Self {
        if self.succeeded && other.succeeded {
            return Self::succeeded();
        }

        Self::failed(self.error_messages.into_iter().chain(other.error_messages))
    }

    /// Convert into a Stillwater `Validation` for accumulation.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<String>> {
        if self.succeeded {
            return Validation::success(());
        }

        let failures: Vec<Validation<(), NonEmptyVec<String>>> = self
            .error_messages
            .into_iter()
            .map(|message| Validation::fail(message))
            .collect();

        Validation::all_vec(failures).map(|_| ())
    }
}

impl From<Validation<(), NonEmptyVec<String>>> for ValidationResult {
    fn from(validation: Validation<(), NonEmptyVec<String>>) -> Self {
        match validation {
            Validation::Success(()) => Self::succeeded(),
            Validation::Failure(errors) => Self::failed(errors.iter().cloned()),
        }
    }
}

impl BitAnd for ValidationResult {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}
