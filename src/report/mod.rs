//! Serializable reports of validation runs.
//!
//! A report records the verdict of a run together with the strategy it ran
//! under, so results can be stored or shipped to another process. Decoding
//! re-checks that a report's result is internally consistent.

use crate::core::{Strategy, ValidationResult};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ReportError;

/// Version identifier for the report format
pub const REPORT_VERSION: u32 = 1;

/// Outcome of one validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Report format version
    pub version: u32,

    /// Strategy the run was bound to
    pub strategy: Strategy,

    /// Number of rule nodes evaluated before the run ended
    pub nodes_evaluated: usize,

    /// Aggregated verdict
    pub result: ValidationResult,
}

impl ValidationReport {
    pub fn new(strategy: Strategy, nodes_evaluated: usize, result: ValidationResult) -> Self {
        Self {
            version: REPORT_VERSION,
            strategy,
            nodes_evaluated,
            result,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    /// Compact binary encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    fn check_version(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_report() -> ValidationReport {
        ValidationReport::new(
            Strategy::CompleteValidation,
            4,
            ValidationResult::failed(["too small", "not even"]),
        )
    }

    #[test]
    fn json_round_trip() {
        let report = failed_report();

        let json = report.to_json().unwrap();
        let decoded = ValidationReport::from_json(&json).unwrap();

        assert_eq!(decoded, report);
    }

    #[test]
    fn binary_round_trip() {
        let report = ValidationReport::new(Strategy::FailFast, 1, ValidationResult::succeeded());

        let bytes = report.to_binary().unwrap();
        let decoded = ValidationReport::from_binary(&bytes).unwrap();

        assert_eq!(decoded, report);
    }

    #[test]
    fn newer_versions_are_rejected() {
        let mut report = failed_report();
        report.version = REPORT_VERSION + 1;
        let json = report.to_json().unwrap();

        let result = ValidationReport::from_json(&json);

        assert!(matches!(
            result,
            Err(ReportError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn version_error_names_both_versions() {
        let error = ReportError::UnsupportedVersion {
            found: 7,
            supported: REPORT_VERSION,
        };

        assert_eq!(
            error.to_string(),
            "report format version 7 is not readable, expected 1"
        );
    }

    #[test]
    fn inconsistent_result_fails_to_decode() {
        let json = r#"{
            "version": 1,
            "strategy": "FailFast",
            "nodes_evaluated": 1,
            "result": { "succeeded": false, "error_messages": [] }
        }"#;

        let result = ValidationReport::from_json(json);

        assert!(matches!(result, Err(ReportError::DeserializationFailed(_))));
    }

    #[test]
    fn malformed_binary_fails_to_decode() {
        let result = ValidationReport::from_binary(&[0xff]);
        assert!(matches!(result, Err(ReportError::DeserializationFailed(_))));
    }
}
