//! Errors raised while moving reports in and out of their encoded forms.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be written as JSON or bincode.
    #[error("cannot encode validation report: {0}")]
    SerializationFailed(String),

    /// The input is not a well-formed report, or its result breaks the
    /// succeeded/messages invariant.
    #[error("cannot decode validation report: {0}")]
    DeserializationFailed(String),

    #[error("report format version {found} is not readable, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
