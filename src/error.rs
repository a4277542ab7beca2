//! Error types for regreport

use thiserror::Error;

use crate::model::ModelKind;

/// Errors that can occur while validating inputs or assembling a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Result payload carries a type tag outside the supported set
    #[error("unsupported result type '{tag}': expected a statsmodels, linearmodels or arch result")]
    UnsupportedResult { tag: String },

    /// Option key outside the allow-list, or an out-of-range option value
    #[error("invalid option '{key}': {message}")]
    InvalidOption { key: String, message: String },

    /// Comparison input contains a result that is not a panel model
    #[error("model comparison requires panel results, found '{kind}' at position {index}")]
    MixedComparison { kind: ModelKind, index: usize },

    /// Malformed result payload (missing or ill-typed attribute)
    #[error("malformed result payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl ReportError {
    /// Shorthand for an [`ReportError::InvalidOption`] with an owned key.
    pub(crate) fn invalid_option(key: &str, message: impl Into<String>) -> Self {
        ReportError::InvalidOption {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
