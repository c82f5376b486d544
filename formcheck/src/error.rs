use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A surfaced validation message for a specific field.
///
/// Returned by [`Form::report_validity`](crate::Form::report_validity) so the
/// embedding application can render what the native bubble would have shown.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
