use core_types::CoreError;
use thiserror::Error;

/// Errors raised while building report parameters.
///
/// The reports themselves cannot fail: every arithmetic edge case has a
/// defined fallback value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidParameter { field: String, message: String },
}

impl AnalyticsError {
    pub fn invalid(field: &str, message: &str) -> Self {
        AnalyticsError::InvalidParameter {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(field, message) => {
                AnalyticsError::InvalidParameter { field, message }
            }
        }
    }
}
