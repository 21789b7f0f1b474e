use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Carries the offending field name and a caller-facing message.
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
