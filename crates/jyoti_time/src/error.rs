//! Error types for civil time handling.

/// Errors from UTC validation or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range.
    #[error("invalid UTC time: {0}")]
    InvalidUtc(&'static str),
    /// A UTC string could not be parsed.
    #[error("UTC parse error: {0}")]
    Parse(String),
}
