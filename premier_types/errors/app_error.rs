use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown filter mode '{0}', expected 'precedence' or 'combined'")]
    InvalidFilterMode(String),
}
