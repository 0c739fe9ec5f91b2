/// Core error types for Roster
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Another live record already holds this email
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),
}
