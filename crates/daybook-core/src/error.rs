//! Error types for the Daybook directory
//!
//! All variants are expected, recoverable outcomes returned as values to the
//! immediate caller, never thrown through the stack and never logged by the
//! store itself. An internal invariant violation (say, a buffer slot that
//! should be occupied but is not) is a programming defect and asserts; it is
//! deliberately not representable here.

use thiserror::Error;

/// Expected outcomes of directory operations that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The named user is not registered
    #[error("User {0} not found")]
    NotFound(String),

    /// A user with this name is already registered
    #[error("User {0} already exists")]
    DuplicateName(String),

    /// Another user already registered this email address
    #[error("User with email {0} already exists")]
    DuplicateEmail(String),
}

/// Result type alias for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
