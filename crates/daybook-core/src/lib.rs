//! # Daybook Core
//!
//! Foundational types, clock abstraction, and errors for the Daybook
//! in-memory user directory.
//!
//! This crate holds everything the store and its callers share: the data
//! records that cross the API boundary, the injected time source that makes
//! time-dependent behavior deterministic in tests, and the error taxonomy.
//!
//! ## Key Traits
//!
//! - [`Clock`]: Time abstraction for testability
//!
//! ## Key Types
//!
//! - [`User`] / [`UserProfile`]: A registered user and the nameless payload
//!   of an update
//! - [`Event`] / [`EventInput`]: An immutable activity record and its
//!   unstamped input form
//! - [`DirectoryError`]: Expected, recoverable operation outcomes

pub mod clock;
pub mod error;
pub mod event;
pub mod user;

// Re-export main types
pub use clock::*;
pub use error::*;
pub use event::*;
pub use user::*;
