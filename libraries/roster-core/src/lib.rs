//! Roster Core
//!
//! Domain types, validation, and error handling for the Roster user
//! directory service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Role`, `UserId`, and the validated
//!   `CreateUser`/`UpdateUser` payloads
//! - **Validation**: pure field-level checks producing [`validation::Violation`]
//!   lists; uniqueness is deliberately not a validation concern
//! - **Error Handling**: unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{Role, User};
//! use roster_core::validation;
//!
//! let payload = validation::validate_create(
//!     Some("Ann@Example.com"),
//!     Some("  Ann  "),
//!     None,
//! )
//! .expect("payload is valid");
//!
//! assert_eq!(payload.email, "ann@example.com");
//! assert_eq!(payload.name, "Ann");
//!
//! let user = User::new(payload.email, payload.name, Role::default());
//! assert_eq!(user.role, Role::User);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Unified error and result types
pub mod error;
/// Domain types
pub mod types;
/// Pure field-level validation
pub mod validation;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use types::{CreateUser, Role, UpdateUser, User, UserId};
