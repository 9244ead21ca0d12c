//! Error handling module for typeahead.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! [`TypeaheadError`] wraps the more specific kinds:
//! - [`LoadError`] for candidate loading and validation
//! - [`ConfigError`] for configuration files and values
//!
//! # Example
//!
//! ```rust
//! use typeahead::error::{LoadError, Result, TypeaheadError};
//!
//! fn check(code: &str) -> Result<()> {
//!     if code.is_empty() {
//!         return Err(TypeaheadError::Load(LoadError::InvalidFormat(
//!             "empty code".to_string(),
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("AL").is_ok());
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, LoadError, Result, TypeaheadError};
