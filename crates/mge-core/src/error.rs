//! # Error Types
//!
//! Errors raised while constructing the leaf value types of the MGE. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Aggregate-level inconsistencies live in `mge-expediente`; this crate only
//! rejects values that are malformed on their own (an inverted process
//! calendar, an unparseable level tag, an empty process id).

use thiserror::Error;

/// Top-level error type for the MGE leaf types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MgeError {
    /// An electoral process violates its own invariants.
    #[error("invalid electoral process: {0}")]
    InvalidProcess(String),

    /// A textual identifier or tag could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}
