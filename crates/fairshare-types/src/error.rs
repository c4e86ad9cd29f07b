//! Error types for the FairShare core.
//!
//! All errors use the `FS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Caller parameter errors
//! - 9xx: General / internal errors
//!
//! Missing provider fields are deliberately **not** errors: the adapter
//! recovers them with documented defaults. An empty peer group is also not
//! an error; it simply fails the disclosure threshold.

use thiserror::Error;

/// Central error enum for all FairShare operations.
#[derive(Debug, Error)]
pub enum FairshareError {
    // =================================================================
    // Caller Parameter Errors (1xx)
    // =================================================================
    /// A caller-supplied parameter is outside its domain. The engine
    /// rejects the call rather than silently clamping.
    #[error("FS_ERR_100: Invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("FS_ERR_900: Internal error: {0}")]
    Internal(String),
}

impl FairshareError {
    /// Shorthand for the 1xx parameter rejection.
    #[must_use]
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, FairshareError>;
