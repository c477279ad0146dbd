//! WS-Federation error types.
//!
//! Two kinds of failure exist. [`SignInError`] is the closed set of codes a
//! sign-in request can be rejected with; it travels inside the validation
//! result. [`WsFedError`] covers stores that fail outright and is returned
//! as `Err`. Configuration loading has its own
//! [`ConfigError`](crate::config::ConfigError).

use std::fmt;

use kc_storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for WS-Federation operations.
pub type WsFedResult<T> = Result<T, WsFedError>;

/// Infrastructure failures during WS-Federation processing.
#[derive(Debug, Error)]
pub enum WsFedError {
    /// A storage lookup failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error codes a sign-in request can be rejected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInError {
    /// The realm does not resolve to a usable WS-Federation relying party.
    InvalidRelyingParty,
}

impl SignInError {
    /// Returns the protocol error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRelyingParty => "invalid_relying_party",
        }
    }

    /// Returns the HTTP status code for rendering this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRelyingParty => 400,
        }
    }
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
