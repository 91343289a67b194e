//! Unified error handling for rdsctl-core
//!
//! Two failure families exist: the remote call itself failed ([`ApiError`],
//! wrapped in [`RdsError::Api`]), or the call succeeded but the response did
//! not contain what the handle needed ([`RdsError::NotFound`],
//! [`RdsError::MissingKey`]).
//!
//! # Example
//!
//! ```rust
//! use rdsctl_core::{Action, ApiError, RdsError};
//!
//! let err = RdsError::Api {
//!     action: Action::DescribeDbInstances,
//!     source: ApiError::new("InvalidDBInstanceId.NotFound", "instance does not exist"),
//! };
//! assert!(err.is_not_found());
//! assert!(!err.is_retryable());
//! ```

use crate::action::Action;
use crate::config::ConfigError;
use thiserror::Error;

/// Failure reported by the remote API client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Error code returned by the service, e.g. `Throttling.User`
    pub code: String,
    /// Human readable message
    pub message: String,
    /// Request id echoed by the service, when available
    pub request_id: Option<String>,
    /// HTTP status of the failed call, when the client knows it
    pub status: Option<u16>,
}

impl ApiError {
    /// Create an error from a code and message
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
            status: None,
        }
    }

    /// Attach the request id
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Attach the HTTP status
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if the service reported a missing resource
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404) || self.code.ends_with(".NotFound") || self.code == "NotFound"
    }

    /// Returns true if the caller's credentials were rejected
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401 | 403))
            || self.code.starts_with("Forbidden")
            || self.code.starts_with("InvalidAccessKeyId")
            || self.code == "SignatureDoesNotMatch"
    }

    /// Returns true if the request was throttled
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        self.status == Some(429) || self.code.starts_with("Throttling")
    }

    /// Returns true if the service failed on its side (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|s| s >= 500)
            || self.code == "InternalError"
            || self.code == "ServiceUnavailable"
    }

    /// Returns true if repeating the call might succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.is_throttled() || self.is_server_error()
    }
}

/// Core error type for resource operations
#[derive(Error, Debug)]
pub enum RdsError {
    /// The remote call failed
    #[error("{action} failed: {source}")]
    Api {
        action: Action,
        #[source]
        source: ApiError,
    },

    /// A refresh found no item for the handle's identifier
    #[error("Failed to find {resource} data from {action} response. {id_key} = {id}")]
    NotFound {
        resource: &'static str,
        action: Action,
        id_key: &'static str,
        id: String,
    },

    /// A response lacked a key the operation depends on
    #[error("{action} response has no `{key}`")]
    MissingKey { action: Action, key: String },

    /// Caller-supplied parameters were rejected before any call was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// A response item could not be decoded into attributes
    #[error("Failed to decode {action} response: {source}")]
    Decode {
        action: Action,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, RdsError>;

impl RdsError {
    /// Returns true if this is a "not found" error, local or remote
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            RdsError::Api { source, .. } => source.is_not_found(),
            RdsError::NotFound { .. } => true,
            _ => false,
        }
    }

    /// Returns true if this is an authentication/authorization error
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            RdsError::Api { source, .. } => source.is_unauthorized(),
            _ => false,
        }
    }

    /// Returns true if this is a throttling error
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        match self {
            RdsError::Api { source, .. } => source.is_throttled(),
            _ => false,
        }
    }

    /// Returns true if this is a server error
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        match self {
            RdsError::Api { source, .. } => source.is_server_error(),
            _ => false,
        }
    }

    /// Returns true if the failure was raised before reaching the service
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, RdsError::Validation(_))
    }

    /// Returns true if this error is potentially retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            RdsError::Api { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// The operation this error came from, if any
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match self {
            RdsError::Api { action, .. }
            | RdsError::NotFound { action, .. }
            | RdsError::MissingKey { action, .. }
            | RdsError::Decode { action, .. } => Some(*action),
            RdsError::Validation(_) | RdsError::Config(_) => None,
        }
    }
}
