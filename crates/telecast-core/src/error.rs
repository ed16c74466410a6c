//! Unified error types for telecast.
//!
//! Errors fall into two families:
//!
//! - **Pre-flight** errors ([`ApiError::Capability`], [`ApiError::InvalidArgument`],
//!   [`ApiError::Serialization`]) are raised locally before any network
//!   activity. They are deterministic for the same input and indicate a bug in
//!   the caller.
//! - **Call** errors ([`ApiError::Transport`], [`ApiError::Remote`]) come from
//!   executing a request. The library never retries them itself.
//!
//! Inbound update parsing has its own [`EventError`].

use thiserror::Error;

use crate::capability::Capability;

// =============================================================================
// Transport Errors
// =============================================================================

/// Errors raised while moving a request over the wire.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Could not reach the remote host.
    #[error("connection failed: {url} - {reason}")]
    ConnectionFailed {
        /// The URL that failed to connect (token redacted).
        url: String,
        /// Reason for failure.
        reason: String,
    },

    /// The connect or request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-200 status and no API-level error.
    #[error("HTTP error #{status}")]
    HttpStatus {
        /// Raw HTTP status code.
        status: u16,
        /// Response body, as received.
        body: String,
    },

    /// The body was empty or not JSON.
    #[error("empty or non-JSON result: \"{body}\"")]
    InvalidBody {
        /// Raw HTTP status code.
        status: u16,
        /// Response body, as received.
        body: String,
    },

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl TransportError {
    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::InvalidBody { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// Error type for building and executing API requests.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The method does not support the requested behavior.
    #[error("method {method} requires capability {capability}")]
    Capability {
        /// The missing capability.
        capability: Capability,
        /// The API method the request targets.
        method: String,
    },

    /// Malformed caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value could not be converted to or from its JSON form.
    #[error("serialization of {type_name} failed: {reason}")]
    Serialization {
        /// Concrete type of the offending value.
        type_name: &'static str,
        /// Reason for failure.
        reason: String,
    },

    /// Network, timeout, status or body failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with `ok: false`.
    #[error("API error ({error_code}): {description}")]
    Remote {
        /// Remote error code.
        error_code: i64,
        /// Remote description.
        description: String,
    },
}

impl ApiError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a serialization error for the given type.
    pub fn serialization(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Serialization {
            type_name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors raised locally before any network activity.
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Self::Capability { .. } | Self::InvalidArgument(_) | Self::Serialization { .. }
        )
    }

    /// Returns `true` if a caller-side retry policy may reasonably retry.
    ///
    /// Only transport failures qualify; the library itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

// =============================================================================
// Event Errors
// =============================================================================

/// Errors raised while parsing inbound updates.
#[derive(Debug, Clone, Error)]
pub enum EventError {
    /// The envelope carries none of the known payload keys.
    #[error("update action not found in keys: {}", keys.join(", "))]
    UnrecognizedEvent {
        /// The envelope's `update_id`, when it carries one.
        update_id: Option<i64>,
        /// The envelope's top-level keys.
        keys: Vec<String>,
    },

    /// The envelope is not a JSON object or lacks its identifier.
    #[error("malformed update: {0}")]
    Malformed(String),

    /// A timestamp formatting directive was rejected.
    #[error("invalid timestamp format: {0}")]
    InvalidFormat(String),

    /// An epoch value is outside the representable range.
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}

impl EventError {
    /// Identifier of the update that failed to parse, if known.
    ///
    /// A polling loop uses it to move its offset past an update it cannot
    /// handle.
    pub fn update_id(&self) -> Option<i64> {
        match self {
            Self::UnrecognizedEvent { update_id, .. } => *update_id,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for update parsing.
pub type EventResult<T> = Result<T, EventError>;
