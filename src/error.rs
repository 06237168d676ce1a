//! Error types for the Eventbrite client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by the Eventbrite API on non-200 responses.
///
/// `error` is a stable constant (e.g. `NOT_FOUND`, `VENUE_AND_ONLINE`) and is
/// what callers should branch on. `error_description` is developer-facing text
/// that may change between releases or locales. `status_code` mirrors the HTTP
/// status of the response.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("Eventbrite API: [Status code - {status_code}] {error_description}")]
#[serde(default)]
pub struct ApiError {
    /// Stable error key
    pub error: String,
    /// Human-readable description
    pub error_description: String,
    /// Echoed HTTP status code
    pub status_code: u16,
}

/// Why a call stopped waiting
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancelled {
    #[error("context cancelled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Coarse classification of [`Error`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client misconfiguration (missing token, bad settings)
    Configuration,
    /// A request descriptor failed its required-field check
    Validation,
    /// The caller's context fired first
    Cancellation,
    /// Network-level failure
    Transport,
    /// The API answered with an error envelope
    Api,
    /// A body could not be encoded or decoded
    Decode,
}

/// The main error type for the Eventbrite client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("eventbrite: Token missing")]
    MissingToken,

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Validation failed: '{field}' is required")]
    Validation { field: String },

    // ============================================================================
    // Cancellation
    // ============================================================================
    #[error("Request aborted: {0}")]
    Cancelled(#[from] Cancelled),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a validation error for a required field
    pub fn required(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingToken | Error::InvalidConfigValue { .. } | Error::InvalidUrl(_) => {
                ErrorKind::Configuration
            }
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Cancelled(_) => ErrorKind::Cancellation,
            Error::Http(_) => ErrorKind::Transport,
            Error::Api(_) => ErrorKind::Api,
            Error::Encode(_) | Error::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The API error envelope, if the remote service returned one
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for the Eventbrite client
pub type Result<T> = std::result::Result<T, Error>;
