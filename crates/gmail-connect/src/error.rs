//! Error types for the Gmail connect backend.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::http::StatusCode;

/// Missing or invalid configuration, raised when a client is constructed.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// One or more required environment variables are unset
    #[error("Missing {service} environment variables: {}", .variables.join(", "))]
    Missing {
        /// Service the variables belong to
        service: &'static str,
        /// Names of the unset variables
        variables: Vec<&'static str>,
    },

    /// A configured URL could not be parsed
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Which setting held the URL
        name: &'static str,
        /// Parser error
        source: url::ParseError,
    },
}

impl ConfigError {
    /// Create a missing-variables error from `(name, is_missing)` checks.
    #[must_use]
    pub fn missing(
        service: &'static str,
        checks: impl IntoIterator<Item = (&'static str, bool)>,
    ) -> Self {
        let variables =
            checks.into_iter().filter_map(|(name, missing)| missing.then_some(name)).collect();
        Self::Missing { service, variables }
    }
}

/// Errors from the outbound HTTP clients (Google, Supabase).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Client could not be constructed from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Remote service answered with a non-success status
    #[error("{service} returned {status}: {message}")]
    Api {
        /// Which remote service answered
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },
}

impl ClientError {
    /// Create an API status error.
    #[must_use]
    pub fn api(service: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api { service, status, message: message.into() }
    }

    /// HTTP status reported by the remote service, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Why the OAuth `state` parameter could not be used.
#[derive(thiserror::Error, Debug)]
pub enum StateError {
    /// No `state` query parameter
    #[error("state parameter is missing")]
    Missing,

    /// Not valid base64
    #[error("state is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid JSON
    #[error("state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON decoded but carries no usable `userId`
    #[error("state has no userId")]
    MissingUserId,
}

impl StateError {
    /// Short label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Base64(_) => "base64",
            Self::Json(_) => "json",
            Self::MissingUserId => "missing_user_id",
        }
    }
}

/// Terminal outcomes of the Gmail OAuth callback.
#[derive(thiserror::Error, Debug)]
pub enum CallbackError {
    /// No `code` query parameter
    #[error("No authorization code provided")]
    MissingCode,

    /// `state` could not be decoded into a user
    #[error("Invalid state parameter: {0}")]
    InvalidState(#[from] StateError),

    /// Token endpoint answered without an access token
    #[error("Token response did not include an access token")]
    MissingAccessToken,

    /// Profile update was rejected by the datastore
    #[error("Error updating profile: {0}")]
    Persistence(#[source] ClientError),

    /// Anything else: provider failure, misconfiguration
    #[error("Gmail callback error: {0}")]
    Unexpected(#[source] ClientError),
}

impl CallbackError {
    /// Message shown on the error page.
    pub const UNEXPECTED_MESSAGE: &'static str = "An unexpected error occurred";

    /// HTTP status of the rendered error page.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingCode | Self::InvalidState(_) | Self::MissingAccessToken => {
                StatusCode::BAD_REQUEST
            }
            Self::Persistence(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message for the error page.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCode => "No authorization code provided",
            Self::InvalidState(_) => "Invalid state parameter",
            Self::MissingAccessToken => "Failed to get access token from Google",
            Self::Persistence(_) => "Failed to save Gmail connection",
            Self::Unexpected(_) => Self::UNEXPECTED_MESSAGE,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for the callback flow.
pub type CallbackResult<T> = Result<T, CallbackError>;
