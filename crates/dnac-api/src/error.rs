use thiserror::Error;

/// Top-level error type for the `dnac-api` crate.
///
/// Covers authentication, transport, API-level failures, and response
/// decoding. `dnac-cli` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token exchange failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success HTTP status from the controller, with the raw body.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A named resource did not exist on the controller.
    #[error("{resource} '{identifier}' not found")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates the session token has
    /// expired and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        match self {
            Self::Authentication { .. } => true,
            Self::Api { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Api { status: 404, .. }
        )
    }
}
