//! CLI error types with miette diagnostics.
//!
//! Maps `dnac_api::Error` variants into user-facing errors with
//! actionable help text and an exit-code table.

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    #![allow(dead_code)]
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("DNA Center details must be set via environment variables before running")]
    #[diagnostic(
        code(dnac::missing_environment),
        help(
            "   export DNAC_IP=192.168.100.1\n\
             \u{20}  export DNAC_USERNAME=admin\n\
             \u{20}  export DNAC_PASSWORD=password"
        )
    )]
    MissingEnvironment,

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to DNA Center at {url}")]
    #[diagnostic(
        code(dnac::connection_failed),
        help("Check that the controller is reachable at this address.")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(dnac::auth_failed),
        help("Verify DNAC_USERNAME and DNAC_PASSWORD.")
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(
        code(dnac::not_found),
        help("Run: wlanmgmt {list_command} to see available entries")
    )]
    NotFound {
        resource: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(dnac::api_error))]
    ApiError { status: u16, message: String },

    /// A listing response did not decode; one malformed record fails the
    /// whole batch.
    #[error("Parameters invalid: {message}")]
    #[diagnostic(
        code(dnac::decode),
        help("The controller returned a record missing an expected field.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dnac::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── dnac_api::Error → CliError mapping ───────────────────────────────

impl From<dnac_api::Error> for CliError {
    fn from(err: dnac_api::Error) -> Self {
        match err {
            dnac_api::Error::Authentication { message } => Self::AuthFailed { message },

            dnac_api::Error::Transport(e) => {
                if e.is_connect() || e.is_timeout() {
                    Self::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "(unknown)".into()),
                        source: e.into(),
                    }
                } else {
                    Self::ApiError {
                        status: e.status().map_or(0, |s| s.as_u16()),
                        message: e.to_string(),
                    }
                }
            }

            dnac_api::Error::InvalidUrl(e) => Self::Validation {
                field: "controller".into(),
                reason: e.to_string(),
            },

            dnac_api::Error::Tls(message) => Self::ConnectionFailed {
                url: "(tls)".into(),
                source: message.into(),
            },

            dnac_api::Error::Api { status, message } => Self::ApiError { status, message },

            dnac_api::Error::NotFound {
                resource,
                identifier,
            } => Self::NotFound {
                list_command: match resource {
                    "device" => "device_list".into(),
                    "template" => "template_list".into(),
                    _ => format!("{resource}_list"),
                },
                resource: resource.into(),
                identifier,
            },

            dnac_api::Error::Deserialization { message, .. } => Self::Decode { message },
        }
    }
}
