// ── Core error types ──
//
// Errors surfaced to section views. Transport details are folded into a
// handful of variants by the `From<folio_api::Error>` impl; the message a
// view displays comes from `user_message()`.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to content store at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Content store request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {message}")]
    NotFound { message: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Rejected by content store: {message}")]
    Rejected {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The bare message a view shows for this failure. Empty when the
    /// failure carried no message of its own.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConnectionFailed { url, .. } => format!("Cannot reach {url}"),
            Self::Timeout => "Request timed out".into(),
            Self::NotFound { message }
            | Self::Rejected { message, .. }
            | Self::ValidationFailed { message }
            | Self::Config { message }
            | Self::Internal(message) => message.trim().to_owned(),
        }
    }

    /// [`user_message`](Self::user_message), or `fallback` when it is empty.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.user_message();
        if message.is_empty() {
            fallback.to_owned()
        } else {
            message
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<folio_api::Error> for CoreError {
    fn from(err: folio_api::Error) -> Self {
        match err {
            folio_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.origin().ascii_serialization())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Rejected {
                        message: e.to_string(),
                        status: err.status(),
                    }
                }
            }
            folio_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            folio_api::Error::Api { status: 404, message } => CoreError::NotFound { message },
            folio_api::Error::Api { status: 422, message } => {
                CoreError::ValidationFailed { message }
            }
            folio_api::Error::Api { status, message } => CoreError::Rejected {
                message,
                status: Some(status),
            },
            folio_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Unexpected response from content store: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_detail_becomes_user_message() {
        let err = CoreError::from(folio_api::Error::Api {
            status: 503,
            message: "Network error".into(),
        });
        assert!(matches!(err, CoreError::Rejected { status: Some(503), .. }));
        assert_eq!(err.user_message(), "Network error");
    }

    #[test]
    fn status_codes_map_to_variants() {
        let not_found = CoreError::from(folio_api::Error::Api {
            status: 404,
            message: "Project not found".into(),
        });
        let invalid = CoreError::from(folio_api::Error::Api {
            status: 422,
            message: "Field required".into(),
        });
        assert!(matches!(not_found, CoreError::NotFound { .. }));
        assert!(matches!(invalid, CoreError::ValidationFailed { .. }));
    }

    #[test]
    fn empty_message_uses_fallback() {
        let err = CoreError::Rejected {
            message: "  ".into(),
            status: None,
        };
        assert_eq!(err.message_or("Failed to load content"), "Failed to load content");
    }
}
