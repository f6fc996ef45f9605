//! Error taxonomy for the TapPay client.
//!
//! Every failure raised by this crate is one of four kinds:
//!
//! - [`Error::Validation`] — caller-supplied data violates a request
//!   contract. Fix the input and rebuild; retrying the same request cannot
//!   succeed.
//! - [`Error::Configuration`] — authentication or setup problem, such as a
//!   rejected partner key. Requires operator intervention.
//! - [`Error::Connection`] — transport-level failure: timeout, refused
//!   connection, unexpected HTTP status, or a response body that is not
//!   valid JSON. Potentially transient.
//! - [`Error::Api`] — the gateway accepted the request but rejected it
//!   logically. Carries the gateway's numeric status code, its message, and
//!   the full response body.
//!
//! The client performs a single attempt per call and never retries; retry
//! policy belongs to the caller.

use serde_json::Value;

/// Errors surfaced by request validation and [`execute`](crate::payment::PaymentRequest::execute).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller-supplied data violates a request contract.
    #[error("{0}")]
    Validation(String),

    /// Authentication or setup problem.
    #[error("{0}")]
    Configuration(String),

    /// Transport-level or parse failure.
    #[error("{0}")]
    Connection(String),

    /// The gateway rejected the request with a nonzero `status` code.
    #[error("API returned status {code}: {message}")]
    Api {
        /// The gateway's numeric `status` field.
        code: i64,
        /// The gateway's `msg` field.
        message: String,
        /// The full parsed response body.
        body: Value,
    },
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Whether a caller may reasonably retry the call with backoff.
    ///
    /// Only [`Error::Connection`] qualifies; the other kinds require the
    /// input, the setup, or the gateway state to change first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_connection_errors_are_retryable() {
        assert!(Error::Connection("timed out".to_string()).is_retryable());
        assert!(!Error::Validation("bad amount".to_string()).is_retryable());
        assert!(!Error::Configuration("bad key".to_string()).is_retryable());
        assert!(
            !Error::Api {
                code: 421,
                message: "declined".to_string(),
                body: json!({"status": 421}),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_api_error_display_includes_code_and_message() {
        let err = Error::Api {
            code: 10003,
            message: "Parameter error".to_string(),
            body: json!({"status": 10003, "msg": "Parameter error"}),
        };
        assert_eq!(err.to_string(), "API returned status 10003: Parameter error");
    }
}
