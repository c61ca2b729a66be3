//! Transport error taxonomy shared by the client and the resource services.

use thiserror::Error;

/// Classified failure of a backend call.
///
/// Screens branch on this to produce differentiated feedback: a timeout and
/// an unreachable host suggest "check your connection", a status carries the
/// backend's own message, a malformed response is a client/backend version
/// mismatch. Credential rejection during login is deliberately *not* an
/// `ApiError`; see [`crate::session::LoginOutcome`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured timeout elapsed without a response.
    #[error("request timed out")]
    Timeout,

    /// The host could not be reached at all (refused, DNS, no route).
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Anything else the transport reported.
    #[error("request failed: {0}")]
    Other(String),
}

impl ApiError {
    /// Classify a `reqwest` transport error.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Unreachable(e.to_string())
        } else {
            ApiError::Other(e.to_string())
        }
    }

    /// True when the server rejected the request as unauthorized or invalid,
    /// the statuses a credential exchange uses to signal bad credentials.
    pub(crate) fn is_credential_rejection(&self) -> bool {
        matches!(
            self,
            ApiError::Status {
                status: 400 | 401 | 403,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejection_statuses() {
        let unauthorized = ApiError::Status {
            status: 401,
            body: String::new(),
        };
        assert!(unauthorized.is_credential_rejection());

        let server_error = ApiError::Status {
            status: 500,
            body: String::new(),
        };
        assert!(!server_error.is_credential_rejection());

        assert!(!ApiError::Timeout.is_credential_rejection());
    }
}
