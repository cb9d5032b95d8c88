use serde::{Deserialize, Serialize};

/// Unified error type for all gateway operations.
///
/// Every variant represents a transport-level failure of one round trip
/// against the collection endpoint. The view-state layer treats them all
/// the same way — the failed operation leaves its state untouched — but
/// the variants are kept structured so a future UI can report them without
/// a redesign. All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken pipe mid-response, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status code.
    ///
    /// This covers validation rejections, missing records (an update or
    /// delete against an id the server no longer knows), and server errors
    /// alike; the gateway does not distinguish them.
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, as returned by the server.
        body: String,
    },

    /// Failed to parse the server's response body as JSON.
    Parse {
        /// Details about the parse failure.
        detail: String,
    },
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;
