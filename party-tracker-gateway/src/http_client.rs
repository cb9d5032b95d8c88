//! Generic HTTP request execution helpers.
//!
//! One place for the request/response plumbing shared by every verb helper:
//! sending the request, logging, mapping transport failures, and rejecting
//! non-2xx responses. The collection endpoint has no error envelope to
//! unwrap, so a non-2xx status is surfaced as-is with its body attached.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};

/// Maximum number of bytes of a response body to include in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP helper function set.
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return the response body on success.
    ///
    /// Unified processing: send the request, log, map errors. Fails with
    /// [`GatewayError::Network`] or [`GatewayError::Timeout`] when the round
    /// trip itself breaks, and [`GatewayError::Status`] for any non-2xx
    /// response.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<String> {
        log::debug!("{method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                GatewayError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response.text().await.map_err(|e| GatewayError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        if !status.is_success() {
            log::warn!("{method} {url} failed with HTTP {status}");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(body: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            GatewayError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Truncate a response body for debug logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        s.to_string()
    } else {
        let mut end = LOG_BODY_LIMIT;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
    }
}
