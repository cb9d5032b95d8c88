//! REST implementation of the party gateway.

mod gateway;
mod http;

use std::time::Duration;

use reqwest::Client;

use crate::types::PartyId;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Collection route on the remote API.
pub(crate) const COLLECTION_PATH: &str = "/political_parties";

/// REST gateway bound to one party tracker backend.
pub struct RestPartyGateway {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl RestPartyGateway {
    /// Create a gateway for the backend at `base_url`
    /// (e.g. `http://localhost:8000`). A trailing slash is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: create_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the collection itself (list, create). The backend routes the
    /// collection verbs with a trailing slash.
    pub(crate) fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}/", self.base_url)
    }

    /// URL of a single item (update, delete).
    pub(crate) fn item_url(&self, id: PartyId) -> String {
        format!("{}{COLLECTION_PATH}/{id}", self.base_url)
    }
}

/// Create an HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
