//! HTTP verb helpers for the REST gateway.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::RestPartyGateway;

impl RestPartyGateway {
    /// Perform a GET request and parse the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = HttpUtils::execute_request(self.client.get(url), "GET", url).await?;
        HttpUtils::parse_json(&body)
    }

    /// Perform a POST request with a JSON body and parse the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<T> {
        let body =
            HttpUtils::execute_request(self.client.post(url).json(payload), "POST", url).await?;
        HttpUtils::parse_json(&body)
    }

    /// Perform a PUT request with a JSON body and parse the JSON response.
    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<T> {
        let body =
            HttpUtils::execute_request(self.client.put(url).json(payload), "PUT", url).await?;
        HttpUtils::parse_json(&body)
    }

    /// Perform a DELETE request, discarding the response body.
    pub(crate) async fn delete(&self, url: &str) -> Result<()> {
        HttpUtils::execute_request(self.client.delete(url), "DELETE", url).await?;
        Ok(())
    }
}
