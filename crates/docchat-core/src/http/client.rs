//! HTTP backend client struct and request helpers.

use crate::BackendError;

use super::config::HttpBackendConfig;

/// reqwest-backed `BackendClient`.
pub struct HttpBackendClient {
    pub(crate) config: HttpBackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackendClient {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BackendError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Full URL of an `/api/<route>` endpoint.
    pub(crate) fn endpoint(&self, route: &str) -> String {
        format!("{}/api/{}", self.config.base_url.trim_end_matches('/'), route)
    }

    /// Send a prepared request and decode the JSON body, mapping transport
    /// and backend-reported failures to `BackendError`.
    pub(crate) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, BackendError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        super::wire::interpret(status, &body)
    }
}

fn transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Network(err.to_string())
    }
}
