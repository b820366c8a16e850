/*
[INPUT]:  HTTP configuration (base URL, timeouts), authenticator, transport
[OUTPUT]: Configured client that signs, sends and decodes API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::connection::{ConnectionGuard, RawResponse, ReqwestTransport, Transport};
use crate::http::{
    ErrorHandler, HttpError, RequestAuthenticator, Result, SignedRequest, YelpError,
};
use crate::types::SearchParameters;

/// Base URL for the Yelp API
const API_BASE_URL: &str = "https://api.yelp.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Yelp API
#[derive(Debug, Clone)]
pub struct YelpClient {
    base_url: Url,
    authenticator: Arc<dyn RequestAuthenticator>,
    transport: Arc<dyn Transport>,
}

impl YelpClient {
    /// Create a new client with default configuration
    pub fn new(authenticator: impl RequestAuthenticator + 'static) -> Result<Self> {
        Self::with_config(authenticator, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        authenticator: impl RequestAuthenticator + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(authenticator, transport, &config.base_url)
    }

    /// Create a client over a custom transport
    pub fn with_transport(
        authenticator: impl RequestAuthenticator + 'static,
        transport: impl Transport + 'static,
        base_url: &str,
    ) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let prefix = format!("{}/", base_url.path());
            base_url.set_path(&prefix);
        }

        Ok(Self {
            base_url,
            authenticator: Arc::new(authenticator),
            transport: Arc::new(transport),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint path, keeping any base path prefix
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Sign and send a GET request, decoding the JSON body into `T`.
    ///
    /// Fails with [`YelpError::MissingParameter`] before any network call
    /// when `params` is absent or empty.
    pub async fn make_request<T>(&self, path: &str, params: Option<&SearchParameters>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let params = match params {
            Some(params) if !params.is_empty() => params,
            _ => return Err(YelpError::missing_parameter("params")),
        };
        self.send_signed(path, params).await
    }

    /// Sign and send without the non-empty parameter check.
    ///
    /// Used by endpoints that identify their resource in the path.
    pub(crate) async fn send_signed<T>(&self, path: &str, params: &SearchParameters) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let request = self.authenticator.sign(&url, params)?;

        debug!(path, params = params.len(), "sending request");

        let response = self.make_connection(&request).await?;
        if !response.is_success() {
            let http_error = HttpError::new(response.status, response.body);
            let error = ErrorHandler::raise_error(&http_error);
            warn!(path, status = %http_error.status, code = ?error.code(), "API request failed");
            return Err(error);
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Open a connection, read the whole body, and close it.
    ///
    /// The connection is closed on every path out of this function,
    /// including a failed read.
    pub async fn make_connection(&self, request: &SignedRequest) -> Result<RawResponse> {
        let mut connection = ConnectionGuard::new(self.transport.open(request).await?);
        let status = connection.status();
        let body = connection.read().await?;
        Ok(RawResponse { status, body })
    }
}
