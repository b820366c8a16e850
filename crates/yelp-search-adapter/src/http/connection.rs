/*
[INPUT]:  Signed requests from the client
[OUTPUT]: Status and full body of one HTTP exchange
[POS]:    HTTP layer - transport seam and connection lifecycle
[UPDATE]: When changing the HTTP stack or connection handling
*/

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::http::{ClientConfig, Result, SignedRequest, YelpError};

/// An open HTTP exchange whose body has not been read yet
#[async_trait]
pub trait Connection: Send {
    fn status(&self) -> StatusCode;

    /// Read the full response body
    async fn read(&mut self) -> Result<String>;

    /// Release the connection
    fn close(&mut self);
}

/// Opens connections for signed GET requests
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn open(&self, request: &SignedRequest) -> Result<Box<dyn Connection>>;
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Closes the wrapped connection exactly once, when dropped
pub(crate) struct ConnectionGuard {
    inner: Box<dyn Connection>,
}

impl ConnectionGuard {
    pub(crate) fn new(inner: Box<dyn Connection>) -> Self {
        Self { inner }
    }
}

impl Deref for ConnectionGuard {
    type Target = dyn Connection;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl DerefMut for ConnectionGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut()
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.inner.close();
    }
}

/// Default transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn open(&self, request: &SignedRequest) -> Result<Box<dyn Connection>> {
        let response = self
            .http_client
            .get(request.url.clone())
            .header(AUTHORIZATION, &request.authorization)
            .send()
            .await?;

        debug!(status = %response.status(), url = %request.url.path(), "connection opened");

        Ok(Box::new(ReqwestConnection {
            status: response.status(),
            response: Some(response),
        }))
    }
}

struct ReqwestConnection {
    status: StatusCode,
    response: Option<reqwest::Response>,
}

#[async_trait]
impl Connection for ReqwestConnection {
    fn status(&self) -> StatusCode {
        self.status
    }

    async fn read(&mut self) -> Result<String> {
        let response = self
            .response
            .take()
            .ok_or_else(|| YelpError::Connection("response body already consumed".to_string()))?;
        Ok(response.text().await?)
    }

    fn close(&mut self) {
        if self.response.take().is_some() {
            debug!(status = %self.status, "connection closed before body was read");
        }
    }
}
