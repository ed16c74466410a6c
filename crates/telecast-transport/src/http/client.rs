//! `reqwest`-backed [`Transport`] implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use tracing::{debug, info};

use telecast_core::{
    ApiResult, DEFAULT_API_URL, Response, Transport, TransportError, TransportResult, api_url,
    decode_envelope, file_url,
};

/// Default connect and request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const REDACTED: &str = "<redacted>";

/// Posts rendered requests to `<api_url>/bot<token>/<method>` as JSON.
///
/// The token is held as a [`SecretString`] and never appears in logs or
/// error messages.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    token: SecretString,
    api_url: String,
}

impl HttpTransport {
    /// Creates a transport for the public Bot API with default timeouts.
    pub fn new(token: impl Into<String>) -> TransportResult<Self> {
        Self::builder(token).build()
    }

    /// Starts configuring a transport.
    pub fn builder(token: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder {
            token: SecretString::from(token.into()),
            api_url: DEFAULT_API_URL.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Base URL of the Bot API server.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Download URL of a file returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        file_url(&self.api_url, self.token.expose_secret(), file_path)
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    token: SecretString,
    api_url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpTransportBuilder {
    /// Overrides the server, e.g. for a local Bot API server.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the TCP connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> TransportResult<HttpTransport> {
        let client = ClientBuilder::new()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError::Io(e.without_url().to_string()))?;

        info!(api_url = %self.api_url, "HTTP transport ready");
        Ok(HttpTransport {
            client,
            token: self.token,
            api_url: self.api_url,
        })
    }
}

/// Maps a `reqwest` failure, stripping the tokenized URL from the message.
fn map_send_error(err: reqwest::Error, redacted_url: &str) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::ConnectionFailed {
            url: redacted_url.to_string(),
            reason: err.without_url().to_string(),
        }
    } else {
        TransportError::Io(err.without_url().to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, body: Map<String, Value>) -> ApiResult<Response> {
        let url = api_url(&self.api_url, self.token.expose_secret(), method);
        let redacted = api_url(&self.api_url, REDACTED, method);
        debug!(method, url = %redacted, "POST");

        let started = Instant::now();
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(e, &redacted))?;
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| map_send_error(e, &redacted))?;
        let elapsed = started.elapsed();

        debug!(method, status, elapsed_ms = elapsed.as_millis() as u64, "API response");
        decode_envelope(method, status, &text, elapsed)
    }
}
