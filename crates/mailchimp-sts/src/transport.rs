//! HTTP transport for STS requests.

use std::future::Future;

use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::wire::Form;

/// Status code and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues form-encoded POST requests.
///
/// Implemented by [`HttpTransport`]; tests substitute a recording transport.
pub trait Transport: Send + Sync {
    /// POSTs `form` to `url` with extra `headers` and returns the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    fn post(
        &self,
        url: Url,
        form: &Form,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Creates a transport from client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn post(
        &self,
        url: Url,
        form: &Form,
        headers: &[(&str, &str)],
    ) -> Result<RawResponse> {
        let mut request = self.http_client.post(url).form(form.pairs());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
