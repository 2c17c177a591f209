//! Client configuration types.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MAILCHIMP_STS_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "MAILCHIMP_STS_BASE_URL";

/// API version path segment.
const API_VERSION: &str = "1.0";

/// Mailchimp API key.
///
/// The key ends in `-<datacenter>` (e.g. `abc123-us1`); the datacenter picks
/// the regional STS host. The secret is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::InvalidConfig("API key is empty".into()));
        }
        Ok(Self(key))
    }

    /// Returns the datacenter segment: everything after the last `-`.
    ///
    /// The key format is not checked; a key without `-` is returned whole.
    #[must_use]
    pub fn datacenter(&self) -> &str {
        self.0.rsplit('-').next().unwrap_or(&self.0)
    }

    /// Returns the raw key.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.contains('-') {
            write!(f, "ApiKey(***-{})", self.datacenter())
        } else {
            f.write_str("ApiKey(***)")
        }
    }
}

/// STS API methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `SendEmail`.
    SendEmail,
    /// `VerifyEmailAddress`.
    VerifyEmailAddress,
}

impl Method {
    /// Returns the method name used in the endpoint path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendEmail => "SendEmail",
            Self::VerifyEmailAddress => "VerifyEmailAddress",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// STS client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key; every call fails with [`Error::MissingCredential`] without one.
    pub api_key: Option<ApiKey>,
    /// Replaces `http://{datacenter}.sts.mailchimp.com` when set.
    pub base_url: Option<String>,
    /// Request timeout. Uses the HTTP client default when unset.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Creates a configuration with an API key.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key: Some(api_key),
            ..Self::default()
        }
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads configuration from `MAILCHIMP_STS_API_KEY` and the optional
    /// `MAILCHIMP_STS_BASE_URL`.
    ///
    /// A missing or empty key leaves the configuration without a credential.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(API_KEY_ENV).and_then(|key| ApiKey::new(key).ok()),
            base_url: lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Returns the API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] if no key is configured.
    pub fn api_key(&self) -> Result<&ApiKey> {
        self.api_key.as_ref().ok_or(Error::MissingCredential)
    }

    /// Builds the endpoint URL for an API method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] without a key, or a URL error if
    /// the resulting endpoint is malformed.
    pub fn endpoint(&self, method: Method) -> Result<Url> {
        let api_key = self.api_key()?;
        let base = self.base_url.as_ref().map_or_else(
            || format!("http://{}.sts.mailchimp.com", api_key.datacenter()),
            |base| base.trim_end_matches('/').to_string(),
        );
        Ok(Url::parse(&format!("{base}/{API_VERSION}/{method}"))?)
    }
}

/// Builder for client configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder with no API key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn api_key(mut self, key: impl Into<String>) -> Result<Self> {
        self.config.api_key = Some(ApiKey::new(key)?);
        Ok(self)
    }

    /// Overrides the endpoint base URL (scheme and host).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
