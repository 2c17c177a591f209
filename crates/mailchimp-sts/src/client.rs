//! STS API client.

use tracing::{debug, warn};

use crate::config::{Config, Method};
use crate::error::{Error, Result};
use crate::request::{SendOptions, SendRequest};
use crate::response::SendResponse;
use crate::transport::{HttpTransport, Transport};
use crate::wire::Form;

/// Headers sent with `SendEmail`.
const JSON_ACCEPT: [(&str, &str); 1] = [("Accept", "application/json")];

/// Mailchimp STS client.
///
/// Each client carries its own API key, so differently configured clients
/// can be used side by side.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client using the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self { config, transport })
    }

    /// Creates a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built. A missing API key
    /// is only reported when a call is made.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client with a custom transport.
    #[must_use]
    pub const fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Asks STS to verify a sender address.
    ///
    /// Returns `true` if the API answers 200 and `false` for any other status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] without an API key, or a transport
    /// error if the request cannot be made.
    pub async fn verify_email_address(&self, email: &str) -> Result<bool> {
        let api_key = self.config.api_key()?;
        let url = self.config.endpoint(Method::VerifyEmailAddress)?;

        let mut form = Form::new();
        form.push(&["email"], email);
        form.push(&["apikey"], api_key.expose());

        debug!(
            method = %Method::VerifyEmailAddress,
            datacenter = api_key.datacenter(),
            "Sending STS request"
        );
        let response = self.transport.post(url, &form, &[]).await?;
        debug!(status = response.status, "STS response");

        if response.status != 200 {
            warn!(status = response.status, "Email address verification not accepted");
        }
        Ok(response.status == 200)
    }

    /// Sends an email.
    ///
    /// All options are validated before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] without an API key, a validation
    /// error ([`Error::MissingField`], [`Error::RecipientMismatch`]) for bad
    /// options, [`Error::Api`] for a non-2xx response, or a transport or JSON
    /// error.
    pub async fn send_email(&self, options: &SendOptions) -> Result<SendResponse> {
        let api_key = self.config.api_key()?;
        let form = SendRequest::build(options)?.to_form(api_key.expose());
        let url = self.config.endpoint(Method::SendEmail)?;

        debug!(
            method = %Method::SendEmail,
            datacenter = api_key.datacenter(),
            params = form.len(),
            "Sending STS request"
        );
        let response = self.transport.post(url, &form, &JSON_ACCEPT).await?;
        debug!(status = response.status, "STS response");

        if !response.is_success() {
            warn!(status = response.status, "SendEmail failed");
            return Err(Error::Api {
                status: response.status,
                body: response.body,
            });
        }

        SendResponse::from_body(&response.body)
    }
}
