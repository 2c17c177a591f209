//! `SendEmail` request options and the wire-shaped request body.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::message::{Message, MessageOptions};
use crate::validate::{present, require};
use crate::wire::{Form, Recipients, WireMap};

/// `autogen_html` value used when the caller leaves it unset.
pub const DEFAULT_AUTOGEN_HTML: bool = true;

/// Caller-supplied options for a `SendEmail` call.
///
/// `message`, `track_opens` and `track_clicks` are required.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Message content and recipients.
    pub message: Option<MessageOptions>,
    /// Whether to track opens.
    pub track_opens: Option<bool>,
    /// Whether to track clicks.
    pub track_clicks: Option<bool>,
    /// Whether to generate an HTML body from the text body.
    /// Defaults to [`DEFAULT_AUTOGEN_HTML`].
    pub autogen_html: Option<bool>,
    /// Tags attached to the message.
    pub tags: Option<Recipients>,
}

impl SendOptions {
    /// Creates options for a message.
    #[must_use]
    pub fn new(message: MessageOptions) -> Self {
        Self {
            message: Some(message),
            ..Self::default()
        }
    }

    /// Sets open tracking.
    #[must_use]
    pub const fn track_opens(mut self, enabled: bool) -> Self {
        self.track_opens = Some(enabled);
        self
    }

    /// Sets click tracking.
    #[must_use]
    pub const fn track_clicks(mut self, enabled: bool) -> Self {
        self.track_clicks = Some(enabled);
        self
    }

    /// Sets HTML auto-generation.
    #[must_use]
    pub const fn autogen_html(mut self, enabled: bool) -> Self {
        self.autogen_html = Some(enabled);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags(mut self, tags: impl Into<Recipients>) -> Self {
        self.tags = Some(tags.into());
        self
    }
}

/// Wire-shaped `SendEmail` request body, without the API key.
///
/// Flags are carried as `"true"`/`"false"` strings, which is what the API
/// expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    /// Built message.
    pub message: Message,
    /// Open tracking flag.
    pub track_opens: String,
    /// Click tracking flag.
    pub track_clicks: String,
    /// HTML auto-generation flag.
    pub autogen_html: String,
    /// Tags, omitted when none were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<WireMap>,
}

impl SendRequest {
    /// Validates send options and builds the request body.
    ///
    /// The message is validated first, then the tracking flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the message, `track_opens` or
    /// `track_clicks` is missing, and propagates any error from
    /// [`Message::build`] unchanged.
    pub fn build(options: &SendOptions) -> Result<Self> {
        let autogen_html = options.autogen_html.or(Some(DEFAULT_AUTOGEN_HTML));

        let message = options
            .message
            .as_ref()
            .ok_or(Error::MissingField("message"))?;
        let message = Message::build(message)?;
        let track_opens = require("track_opens", options.track_opens)?;
        let track_clicks = require("track_clicks", options.track_clicks)?;
        let autogen_html = require("autogen_html", autogen_html)?;
        let tags = present(options.tags.clone()).map(WireMap::encode);

        Ok(Self {
            message,
            track_opens: track_opens.to_string(),
            track_clicks: track_clicks.to_string(),
            autogen_html: autogen_html.to_string(),
            tags,
        })
    }

    /// Flattens the request into form parameters, appending `apikey`.
    #[must_use]
    pub fn to_form(&self, api_key: &str) -> Form {
        let mut form = Form::new();
        self.message.append_to(&mut form);
        form.push(&["track_opens"], self.track_opens.as_str());
        form.push(&["track_clicks"], self.track_clicks.as_str());
        form.push(&["autogen_html"], self.autogen_html.as_str());
        if let Some(tags) = &self.tags {
            tags.append_to(&mut form, &["tags"]);
        }
        form.push(&["apikey"], api_key);
        form
    }
}
