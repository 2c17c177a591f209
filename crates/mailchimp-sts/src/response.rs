//! `SendEmail` response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Decoded `SendEmail` response body.
///
/// The API does not document a fixed schema, so the JSON object is kept as
/// is. `status` and `message_id` have accessors since callers nearly always
/// want them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SendResponse(Map<String, Value>);

impl SendResponse {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object.
    pub fn from_body(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Returns the `status` field (e.g. `"sent"`).
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Returns the `message_id` field.
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.0.get("message_id").and_then(Value::as_str)
    }

    /// Returns true if the API reports the message as sent.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.status() == Some("sent")
    }

    /// Returns a raw field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
