//! Error types for STS operations.

/// Result type alias for STS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// STS client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key configured for the client.
    #[error("No API key configured; set one on the client config")]
    MissingCredential,

    /// Required field absent or empty.
    #[error("Missing required {0}")]
    MissingField(&'static str),

    /// Paired email and name lists differ in length.
    #[error("{email} and {name} need the same number of values ({emails} vs {names})")]
    RecipientMismatch {
        /// Email list field (e.g., `cc_email`).
        email: &'static str,
        /// Name list field (e.g., `cc_name`).
        name: &'static str,
        /// Number of email values.
        emails: usize,
        /// Number of name values.
        names: usize,
    },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// API returned a non-success status.
    #[error("STS API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a recipient mismatch error for a field pair.
    #[must_use]
    pub const fn recipient_mismatch(
        email: &'static str,
        name: &'static str,
        emails: usize,
        names: usize,
    ) -> Self {
        Self::RecipientMismatch {
            email,
            name,
            emails,
            names,
        }
    }

    /// Returns true if the error was raised by parameter validation,
    /// before any request was made.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::RecipientMismatch { .. }
        )
    }

    /// Returns the offending field for validation errors.
    ///
    /// For recipient mismatches this is the email half of the pair.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) => Some(*field),
            Self::RecipientMismatch { email, .. } => Some(*email),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = Error::MissingField("subject");
        assert_eq!(err.to_string(), "Missing required subject");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("subject"));
    }

    #[test]
    fn test_recipient_mismatch_message() {
        let err = Error::recipient_mismatch("cc_email", "cc_name", 1, 2);
        assert_eq!(
            err.to_string(),
            "cc_email and cc_name need the same number of values (1 vs 2)"
        );
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("cc_email"));
    }

    #[test]
    fn test_non_validation_errors() {
        assert!(!Error::MissingCredential.is_validation());
        assert!(Error::MissingCredential.field().is_none());

        let api = Error::Api {
            status: 500,
            body: "oops".into(),
        };
        assert!(!api.is_validation());
        assert_eq!(api.to_string(), "STS API error 500: oops");
    }
}
