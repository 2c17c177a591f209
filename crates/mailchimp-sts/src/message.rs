//! Message options and the wire-shaped message they build.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::validate::{present, require};
use crate::wire::{Form, Recipients, WireMap};

/// Caller-supplied message fields.
///
/// Every field is optional here so that missing values are reported by
/// [`Message::build`] with the name of the field, rather than at compile
/// time. Required fields are `subject`, `html`, `from_name`, `from_email` and
/// `to_email`.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    /// Subject line.
    pub subject: Option<String>,
    /// HTML body.
    pub html: Option<String>,
    /// Plain text body.
    pub text: Option<String>,
    /// Sender display name.
    pub from_name: Option<String>,
    /// Sender address.
    pub from_email: Option<String>,
    /// Recipient addresses.
    pub to_email: Option<Recipients>,
    /// Recipient display names, paired with `to_email`.
    pub to_name: Option<Recipients>,
    /// Reply-To addresses.
    pub reply_to: Option<Recipients>,
    /// CC addresses.
    pub cc_email: Option<Recipients>,
    /// CC display names, paired with `cc_email`.
    pub cc_name: Option<Recipients>,
    /// BCC addresses.
    pub bcc_email: Option<Recipients>,
    /// BCC display names, paired with `bcc_email`.
    pub bcc_name: Option<Recipients>,
}

impl MessageOptions {
    /// Creates empty message options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject line.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Sets the plain text body.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the sender name and address.
    #[must_use]
    pub fn from(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self.from_email = Some(email.into());
        self
    }

    /// Sets the recipient addresses.
    #[must_use]
    pub fn to_email(mut self, emails: impl Into<Recipients>) -> Self {
        self.to_email = Some(emails.into());
        self
    }

    /// Sets the recipient display names.
    #[must_use]
    pub fn to_name(mut self, names: impl Into<Recipients>) -> Self {
        self.to_name = Some(names.into());
        self
    }

    /// Sets the Reply-To addresses.
    #[must_use]
    pub fn reply_to(mut self, emails: impl Into<Recipients>) -> Self {
        self.reply_to = Some(emails.into());
        self
    }

    /// Sets the CC addresses.
    #[must_use]
    pub fn cc_email(mut self, emails: impl Into<Recipients>) -> Self {
        self.cc_email = Some(emails.into());
        self
    }

    /// Sets the CC display names.
    #[must_use]
    pub fn cc_name(mut self, names: impl Into<Recipients>) -> Self {
        self.cc_name = Some(names.into());
        self
    }

    /// Sets the BCC addresses.
    #[must_use]
    pub fn bcc_email(mut self, emails: impl Into<Recipients>) -> Self {
        self.bcc_email = Some(emails.into());
        self
    }

    /// Sets the BCC display names.
    #[must_use]
    pub fn bcc_name(mut self, names: impl Into<Recipients>) -> Self {
        self.bcc_name = Some(names.into());
        self
    }
}

/// Wire-shaped message, ready for the `SendEmail` call.
///
/// Optional lists that were not supplied are `None` and are left out of the
/// encoded request entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// HTML body.
    pub html: String,
    /// Plain text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Sender display name.
    pub from_name: String,
    /// Sender address.
    pub from_email: String,
    /// Recipient addresses.
    pub to_email: WireMap,
    /// Recipient display names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_name: Option<WireMap>,
    /// Reply-To addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<WireMap>,
    /// CC addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_email: Option<WireMap>,
    /// CC display names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_name: Option<WireMap>,
    /// BCC addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_email: Option<WireMap>,
    /// BCC display names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_name: Option<WireMap>,
}

impl Message {
    /// Validates message options and builds the wire-shaped message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if `html`, `subject`, `from_name`,
    /// `from_email` or `to_email` is absent or empty, and
    /// [`Error::RecipientMismatch`] if a to/cc/bcc email list and its name
    /// list differ in length. An email list with no name list counts as a
    /// mismatch, so `to_name` must always accompany `to_email`.
    pub fn build(options: &MessageOptions) -> Result<Self> {
        let message = Self {
            html: require("html", options.html.clone())?,
            text: options.text.clone(),
            subject: require("subject", options.subject.clone())?,
            from_name: require("from_name", options.from_name.clone())?,
            from_email: require("from_email", options.from_email.clone())?,
            to_email: WireMap::encode(require("to_email", options.to_email.clone())?),
            to_name: optional(options.to_name.as_ref()),
            reply_to: optional(options.reply_to.as_ref()),
            cc_email: optional(options.cc_email.as_ref()),
            cc_name: optional(options.cc_name.as_ref()),
            bcc_email: optional(options.bcc_email.as_ref()),
            bcc_name: optional(options.bcc_name.as_ref()),
        };

        check_recipients(
            "to_email",
            Some(&message.to_email),
            "to_name",
            message.to_name.as_ref(),
        )?;
        check_recipients(
            "cc_email",
            message.cc_email.as_ref(),
            "cc_name",
            message.cc_name.as_ref(),
        )?;
        check_recipients(
            "bcc_email",
            message.bcc_email.as_ref(),
            "bcc_name",
            message.bcc_name.as_ref(),
        )?;

        Ok(message)
    }

    /// Appends the message fields under `message[...]`.
    pub(crate) fn append_to(&self, form: &mut Form) {
        form.push(&["message", "html"], self.html.as_str());
        if let Some(text) = &self.text {
            form.push(&["message", "text"], text.as_str());
        }
        form.push(&["message", "subject"], self.subject.as_str());
        form.push(&["message", "from_name"], self.from_name.as_str());
        form.push(&["message", "from_email"], self.from_email.as_str());
        self.to_email.append_to(form, &["message", "to_email"]);

        let lists = [
            ("to_name", &self.to_name),
            ("reply_to", &self.reply_to),
            ("cc_email", &self.cc_email),
            ("cc_name", &self.cc_name),
            ("bcc_email", &self.bcc_email),
            ("bcc_name", &self.bcc_name),
        ];
        for (field, map) in lists {
            if let Some(map) = map {
                map.append_to(form, &["message", field]);
            }
        }
    }
}

fn optional(value: Option<&Recipients>) -> Option<WireMap> {
    present(value.cloned()).map(WireMap::encode)
}

/// Fails if either half of a pair is present and the counts differ.
fn check_recipients(
    email: &'static str,
    emails: Option<&WireMap>,
    name: &'static str,
    names: Option<&WireMap>,
) -> Result<()> {
    if emails.is_none() && names.is_none() {
        return Ok(());
    }

    let emails = emails.map_or(0, WireMap::len);
    let names = names.map_or(0, WireMap::len);
    if emails == names {
        Ok(())
    } else {
        Err(Error::recipient_mismatch(email, name, emails, names))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn welcome() -> MessageOptions {
        MessageOptions::new()
            .subject("Welcome to our website!")
            .html("<html>Welcome to our site.</html>")
            .text("Welcome to our website.")
            .from("David Balatero", "david@mediapiston.com")
            .to_email(["dbalatero@gmail.com"])
            .to_name(["David Balatero"])
    }

    fn assert_basic(message: &Message) {
        assert_eq!(message.subject, "Welcome to our website!");
        assert_eq!(message.html, "<html>Welcome to our site.</html>");
        assert_eq!(message.text.as_deref(), Some("Welcome to our website."));
        assert_eq!(message.from_name, "David Balatero");
        assert_eq!(message.from_email, "david@mediapiston.com");
        assert_eq!(message.to_email.get(0), Some("dbalatero@gmail.com"));
        assert_eq!(
            message.to_name.as_ref().unwrap().get(0),
            Some("David Balatero")
        );
    }

    #[test]
    fn test_build_basic() {
        let message = Message::build(&welcome()).unwrap();
        assert_basic(&message);
        assert!(message.cc_email.is_none());
        assert!(message.reply_to.is_none());
    }

    #[test]
    fn test_text_is_optional() {
        let mut options = welcome();
        options.text = None;
        let message = Message::build(&options).unwrap();
        assert!(message.text.is_none());
    }

    #[test]
    fn test_with_cc() {
        let options = welcome()
            .cc_email(["myfriend@gmail.com"])
            .cc_name(["My Friend"]);
        let message = Message::build(&options).unwrap();
        assert_basic(&message);
        assert_eq!(
            message.cc_email.as_ref().unwrap().get(0),
            Some("myfriend@gmail.com")
        );
        assert_eq!(message.cc_name.as_ref().unwrap().get(0), Some("My Friend"));
    }

    #[test]
    fn test_with_bcc() {
        let options = welcome()
            .bcc_email(["bccguy@gmail.com"])
            .bcc_name(["BCC Guy"]);
        let message = Message::build(&options).unwrap();
        assert_basic(&message);
        assert_eq!(
            message.bcc_email.as_ref().unwrap().get(0),
            Some("bccguy@gmail.com")
        );
        assert_eq!(message.bcc_name.as_ref().unwrap().get(0), Some("BCC Guy"));
    }

    #[test]
    fn test_cc_name_count_mismatch() {
        let options = welcome()
            .cc_email(["myfriend@gmail.com"])
            .cc_name(["One", "Two"]);
        let err = Message::build(&options).unwrap_err();
        assert!(matches!(
            err,
            Error::RecipientMismatch {
                email: "cc_email",
                name: "cc_name",
                emails: 1,
                names: 2,
            }
        ));
    }

    #[test]
    fn test_bcc_name_count_mismatch() {
        let options = welcome()
            .bcc_email(["bccguy@gmail.com"])
            .bcc_name(["One", "Two"]);
        let err = Message::build(&options).unwrap_err();
        assert_eq!(err.field(), Some("bcc_email"));
    }

    #[test]
    fn test_cc_email_without_cc_name() {
        let options = welcome().cc_email(["myfriend@gmail.com"]);
        let err = Message::build(&options).unwrap_err();
        assert!(matches!(
            err,
            Error::RecipientMismatch {
                email: "cc_email",
                emails: 1,
                names: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_cc_name_without_cc_email() {
        let options = welcome().cc_name(["My Friend"]);
        let err = Message::build(&options).unwrap_err();
        assert!(matches!(
            err,
            Error::RecipientMismatch {
                emails: 0,
                names: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_to_email_without_to_name() {
        let mut options = welcome();
        options.to_name = None;
        let err = Message::build(&options).unwrap_err();
        assert!(matches!(
            err,
            Error::RecipientMismatch {
                email: "to_email",
                name: "to_name",
                emails: 1,
                names: 0,
            }
        ));
    }

    #[test]
    fn test_empty_to_name_is_mismatch() {
        let options = welcome().to_name(Recipients::new());
        let err = Message::build(&options).unwrap_err();
        assert_eq!(err.field(), Some("to_email"));
    }

    #[test]
    fn test_to_email_longer_than_to_name() {
        let options = welcome().to_email(["fds@fds.com", "a@b.com"]);
        assert!(Message::build(&options).is_err());
    }

    #[test]
    fn test_required_fields() {
        let cases: [(&str, fn(&mut MessageOptions)); 5] = [
            ("html", |o| o.html = None),
            ("subject", |o| o.subject = None),
            ("from_name", |o| o.from_name = None),
            ("from_email", |o| o.from_email = None),
            ("to_email", |o| o.to_email = None),
        ];

        for (field, clear) in cases {
            let mut options = welcome();
            clear(&mut options);
            let err = Message::build(&options).unwrap_err();
            assert_eq!(err.field(), Some(field), "field {field}");
        }
    }

    #[test]
    fn test_empty_required_fields() {
        let options = welcome().subject("");
        assert!(matches!(
            Message::build(&options).unwrap_err(),
            Error::MissingField("subject")
        ));

        let options = welcome().to_email(Recipients::new());
        assert!(matches!(
            Message::build(&options).unwrap_err(),
            Error::MissingField("to_email")
        ));
    }

    #[test]
    fn test_empty_scalar_to_email() {
        let options = welcome().to_email("").to_name("David Balatero");
        assert!(matches!(
            Message::build(&options).unwrap_err(),
            Error::MissingField("to_email")
        ));
    }

    #[test]
    fn test_empty_scalar_cc_email_is_omitted() {
        let message = Message::build(&welcome().cc_email("")).unwrap();
        assert!(message.cc_email.is_none());
        assert!(message.cc_name.is_none());
    }

    #[test]
    fn test_empty_optional_field_is_omitted() {
        let options = welcome().reply_to(Recipients::new());
        let message = Message::build(&options).unwrap();
        assert!(message.reply_to.is_none());

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("reply_to").is_none());
    }

    #[test]
    fn test_scalar_reply_to() {
        let options = welcome().reply_to("replies@mediapiston.com");
        let message = Message::build(&options).unwrap();
        assert_eq!(
            message.reply_to.unwrap().get(0),
            Some("replies@mediapiston.com")
        );
    }

    #[test]
    fn test_form_encoding() {
        let options = welcome()
            .cc_email(["myfriend@gmail.com"])
            .cc_name(["My Friend"]);
        let mut form = Form::new();
        Message::build(&options).unwrap().append_to(&mut form);

        assert_eq!(form.get("message[subject]"), Some("Welcome to our website!"));
        assert_eq!(
            form.get("message[to_email][0]"),
            Some("dbalatero@gmail.com")
        );
        assert_eq!(form.get("message[cc_name][0]"), Some("My Friend"));
        assert!(!form.contains("message[bcc_email]"));
    }

    proptest! {
        #[test]
        fn prop_paired_lists_keep_order(
            pairs in proptest::collection::vec(("[a-z]{1,8}@[a-z]{1,8}\\.com", "[A-Za-z ]{1,12}"), 1..8)
        ) {
            let (emails, names): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();
            let options = welcome()
                .to_email(emails.clone())
                .to_name(names.clone())
                .cc_email(emails.clone())
                .cc_name(names.clone());
            let message = Message::build(&options).unwrap();

            let to_name = message.to_name.unwrap();
            let cc_email = message.cc_email.unwrap();
            for i in 0..emails.len() {
                prop_assert_eq!(&message.to_email[i], emails[i].as_str());
                prop_assert_eq!(&to_name[i], names[i].as_str());
                prop_assert_eq!(&cc_email[i], emails[i].as_str());
            }
        }

        #[test]
        fn prop_unequal_cc_lists_fail(emails in 1usize..6, names in 0usize..6) {
            prop_assume!(emails != names);
            let options = welcome()
                .cc_email(vec!["cc@example.com".to_string(); emails])
                .cc_name(vec!["CC".to_string(); names]);
            let err = Message::build(&options).unwrap_err();
            prop_assert_eq!(err.field(), Some("cc_email"));
        }
    }
}
