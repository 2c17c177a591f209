//! # mailchimp-sts
//!
//! Client library for the Mailchimp STS transactional email API.
//!
//! ## Features
//!
//! - **Send email**: `SendEmail` with to/cc/bcc recipients, reply-to, tags and
//!   open/click tracking
//! - **Verify senders**: `VerifyEmailAddress`
//! - **Validation up front**: required fields and recipient email/name pairing
//!   are checked before any request is made
//! - **Per-client credentials**: each [`Client`] owns its API key
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailchimp_sts::{Client, Config, MessageOptions, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::builder().api_key("your-key-us1")?.build();
//!     let client = Client::new(config)?;
//!
//!     let message = MessageOptions::new()
//!         .subject("Welcome to our website!")
//!         .html("<html>Welcome to our site.</html>")
//!         .text("Welcome to our website.")
//!         .from("David Balatero", "david@mediapiston.com")
//!         .to_email(["dbalatero@gmail.com"])
//!         .to_name(["David Balatero"]);
//!
//!     let options = SendOptions::new(message)
//!         .tags(["fun", "message"])
//!         .track_opens(true)
//!         .track_clicks(true);
//!
//!     let response = client.send_email(&options).await?;
//!     println!("{:?} {:?}", response.status(), response.message_id());
//!     Ok(())
//! }
//! ```
//!
//! ## Recipient pairing
//!
//! Every email list that is given must come with a name list of the same
//! length, and the reverse. `to_email` is always required, so `to_name` is
//! too in practice. CC and BCC may be left out entirely.
//!
//! ## Wire format
//!
//! The API takes lists as index-keyed maps (`tags[0]=fun&tags[1]=message`)
//! and flags as `"true"`/`"false"` strings. See [`wire`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
pub mod config;
mod error;
pub mod message;
pub mod request;
pub mod response;
pub mod transport;
pub mod validate;
pub mod wire;

pub use client::Client;
pub use config::{ApiKey, Config, ConfigBuilder, Method};
pub use error::{Error, Result};
pub use message::{Message, MessageOptions};
pub use request::{SendOptions, SendRequest};
pub use response::SendResponse;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use wire::{Form, Recipients, WireMap};
