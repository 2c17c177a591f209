//! Example: verify a sender and send a message through Mailchimp STS
//!
//! ## Prerequisites
//!
//! Set environment variables:
//! ```bash
//! export MAILCHIMP_STS_API_KEY="your-api-key-us1"
//! export STS_FROM_EMAIL="you@example.com"
//! export STS_TO_EMAIL="friend@example.com"
//! ```
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=mailchimp_sts=debug cargo run --example send_email
//! ```

use anyhow::Context;
use mailchimp_sts::{Client, MessageOptions, SendOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let from_email = std::env::var("STS_FROM_EMAIL").context("STS_FROM_EMAIL not set")?;
    let to_email = std::env::var("STS_TO_EMAIL").context("STS_TO_EMAIL not set")?;

    let client = Client::from_env()?;

    println!("Verifying sender {from_email}...");
    if client.verify_email_address(&from_email).await? {
        println!("Sender verified");
    } else {
        println!("Sender not verified yet; check the inbox for a confirmation link");
    }

    let message = MessageOptions::new()
        .subject("Hello from mailchimp-sts")
        .html("<p>This message was sent through <b>Mailchimp STS</b>.</p>")
        .text("This message was sent through Mailchimp STS.")
        .from("mailchimp-sts example", from_email)
        .to_email(to_email.as_str())
        .to_name("Example Recipient");

    let options = SendOptions::new(message)
        .tags(["example"])
        .track_opens(true)
        .track_clicks(false);

    let response = client.send_email(&options).await?;
    println!(
        "Status: {}, message id: {}",
        response.status().unwrap_or("unknown"),
        response.message_id().unwrap_or("none")
    );

    Ok(())
}
