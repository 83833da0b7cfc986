//! Example: fetch the most recent message for an account and print the
//! raw response body.
//!
//! ## Prerequisites
//!
//! 1. A Context.IO consumer key and secret from the developer console
//!    (https://console.context.io/#settings)
//! 2. The id of an account accessible through that key
//!
//! Set them as environment variables:
//!
//! ```bash
//! export CONTEXTIO_KEY="your-consumer-key"
//! export CONTEXTIO_SECRET="your-consumer-secret"
//! export CONTEXTIO_ACCOUNT="your-account-id"
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --example get_messages
//! ```

use std::env;

use contextio::{ContextIo, Params};

fn main() {
    tracing_subscriber::fmt::init();

    let key = env::var("CONTEXTIO_KEY").expect("CONTEXTIO_KEY environment variable not set");
    let secret =
        env::var("CONTEXTIO_SECRET").expect("CONTEXTIO_SECRET environment variable not set");
    let account =
        env::var("CONTEXTIO_ACCOUNT").expect("CONTEXTIO_ACCOUNT environment variable not set");

    let mut client = ContextIo::new(key, secret);

    let mut params = Params::new();
    params.insert("limit".to_string(), "1".to_string());

    match client.get_messages(&account, &params) {
        Ok(response) => println!("{}", response.body),
        Err(error) => {
            eprintln!("request failed: {error}");
            if let Some(record) = error.response() {
                eprintln!("body: {}", record.body);
            }
        }
    }
}
