//! # contextio
//!
//! Client for the [Context.IO](https://context.io) v2 email-metadata
//! REST API.
//!
//! The client builds OAuth 1.0a consumer-signed requests (two-legged,
//! no user token), filters call parameters against per-endpoint
//! whitelists, and returns a lightly parsed response record per call.
//! All calls are synchronous and block until the HTTP exchange
//! completes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use contextio::{ContextIo, Params};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Consumer key and secret from the developer console
//!     // (https://console.context.io/#settings).
//!     let mut client = ContextIo::new("your_key", "your_secret");
//!
//!     let mut params = Params::new();
//!     params.insert("limit".to_string(), "1".to_string());
//!
//!     let response = client.get_messages("your_account_id", &params)?;
//!     println!("{}", response.body);
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every call returns `Result<ApiResponse, Error>`. A non-2xx status
//! is an [`Error::Status`] carrying the complete response record
//! (status, both header maps, raw body), so the failure detail travels
//! with the error itself. [`ContextIo::last_response`] additionally
//! exposes the most recent completed exchange as a convenience read;
//! it is never required to discover why a call failed.
//!
//! ## Concurrency
//!
//! Calls take `&mut self` and the most recent response is kept on the
//! client, so one instance belongs to one thread at a time; the
//! borrow checker enforces this. Clone the configuration into a second
//! client for concurrent use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod params;
mod response;

pub use client::ContextIo;
pub use config::{Config, ConfigBuilder, DEFAULT_API_VERSION, DEFAULT_HOST};
pub use error::{Error, Result};
pub use params::{Params, filter_params};
pub use response::ApiResponse;
