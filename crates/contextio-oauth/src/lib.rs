//! # contextio-oauth
//!
//! OAuth 1.0a request signing for the Context.IO API.
//!
//! The Context.IO v2 API authenticates every request with two-legged
//! (consumer-only) OAuth 1.0a: the application's consumer key and secret
//! sign the request with HMAC-SHA1, and no user token is involved.
//! This crate computes the `oauth_*` protocol parameters for a request
//! and renders them either as query-string parameters or as an
//! `Authorization` header value.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeMap;
//! use contextio_oauth::{Credentials, Signer};
//! use url::Url;
//!
//! let signer = Signer::new(Credentials::new("consumer_key", "consumer_secret"));
//!
//! let url = Url::parse("https://api.context.io/2.0/accounts/abc123/messages").unwrap();
//! let mut params = BTreeMap::new();
//! params.insert("limit".to_string(), "5".to_string());
//!
//! let signed = signer.sign("GET", &url, &params);
//!
//! // Query-string placement:
//! for (name, value) in signed.pairs() {
//!     println!("{name}={value}");
//! }
//!
//! // Header placement:
//! let header = signed.authorization_header(None);
//! assert!(header.starts_with("OAuth "));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod credentials;
mod signer;

pub use credentials::Credentials;
pub use signer::{Signer, SignedParams, percent_encode};
