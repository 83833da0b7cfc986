//! OAuth 1.0a signature computation (RFC 5849, HMAC-SHA1).

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;
use url::Url;

use crate::credentials::Credentials;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 16;

/// Percent-encodes a string as OAuth 1.0a requires.
///
/// Everything outside the RFC 3986 unreserved set (ALPHA, DIGIT, `-`,
/// `.`, `_`, `~`) is encoded, spaces as `%20`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// The `oauth_*` protocol parameters computed for one signed request.
///
/// Render them with [`SignedParams::pairs`] (query-string or form-body
/// placement) or [`SignedParams::authorization_header`] (header
/// placement).
#[derive(Debug, Clone)]
pub struct SignedParams {
    consumer_key: String,
    nonce: String,
    signature: String,
    timestamp: i64,
}

impl SignedParams {
    /// Returns the protocol parameters as name/value pairs.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.consumer_key.clone()),
            ("oauth_nonce", self.nonce.clone()),
            ("oauth_signature", self.signature.clone()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", self.timestamp.to_string()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ]
    }

    /// Renders the parameters as an `Authorization` header value.
    ///
    /// Parameter values are percent-encoded and quoted per RFC 5849
    /// §3.5.1.
    #[must_use]
    pub fn authorization_header(&self, realm: Option<&str>) -> String {
        let mut parts = Vec::new();
        if let Some(realm) = realm {
            parts.push(format!("realm=\"{}\"", percent_encode(realm)));
        }
        for (name, value) in self.pairs() {
            parts.push(format!("{name}=\"{}\"", percent_encode(&value)));
        }
        format!("OAuth {}", parts.join(", "))
    }

    /// Returns the base64-encoded HMAC-SHA1 signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the nonce used for this request.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Returns the Unix timestamp used for this request.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Signs requests with consumer-only (two-legged) OAuth 1.0a.
///
/// No `oauth_token` parameter is emitted and the token-secret half of
/// the signing key is empty, per the consumer-only profile.
#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    /// Creates a signer for the given consumer credentials.
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Returns the consumer key requests are signed with.
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        self.credentials.key()
    }

    /// Signs one request with a fresh nonce and the current clock.
    ///
    /// `params` must hold every request parameter that will travel in
    /// the query string or a form-encoded body; they all participate in
    /// the signature base string alongside the protocol parameters.
    /// Query parameters already present on `url` are included as well.
    ///
    /// Signing performs no I/O and cannot fail.
    #[must_use]
    pub fn sign(&self, method: &str, url: &Url, params: &BTreeMap<String, String>) -> SignedParams {
        let nonce = generate_nonce();
        self.sign_with(method, url, params, Utc::now().timestamp(), &nonce)
    }

    /// Deterministic signing core: the caller supplies timestamp and
    /// nonce. [`Signer::sign`] draws them from the clock and the RNG.
    #[must_use]
    pub fn sign_with(
        &self,
        method: &str,
        url: &Url,
        params: &BTreeMap<String, String>,
        timestamp: i64,
        nonce: &str,
    ) -> SignedParams {
        let mut pairs: Vec<(String, String)> = params
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        pairs.extend(
            url.query_pairs()
                .map(|(name, value)| (name.into_owned(), value.into_owned())),
        );
        pairs.push(("oauth_consumer_key".to_string(), self.credentials.key().to_string()));
        pairs.push(("oauth_nonce".to_string(), nonce.to_string()));
        pairs.push(("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()));
        pairs.push(("oauth_timestamp".to_string(), timestamp.to_string()));
        pairs.push(("oauth_version".to_string(), OAUTH_VERSION.to_string()));

        let base = base_string(method, url, &pairs);
        let key = format!("{}&", percent_encode(self.credentials.secret()));
        let signature = STANDARD.encode(hmac_sha1(key.as_bytes(), base.as_bytes()));

        SignedParams {
            consumer_key: self.credentials.key().to_string(),
            nonce: nonce.to_string(),
            signature,
            timestamp,
        }
    }
}

/// Builds the RFC 5849 §3.4.1 signature base string.
///
/// Pairs are percent-encoded first and sorted by encoded name, then
/// encoded value.
fn base_string(method: &str, url: &Url, pairs: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .iter()
        .map(|(name, value)| (percent_encode(name), percent_encode(value)))
        .collect();
    encoded.sort();

    let params = encoded
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_uri(url)),
        percent_encode(&params)
    )
}

/// Base string URI: scheme, authority and path, without query or
/// fragment. `Url::port` already elides scheme-default ports.
fn base_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

#[allow(clippy::expect_used)]
fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_percent_encode_unreserved() {
        assert_eq!(percent_encode("abcXYZ012-._~"), "abcXYZ012-._~");
    }

    #[test]
    fn test_percent_encode_reserved() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a+b"), "a%2Bb");
        assert_eq!(percent_encode("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
    }

    #[test]
    fn test_percent_encode_utf8() {
        assert_eq!(percent_encode("ü"), "%C3%BC");
    }

    #[test]
    fn test_base_string_get_messages() {
        let url = Url::parse("https://api.context.io/2.0/accounts/abc123/messages").unwrap();
        let pairs = vec![
            ("limit".to_string(), "5".to_string()),
            ("oauth_consumer_key".to_string(), "consumer_key".to_string()),
            ("oauth_nonce".to_string(), "abcdefgh".to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), "1218137833".to_string()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        assert_eq!(
            base_string("GET", &url, &pairs),
            "GET&https%3A%2F%2Fapi.context.io%2F2.0%2Faccounts%2Fabc123%2Fmessages&\
             limit%3D5%26oauth_consumer_key%3Dconsumer_key%26oauth_nonce%3Dabcdefgh%26\
             oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1218137833%26\
             oauth_version%3D1.0"
        );
    }

    #[test]
    fn test_sign_known_vector_get() {
        let signer = Signer::new(Credentials::new("consumer_key", "consumer_secret"));
        let url = Url::parse("https://api.context.io/2.0/accounts/abc123/messages").unwrap();

        let signed = signer.sign_with(
            "GET",
            &url,
            &params(&[("limit", "5")]),
            1_218_137_833,
            "abcdefgh",
        );

        assert_eq!(signed.signature(), "rRnt4vUOSKo77xC1DVX3e8SlV00=");
    }

    #[test]
    fn test_sign_known_vector_post_with_port() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("http://127.0.0.1:8080/2.0/some/action").unwrap();

        let signed = signer.sign_with(
            "POST",
            &url,
            &params(&[("account", "acct1")]),
            1_700_000_000,
            "nonce123",
        );

        assert_eq!(signed.signature(), "WioF7iN/ehCg9hmpdEijM9DY46c=");
    }

    #[test]
    fn test_sign_known_vector_encoded_values() {
        let signer = Signer::new(Credentials::new("key", "s3cr3t"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let signed = signer.sign_with("GET", &url, &params(&[("q", "a b+c")]), 1, "n");

        assert_eq!(signed.signature(), "U5bfATSpMzgQc6qJSRhG3ILM2YE=");
    }

    #[test]
    fn test_url_query_participates_in_signature() {
        let signer = Signer::new(Credentials::new("key", "secret"));

        let bare = Url::parse("https://api.context.io/2.0/search").unwrap();
        let with_query = Url::parse("https://api.context.io/2.0/search?limit=5").unwrap();

        let from_params = signer.sign_with("GET", &bare, &params(&[("limit", "5")]), 42, "n");
        let from_query = signer.sign_with("GET", &with_query, &params(&[]), 42, "n");

        assert_eq!(from_params.signature(), from_query.signature());
    }

    #[test]
    fn test_method_is_uppercased() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let lower = signer.sign_with("get", &url, &params(&[]), 42, "n");
        let upper = signer.sign_with("GET", &url, &params(&[]), 42, "n");

        assert_eq!(lower.signature(), upper.signature());
    }

    #[test]
    fn test_sign_draws_fresh_nonce() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let first = signer.sign("GET", &url, &params(&[]));
        let second = signer.sign("GET", &url, &params(&[]));

        assert_eq!(first.nonce().len(), NONCE_LEN);
        assert_ne!(first.nonce(), second.nonce());
    }

    #[test]
    fn test_pairs_contain_all_protocol_params() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let signed = signer.sign_with("GET", &url, &params(&[]), 42, "n");
        let names: Vec<&str> = signed.pairs().iter().map(|(name, _)| *name).collect();

        assert_eq!(
            names,
            vec![
                "oauth_consumer_key",
                "oauth_nonce",
                "oauth_signature",
                "oauth_signature_method",
                "oauth_timestamp",
                "oauth_version",
            ]
        );
        assert!(!names.contains(&"oauth_token"));
    }

    #[test]
    fn test_authorization_header_format() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let signed = signer.sign_with("GET", &url, &params(&[]), 42, "n");
        let header = signed.authorization_header(None);

        assert!(header.starts_with("OAuth oauth_consumer_key=\"key\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_timestamp=\"42\""));
        assert!(header.contains(", "));
    }

    #[test]
    fn test_authorization_header_realm() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let signed = signer.sign_with("GET", &url, &params(&[]), 42, "n");
        let header = signed.authorization_header(Some("https://api.context.io/"));

        assert!(header.starts_with("OAuth realm=\"https%3A%2F%2Fapi.context.io%2F\""));
    }

    #[test]
    fn test_signature_value_is_header_encoded() {
        let signer = Signer::new(Credentials::new("key", "secret"));
        let url = Url::parse("https://api.context.io/2.0/search").unwrap();

        let signed = signer.sign_with("GET", &url, &params(&[]), 42, "n");
        let header = signed.authorization_header(None);

        // Base64 padding must arrive percent-encoded inside the header.
        assert!(header.contains("%3D\""));
        assert!(!header.contains("=\","));
    }
}
