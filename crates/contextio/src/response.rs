//! Response records.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// The outcome of one completed API exchange.
///
/// Carries the status code, the headers that were sent with the
/// request, the headers the server returned, and the raw body. Both
/// header maps are always recorded.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Headers sent with the request.
    pub request_headers: HeaderMap,
    /// Headers returned by the server.
    pub response_headers: HeaderMap,
    /// Raw response body.
    pub body: String,
}

impl ApiResponse {
    /// True when the status code signals failure (anything outside
    /// 2xx).
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }

    /// Parses the raw body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
