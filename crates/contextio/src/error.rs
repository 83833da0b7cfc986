//! Error types for API calls.

use crate::response::ApiResponse;

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, Error>;

/// API call error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure: the request never completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The target URL could not be parsed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success status code. Carries the
    /// complete response record: status, both header maps, raw body.
    #[error("API error: HTTP {}", .0.status)]
    Status(Box<ApiResponse>),
}

impl Error {
    /// Returns the response record when the error carries one.
    #[must_use]
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Status(response) => Some(response),
            Self::Http(_) | Self::Url(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use reqwest::header::HeaderMap;

    #[test]
    fn test_status_error_carries_record() {
        let record = ApiResponse {
            status: StatusCode::UNAUTHORIZED,
            request_headers: HeaderMap::new(),
            response_headers: HeaderMap::new(),
            body: "unauthorized".to_string(),
        };
        let error = Error::Status(Box::new(record));

        let response = error.response().unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, "unauthorized");
        assert_eq!(error.to_string(), "API error: HTTP 401 Unauthorized");
    }

    #[test]
    fn test_url_error_has_no_record() {
        let error = Error::from(url::ParseError::EmptyHost);
        assert!(error.response().is_none());
    }
}
