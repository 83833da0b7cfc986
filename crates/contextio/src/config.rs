//! Client configuration.

use contextio_oauth::Credentials;

/// Default API host.
pub const DEFAULT_HOST: &str = "api.context.io";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "2.0";

/// Context.IO client configuration.
///
/// The consumer credentials are fixed at construction; everything else
/// can be changed afterwards through setters. The key is readable, the
/// secret is write-only and redacted from `Debug` output.
#[derive(Debug, Clone)]
pub struct Config {
    credentials: Credentials,
    ssl: bool,
    host: String,
    api_version: String,
    save_headers: bool,
    auth_headers: bool,
}

impl Config {
    /// Creates a configuration with the defaults: HTTPS against
    /// `api.context.io`, API version "2.0", header saving off,
    /// signature in the query string.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(key, secret),
            ssl: true,
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            save_headers: false,
            auth_headers: false,
        }
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder(key: impl Into<String>, secret: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(key, secret)
    }

    /// Returns the consumer key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.credentials.key()
    }

    pub(crate) const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether calls are made over HTTPS.
    #[must_use]
    pub const fn ssl(&self) -> bool {
        self.ssl
    }

    /// Specify whether API calls should be made over a secure
    /// connection. HTTPS is used on all calls by default.
    pub const fn set_ssl(&mut self, ssl: bool) {
        self.ssl = ssl;
    }

    /// Returns the API host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Sets the API host. Defaults to `api.context.io`; point it at a
    /// local mock server in tests.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Returns the API version path segment.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Sets the API version. By default the latest official version is
    /// used for all calls.
    pub fn set_api_version(&mut self, api_version: impl Into<String>) {
        self.api_version = api_version.into();
    }

    /// Whether header saving is requested.
    #[must_use]
    pub const fn save_headers(&self) -> bool {
        self.save_headers
    }

    /// Specify whether responses should retain header information.
    ///
    /// Kept for parity with the other Context.IO client libraries;
    /// response records currently always carry both header maps.
    pub const fn set_save_headers(&mut self, save_headers: bool) {
        self.save_headers = save_headers;
    }

    /// Whether OAuth parameters are sent as an `Authorization` header.
    #[must_use]
    pub const fn auth_headers(&self) -> bool {
        self.auth_headers
    }

    /// Specify whether OAuth parameters should be included as URL query
    /// parameters or sent as an HTTP `Authorization` header. The
    /// default is URL query parameters.
    pub const fn set_auth_headers(&mut self, auth_headers: bool) {
        self.auth_headers = auth_headers;
    }

    /// Returns the base URL all actions are resolved against:
    /// `{scheme}://{host}/{api_version}/`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{scheme}://{}/{}/", self.host, self.api_version)
    }

    /// Returns the full URL for an API action.
    #[must_use]
    pub fn url_for(&self, action: &str) -> String {
        format!("{}{action}", self.base_url())
    }
}

/// Builder for client configuration.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder with the given consumer credentials.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            config: Config::new(key, secret),
        }
    }

    /// Sets whether calls use HTTPS.
    #[must_use]
    pub const fn ssl(mut self, ssl: bool) -> Self {
        self.config.ssl = ssl;
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the API version path segment.
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = api_version.into();
        self
    }

    /// Sets whether responses should retain header information.
    #[must_use]
    pub const fn save_headers(mut self, save_headers: bool) -> Self {
        self.config.save_headers = save_headers;
        self
    }

    /// Sets whether OAuth parameters travel in an `Authorization`
    /// header instead of the query string.
    #[must_use]
    pub const fn auth_headers(mut self, auth_headers: bool) -> Self {
        self.config.auth_headers = auth_headers;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
