//! The API client.

use contextio_oauth::Signer;
use reqwest::Method;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::params::{Params, filter_params};
use crate::response::ApiResponse;

/// Valid query parameters for the message listing endpoint.
const MESSAGES_PARAMS: &[&str] = &["limit"];

/// Context.IO v2 API client.
///
/// Construct one per set of consumer credentials and reuse it across
/// calls. Each call signs and sends one blocking HTTP request and
/// returns its own [`ApiResponse`]; the client additionally remembers
/// the most recent completed exchange (see [`ContextIo::last_response`]).
///
/// Calls take `&mut self`, so an instance cannot be shared across
/// threads without external synchronization.
#[derive(Debug)]
pub struct ContextIo {
    config: Config,
    signer: Signer,
    http: HttpClient,
    last_response: Option<ApiResponse>,
}

impl ContextIo {
    /// Creates a client with the default configuration: HTTPS, API
    /// version "2.0", header saving off. Performs no I/O.
    ///
    /// The consumer key and secret can be found under the "settings"
    /// tab of the developer console
    /// (<https://console.context.io/#settings>).
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::with_config(Config::new(key, secret))
    }

    /// Creates a client from an explicit configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let signer = Signer::new(config.credentials().clone());
        Self {
            config,
            signer,
            http: HttpClient::new(),
            last_response: None,
        }
    }

    /// Returns the 25 most recent messages for a given account id. Use
    /// `limit` to change that number.
    ///
    /// Recognized parameters: `limit`. Anything else is silently
    /// dropped.
    ///
    /// See <https://context.io/docs/2.0/accounts/messages>.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] with the full response record on a
    /// non-2xx answer, [`Error::Http`] on transport failure.
    pub fn get_messages(&mut self, id: &str, params: &Params) -> Result<ApiResponse> {
        let params = filter_params(params, MESSAGES_PARAMS);
        self.get(None, &format!("accounts/{id}/messages"), &params)
    }

    /// Issues a GET request for an API action.
    ///
    /// # Errors
    ///
    /// Same contract as [`ContextIo::call`].
    pub fn get(
        &mut self,
        account: Option<&str>,
        action: &str,
        params: &Params,
    ) -> Result<ApiResponse> {
        self.call(Method::GET, account, action, params)
    }

    /// Issues a POST request for an API action.
    ///
    /// # Errors
    ///
    /// Same contract as [`ContextIo::call`].
    pub fn post(
        &mut self,
        account: Option<&str>,
        action: &str,
        params: &Params,
    ) -> Result<ApiResponse> {
        self.call(Method::POST, account, action, params)
    }

    /// Signs and sends one API request, blocking until the exchange
    /// completes.
    ///
    /// A non-empty `account` is injected into the parameters under the
    /// `account` key before signing. OAuth parameters travel in the
    /// query string or in an `Authorization` header depending on the
    /// configuration; for GET the call parameters ride the query
    /// string, for POST they are form-encoded into the body.
    ///
    /// The completed exchange is recorded as the last response whether
    /// or not it succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] with the full response record on a
    /// non-2xx answer, [`Error::Http`] when the request never
    /// completed (the last response is left untouched in that case),
    /// and [`Error::Url`] if the configured host does not form a valid
    /// URL.
    pub fn call(
        &mut self,
        method: Method,
        account: Option<&str>,
        action: &str,
        params: &Params,
    ) -> Result<ApiResponse> {
        let params = with_account(params, account);

        let mut url = Url::parse(&self.config.url_for(action))?;
        let signed = self.signer.sign(method.as_str(), &url, &params);
        let is_post = method == Method::POST;

        if method == Method::GET {
            let mut query = url.query_pairs_mut();
            for (name, value) in &params {
                query.append_pair(name, value);
            }
            if !self.config.auth_headers() {
                for (name, value) in signed.pairs() {
                    query.append_pair(name, &value);
                }
            }
        }

        tracing::debug!(method = %method, url = %url, "sending request");

        let mut builder = self.http.request(method, url);
        if is_post {
            let mut form = params;
            if !self.config.auth_headers() {
                for (name, value) in signed.pairs() {
                    form.insert(name.to_string(), value);
                }
            }
            builder = builder.form(&form);
        }
        if self.config.auth_headers() {
            builder = builder.header(AUTHORIZATION, signed.authorization_header(None));
        }

        let request = builder.build()?;
        let request_headers = request.headers().clone();
        let response = self.http.execute(request)?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.text()?;

        let record = ApiResponse {
            status,
            request_headers,
            response_headers,
            body,
        };
        self.last_response = Some(record.clone());

        if record.is_error() {
            tracing::warn!(status = %record.status, "request failed");
            Err(Error::Status(Box::new(record)))
        } else {
            Ok(record)
        }
    }

    /// Returns the response record for the most recent completed API
    /// call, successful or not.
    ///
    /// This is a convenience read; the record for a failed call also
    /// arrives inside [`Error::Status`].
    #[must_use]
    pub const fn last_response(&self) -> Option<&ApiResponse> {
        self.last_response.as_ref()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the consumer key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.config.key()
    }

    /// Whether calls are made over HTTPS.
    #[must_use]
    pub const fn ssl(&self) -> bool {
        self.config.ssl()
    }

    /// Specify whether API calls should be made over a secure
    /// connection. HTTPS is used on all calls by default.
    pub const fn set_ssl(&mut self, ssl: bool) {
        self.config.set_ssl(ssl);
    }

    /// Returns the API host.
    #[must_use]
    pub fn host(&self) -> &str {
        self.config.host()
    }

    /// Sets the API host. Defaults to `api.context.io`; point it at a
    /// local mock server in tests.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.config.set_host(host);
    }

    /// Returns the API version path segment.
    #[must_use]
    pub fn api_version(&self) -> &str {
        self.config.api_version()
    }

    /// Set the API version. By default the latest official version is
    /// used for all calls.
    pub fn set_api_version(&mut self, api_version: impl Into<String>) {
        self.config.set_api_version(api_version);
    }

    /// Whether header saving is requested.
    #[must_use]
    pub const fn save_headers(&self) -> bool {
        self.config.save_headers()
    }

    /// Specify whether responses should retain header information.
    pub const fn set_save_headers(&mut self, save_headers: bool) {
        self.config.set_save_headers(save_headers);
    }

    /// Whether OAuth parameters are sent as an `Authorization` header.
    #[must_use]
    pub const fn auth_headers(&self) -> bool {
        self.config.auth_headers()
    }

    /// Specify whether OAuth parameters should be included as URL query
    /// parameters or sent as an HTTP `Authorization` header. The
    /// default is URL query parameters.
    pub const fn set_auth_headers(&mut self, auth_headers: bool) {
        self.config.set_auth_headers(auth_headers);
    }

    /// Returns the base URL all actions are resolved against.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }
}

/// Copies `params`, injecting a non-empty account under the `account`
/// key. An empty or absent account leaves the parameters unchanged.
fn with_account(params: &Params, account: Option<&str>) -> Params {
    let mut params = params.clone();
    if let Some(account) = account.filter(|account| !account.is_empty()) {
        params.insert("account".to_string(), account.to_string());
    }
    params
}
