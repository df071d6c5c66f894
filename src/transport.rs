//! HTTP transport.
//!
//! Owns the authenticated session against the GitHub API: fixed auth
//! headers, JSON request composition, and mapping of non-2xx responses into
//! the typed error taxonomy. Every call is blocking and single-attempt; the
//! status code and body of a failed response are propagated verbatim.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{ApiError, Error};

/// Default base URL for the GitHub API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ACCEPT_V3_JSON: &str = "application/vnd.github.v3+json";

/// Blocking HTTP transport with a fixed token-auth session.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a new transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. <https://api.github.com>
    /// * `token` - Personal access token, sent as `Authorization: Token <t>`
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the token is not a valid header
    /// value, or `Error::Http` if the client cannot be built.
    pub fn new(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Token {token}"))
            .map_err(|_| Error::Configuration("token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3_JSON));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("release-pr/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// GET a path and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on non-2xx responses, `Error::Http` on network
    /// or decode failure.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        debug!(path, "GET");
        self.execute(self.client.get(self.url(path)))
    }

    /// POST a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// As [`HttpTransport::get`].
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        debug!(path, "POST");
        self.execute(self.client.post(self.url(path)).json(body))
    }

    /// PUT a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// As [`HttpTransport::get`].
    pub fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        debug!(path, "PUT");
        self.execute(self.client.put(self.url(path)).json(body))
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let response = request.send().map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .map_err(|e| Error::Http(format!("failed to parse response: {e}")));
        }

        Err(Self::error_for(status, response))
    }

    /// Map a non-2xx response onto the error taxonomy.
    ///
    /// 409/422 stay `Transport` here; the repository client remaps them to
    /// `BranchExists`/`Conflict` at the call sites where those statuses have
    /// that meaning.
    fn error_for(status: StatusCode, response: Response) -> Error {
        let body = response.text().unwrap_or_default();
        let api_error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth {
                status: status.as_u16(),
                body,
            },
            StatusCode::NOT_FOUND => ApiError::NotFound { body },
            _ => ApiError::Transport {
                status: status.as_u16(),
                body,
            },
        };
        Error::Api(api_error)
    }
}
