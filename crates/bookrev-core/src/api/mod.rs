//! HTTP clients for the book review backend.
//!
//! - `auth`: credential exchange against `/auth/login`
//! - `catalog`: book listing and creation against `/api/books`
//!
//! Both clients share one [`ApiClient`] (connection pool, timeout, base URL)
//! and the same failure taxonomy: `Transport` when no response arrived,
//! `Rejected` when a response arrived but signals failure.

pub mod auth;
pub mod catalog;

use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use auth::{AuthClient, AuthError, Credentials, LoginResponse};
pub use catalog::{Book, CatalogClient, CatalogError, CreateBook};

use crate::config;

/// Standard User-Agent header for bookrev requests.
pub const USER_AGENT: &str = concat!("bookrev/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP transport bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `base_url` with an optional request timeout.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = config::resolve_base_url(None, base_url)?;
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    /// Absolute URL for an endpoint path such as `/api/books`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Outcome of a failed request, before it is mapped into a client error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Failure {
    /// No response was received.
    Transport(String),
    /// A response was received but signals failure.
    Rejected { status: Option<u16>, message: String },
}

impl Failure {
    fn transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Failure::Transport(format!("Request timed out: {err}"))
        } else if err.is_connect() {
            Failure::Transport(format!("Connection failed: {err}"))
        } else {
            Failure::Transport(format!("Network error: {err}"))
        }
    }

    fn http_status(status: u16, body: &str) -> Self {
        let message = match extract_error_message(body) {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        };
        Failure::Rejected {
            status: Some(status),
            message,
        }
    }

    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            Failure::Transport(_) => None,
            Failure::Rejected { status, .. } => *status,
        }
    }
}

/// Sends a request and decodes a 2xx JSON body into `T`.
///
/// Send errors become `Failure::Transport`. Once a status line is received,
/// non-2xx statuses, truncated bodies and undecodable bodies all become
/// `Failure::Rejected`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, Failure> {
    let response = request
        .send()
        .await
        .map_err(|err| Failure::transport(&err))?;

    // Past this point a response exists; body failures are rejections.
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| Failure::Rejected {
            status: Some(status.as_u16()),
            message: format!("Failed to read response body: {err}"),
        })?;

    if !status.is_success() {
        return Err(Failure::http_status(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|err| Failure::Rejected {
        status: Some(status.as_u16()),
        message: format!("Malformed response body: {err}"),
    })
}

/// Pulls a human-readable message out of a JSON error body.
///
/// Recognizes `{"message": "..."}` and `{"error": {"message": "..."}}`.
fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            json.get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
        })?
        .trim();
    (!message.is_empty()).then(|| message.to_string())
}
