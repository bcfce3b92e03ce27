//! Login against `POST {base}/auth/login`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ApiClient, Failure, send_json};
use crate::session::{SessionStore, mask_token};

const LOGIN_PATH: &str = "/auth/login";

/// Login form payload. Held only in memory, never persisted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username_or_email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username_or_email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username_or_email: username_or_email.into(),
            password: password.into(),
        }
    }

    /// Presence check: returns the name of the first blank field.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.username_or_email.trim().is_empty() {
            Some("username or email")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username_or_email", &self.username_or_email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Rejected locally before any request was sent.
    #[error("{0} is required")]
    Invalid(&'static str),

    /// The backend answered but did not accept the credentials.
    #[error("login rejected: {message}")]
    Rejected {
        status: Option<u16>,
        message: String,
    },

    /// No response was received.
    #[error("{0}")]
    Transport(String),

    /// The token was issued but could not be stored.
    #[error("failed to store session token: {0}")]
    Storage(String),
}

impl From<Failure> for AuthError {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Transport(message) => AuthError::Transport(message),
            Failure::Rejected { status, message } => AuthError::Rejected { status, message },
        }
    }
}

/// Exchanges credentials for a session token and keeps it in the session store.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
    session: SessionStore,
}

impl AuthClient {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Sends `credentials` once and stores the returned token on success.
    ///
    /// On any failure the stored token is left untouched.
    ///
    /// # Errors
    /// - `AuthError::Invalid` if a field is blank (no request is sent)
    /// - `AuthError::Rejected` on non-2xx, malformed body, or missing token
    /// - `AuthError::Transport` when the backend could not be reached
    /// - `AuthError::Storage` if the token could not be persisted
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        if let Some(field) = credentials.missing_field() {
            return Err(AuthError::Invalid(field));
        }

        let request = self
            .api
            .http()
            .post(self.api.endpoint(LOGIN_PATH))
            .json(credentials);

        let response: LoginResponse = send_json(request).await.map_err(|failure| {
            tracing::warn!(
                user = %credentials.username_or_email,
                status = ?failure.status(),
                "login failed"
            );
            AuthError::from(failure)
        })?;

        if response.token.is_empty() {
            tracing::warn!(user = %credentials.username_or_email, "login response carried an empty token");
            return Err(AuthError::Rejected {
                status: None,
                message: "Response did not contain a token".to_string(),
            });
        }

        self.session
            .set_token(&response.token)
            .map_err(|err| AuthError::Storage(format!("{err:#}")))?;

        tracing::info!(
            user = %credentials.username_or_email,
            token = %mask_token(&response.token),
            "logged in"
        );
        Ok(response.token)
    }

    /// Local logout: clears the stored token. No request is sent.
    ///
    /// # Errors
    /// Returns an error if the stored token cannot be removed.
    pub fn logout(&self) -> anyhow::Result<()> {
        self.session.clear_token()?;
        tracing::info!("logged out");
        Ok(())
    }
}
