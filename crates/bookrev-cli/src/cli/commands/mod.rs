//! CLI command handlers.

pub mod auth;
pub mod books;
pub mod config;
pub mod tui;

use anyhow::Result;
use bookrev_core::api::{ApiClient, AuthClient, CatalogClient};
use bookrev_core::config::{Config, resolve_base_url};
use bookrev_core::session::SessionStore;

/// Everything a command needs to reach the backend and the session.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub base_url: String,
    pub session: SessionStore,
}

impl Context {
    /// Resolves the base URL (`--base-url`/env over config) and opens the
    /// default session store.
    pub fn new(config: Config, base_url_override: Option<&str>) -> Result<Self> {
        let base_url = resolve_base_url(base_url_override, &config.api.base_url)?;
        tracing::debug!(
            base_url = %base_url,
            overridden = base_url_override.is_some(),
            "using backend"
        );
        Ok(Self {
            config,
            base_url,
            session: SessionStore::open_default(),
        })
    }

    fn api(&self) -> Result<ApiClient> {
        ApiClient::new(&self.base_url, self.config.timeout())
    }

    pub fn auth(&self) -> Result<AuthClient> {
        Ok(AuthClient::new(self.api()?, self.session.clone()))
    }

    pub fn catalog(&self) -> Result<CatalogClient> {
        Ok(CatalogClient::new(self.api()?, self.session.clone())
            .with_attach_token(self.config.api.attach_token))
    }
}
