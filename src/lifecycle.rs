//! Application startup: logging and the audit backend handed to the UI.

use std::sync::Arc;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{AuditError, Result};
use crate::report::{AuditReport, AuditService, ReportClient};

const DEFAULT_LOG_FILTER: &str = "seoguard=debug,info";

/// Shared handle to whatever answers audit requests. Provided to the view
/// tree as context.
#[derive(Clone)]
pub struct AuditBackend(pub Arc<dyn AuditService>);

impl AuditBackend {
    pub fn new(service: impl AuditService + 'static) -> Self {
        Self(Arc::new(service))
    }
}

/// Initialize logging with tracing_subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_ansi(true)
        .try_init();
    if installed.is_err() {
        tracing::debug!("a global subscriber was already installed");
    }
}

/// Reads `.env` and the process environment and builds the report client.
///
/// Startup never fails: a broken configuration yields a backend that
/// reports the problem on every scan so the user sees it in the UI.
pub fn load_backend() -> AuditBackend {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("no .env file loaded: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {:#}", e);
            return AuditBackend::new(Misconfigured(format!("{e:#}")));
        }
    };

    tracing::info!(
        profile = config.profile.name,
        model = %config.profile.model,
        base_url = %config.base_url,
        "audit backend configured"
    );
    if config.api_key().is_none() {
        tracing::warn!("no API key in the environment yet; scans will fail until one is set");
    }

    match ReportClient::new(config) {
        Ok(client) => AuditBackend::new(client),
        Err(e) => {
            tracing::error!("failed to build HTTP client: {}", e);
            AuditBackend::new(Misconfigured(e.to_string()))
        }
    }
}

/// Stands in for the client when startup configuration was invalid.
struct Misconfigured(String);

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AuditService for Misconfigured {
    async fn request_audit(&self, _site_url: &str) -> Result<AuditReport> {
        Err(AuditError::upstream(format!("invalid configuration: {}", self.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn misconfigured_backend_surfaces_the_problem() {
        let backend = AuditBackend::new(Misconfigured("invalid SEOGUARD_PROFILE".into()));
        let err = backend.0.request_audit("https://example.com").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Audit failed: invalid configuration: invalid SEOGUARD_PROFILE"
        );
    }
}
