//! Process configuration.
//!
//! Everything comes from environment variables (optionally seeded from a
//! `.env` file by the binary). The credential is looked up at call time
//! unless one was pinned explicitly.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::report::prompt::ModelProfile;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Variables checked for the credential, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone)]
pub struct Config {
    pub profile: ModelProfile,
    pub base_url: String,
    pub timeout: Duration,
    api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ModelProfile::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

impl Config {
    /// Read `SEOGUARD_PROFILE`, `SEOGUARD_MODEL`, `GEMINI_BASE_URL` and
    /// `SEOGUARD_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Some(name) = non_empty_var("SEOGUARD_PROFILE") {
            config.profile = name
                .parse()
                .map_err(anyhow::Error::msg)
                .context("invalid SEOGUARD_PROFILE")?;
        }
        if let Some(model) = non_empty_var("SEOGUARD_MODEL") {
            config.profile = config.profile.with_model(model);
        }
        if let Some(url) = non_empty_var("GEMINI_BASE_URL") {
            config.base_url = url;
        }
        if let Some(secs) = non_empty_var("SEOGUARD_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("invalid SEOGUARD_TIMEOUT_SECS '{secs}'"))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Pin a credential instead of reading the environment on each call.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_profile(mut self, profile: ModelProfile) -> Self {
        self.profile = profile;
        self
    }

    /// A pinned key is authoritative, even when blank.
    pub fn api_key(&self) -> Option<String> {
        match &self.api_key {
            Some(key) => Some(key.trim().to_string()).filter(|k| !k.is_empty()),
            None => API_KEY_VARS.iter().find_map(|var| non_empty_var(var)),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoint() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.profile.name, "cognitive");
    }

    #[test]
    fn pinned_key_wins() {
        let config = Config::default().with_api_key("pinned");
        assert_eq!(config.api_key().as_deref(), Some("pinned"));
    }

    #[test]
    fn blank_pinned_key_means_no_key() {
        let config = Config::default().with_api_key("   ");
        assert_eq!(config.api_key(), None);
    }
}
