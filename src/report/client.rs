//! Report client: one grounded `generateContent` call per audit.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{AuditError, Result};
use crate::io::gemini::{GenerateContentRequest, GroundingMetadata};
use crate::io::http_client;
use crate::report::model::{AuditReport, SourceReference};
use crate::report::schema::audit_report_schema;

/// Title used when a grounding citation has none.
pub const DEFAULT_SOURCE_TITLE: &str = "Search Reference";

/// Anything that can turn a site URL into a report. The controller and the
/// views only see this trait.
///
/// Browser HTTP futures are not `Send`, so the bound is relaxed on wasm.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AuditService: Send + Sync {
    async fn request_audit(&self, site_url: &str) -> Result<AuditReport>;
}

pub struct ReportClient {
    http: Client,
    config: Config,
}

impl ReportClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = http_client::build_client(config.timeout)?;
        Ok(Self { http, config })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AuditService for ReportClient {
    async fn request_audit(&self, site_url: &str) -> Result<AuditReport> {
        let api_key = self.config.api_key().ok_or(AuditError::Configuration)?;
        let profile = &self.config.profile;

        tracing::info!(site = %site_url, model = %profile.model, profile = profile.name, "requesting audit");

        let request =
            GenerateContentRequest::grounded_json(profile.build_prompt(site_url), audit_report_schema());
        let response = http_client::generate_content(
            &self.http,
            &self.config.base_url,
            &profile.model,
            &api_key,
            &request,
        )
        .await?;

        if response.candidates.is_empty() {
            if let Some(reason) = response.block_reason() {
                return Err(AuditError::response_format(format!(
                    "The request was blocked by the model ({reason})."
                )));
            }
        }

        let mut report = AuditReport::from_model_text(&response.text())?;
        report.source_urls = response.grounding().map(extract_sources);

        tracing::debug!(
            site = %site_url,
            metrics = report.metrics.len(),
            recommendations = report.recommendations.len(),
            sources = report.sources().len(),
            "audit parsed"
        );
        Ok(report)
    }
}

/// Keep citations with a web origin, filling in missing titles and URIs.
pub fn extract_sources(metadata: &GroundingMetadata) -> Vec<SourceReference> {
    metadata
        .grounding_chunks
        .iter()
        .flatten()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| SourceReference {
            title: web
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_TITLE.to_string()),
            uri: web.uri.clone().unwrap_or_default(),
        })
        .collect()
}
