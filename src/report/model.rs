//! Report entities as the model returns them.
//!
//! Field names follow the camelCase JSON the service is asked to produce.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AuditError, Result};

/// Reported when the service answers with nothing to parse.
pub const EMPTY_RESPONSE: &str = "The model returned an empty response.";

// ====== Enums ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Excellent,
    Good,
    Average,
    Poor,
    /// Any label outside the four known ones
    Unknown,
}

impl MetricStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricStatus::Excellent => "excellent",
            MetricStatus::Good => "good",
            MetricStatus::Average => "average",
            MetricStatus::Poor => "poor",
            MetricStatus::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "excellent" => MetricStatus::Excellent,
            "good" => MetricStatus::Good,
            "average" => MetricStatus::Average,
            "poor" => MetricStatus::Poor,
            _ => MetricStatus::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for MetricStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
    Unknown,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
            Impact::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Impact::High,
            "medium" => Impact::Medium,
            "low" => Impact::Low,
            _ => Impact::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Impact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ====== Entities ======

/// One scored cognitive pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoMetric {
    pub category: String,
    pub score: f64,
    pub status: MetricStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub impact: Impact,
    /// Free-form lexicon entry such as `entity-seo` or `rendering`
    pub category: String,
    pub description: String,
    pub actionable_step: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReference {
    pub title: String,
    pub uri: String,
}

/// Aggregate root of a finished audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub project_name: String,
    pub overall_score: f64,
    pub summary: String,
    pub metrics: Vec<SeoMetric>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_urls: Option<Vec<SourceReference>>,
}

impl AuditReport {
    /// Parse the model's text output. No partial recovery: any problem
    /// rejects the whole payload.
    pub fn from_model_text(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(AuditError::response_format(EMPTY_RESPONSE));
        }
        let report: AuditReport = serde_json::from_str(text)?;
        report.validate()?;
        Ok(report)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_score("overallScore", self.overall_score)?;
        for metric in &self.metrics {
            if metric.category.trim().is_empty() {
                return Err(AuditError::response_format("A metric is missing its category label."));
            }
            check_score(&metric.category, metric.score)?;
        }

        let mut seen = HashSet::with_capacity(self.recommendations.len());
        for rec in &self.recommendations {
            if !seen.insert(rec.id.as_str()) {
                return Err(AuditError::response_format(format!(
                    "Recommendation id '{}' appears more than once.",
                    rec.id
                )));
            }
        }
        Ok(())
    }

    pub fn sources(&self) -> &[SourceReference] {
        self.source_urls.as_deref().unwrap_or_default()
    }
}

fn check_score(field: &str, score: f64) -> Result<()> {
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        Err(AuditError::response_format(format!(
            "Score for '{field}' is outside 0-100 ({score})."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "projectName": "example.com",
        "overallScore": 72,
        "summary": "Solid baseline.",
        "metrics": [
            {"category": "Entity SEO", "score": 60, "status": "average"},
            {"category": "Security", "score": 91, "status": "Excellent"}
        ],
        "recommendations": [
            {"id": "r1", "title": "Add JSON-LD", "impact": "high", "category": "entity-seo",
             "description": "Missing structured data.", "actionableStep": "Add Organization schema."},
            {"id": "r2", "title": "Set HSTS", "impact": "LOW", "category": "security",
             "description": "No HSTS header.", "actionableStep": "Send Strict-Transport-Security."}
        ]
    }"#;

    #[test]
    fn parses_payload_in_order() {
        let report = AuditReport::from_model_text(PAYLOAD).unwrap();
        assert_eq!(report.project_name, "example.com");
        assert_eq!(report.overall_score, 72.0);
        assert_eq!(report.metrics[0].category, "Entity SEO");
        assert_eq!(report.metrics[1].status, MetricStatus::Excellent);
        assert_eq!(report.recommendations[0].id, "r1");
        assert_eq!(report.recommendations[1].impact, Impact::Low);
        assert_eq!(report.recommendations[0].actionable_step, "Add Organization schema.");
        assert!(report.source_urls.is_none());
        assert!(report.sources().is_empty());
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = AuditReport::from_model_text("   ").unwrap_err();
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = AuditReport::from_model_text("{\"projectName\": \"x\",").unwrap_err();
        assert!(matches!(err, AuditError::ResponseFormat(_)));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let text = r#"{"projectName":"x","overallScore":10,"metrics":[],"recommendations":[]}"#;
        let err = AuditReport::from_model_text(text).unwrap_err();
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let text = r#"{"projectName":"x","overallScore":140,"summary":"s","metrics":[],"recommendations":[]}"#;
        assert!(AuditReport::from_model_text(text).is_err());
    }

    #[test]
    fn duplicate_recommendation_ids_are_rejected() {
        let rec = r#"{"id":"a","title":"t","impact":"low","category":"content","description":"d","actionableStep":"s"}"#;
        let text = format!(
            r#"{{"projectName":"x","overallScore":10,"summary":"s","metrics":[],"recommendations":[{rec},{rec}]}}"#
        );
        let err = AuditReport::from_model_text(&text).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn unknown_labels_do_not_fail() {
        assert_eq!(MetricStatus::from_label("stellar"), MetricStatus::Unknown);
        assert_eq!(Impact::from_label(" Medium "), Impact::Medium);
    }
}
