//! Wire types for the `generateContent` endpoint.
//!
//! Only the fields the audit needs are modelled; everything else in the
//! response is ignored by serde.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    pub safety_settings: Vec<SafetySetting>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Grounded, JSON-constrained request for a single user prompt.
    pub fn grounded_json(prompt: String, schema: Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            tools: vec![Tool::google_search()],
            safety_settings: SafetySetting::permissive(),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: Value,
}

impl Tool {
    pub fn google_search() -> Self {
        Self { google_search: Value::Object(Default::default()) }
    }
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

impl SafetySetting {
    /// Security findings read like "dangerous content" to the default filters.
    pub fn permissive() -> Vec<Self> {
        [
            "HARM_CATEGORY_HATE_SPEECH",
            "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            "HARM_CATEGORY_HARASSMENT",
            "HARM_CATEGORY_DANGEROUS_CONTENT",
        ]
        .into_iter()
        .map(|category| SafetySetting { category, threshold: "BLOCK_NONE" })
        .collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

// ====== Response ======

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// All text parts of the first candidate, concatenated in order.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    pub fn grounding(&self) -> Option<&GroundingMetadata> {
        self.candidates.first().and_then(|c| c.grounding_metadata.as_ref())
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// `{"error": {"code": 429, "message": "...", "status": "RESOURCE_EXHAUSTED"}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_grounding_and_json_mode() {
        let req = GenerateContentRequest::grounded_json("hi".into(), json!({"type": "OBJECT"}));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["tools"][0]["google_search"], json!({}));
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert_eq!(value["safetySettings"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(resp.text(), "{\"a\":1}");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        let resp: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(resp.text(), "");
        assert_eq!(resp.block_reason(), Some("SAFETY"));
        assert!(resp.grounding().is_none());
    }
}
