//! Output schema handed to the model (Gemini's OpenAPI subset).
//! `sourceUrls` is intentionally absent: it comes from grounding metadata.

use serde_json::{json, Value};

pub const REQUIRED_REPORT_FIELDS: [&str; 5] =
    ["projectName", "overallScore", "summary", "metrics", "recommendations"];

pub fn audit_report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "projectName": { "type": "STRING" },
            "overallScore": { "type": "NUMBER", "description": "0 to 100" },
            "summary": { "type": "STRING" },
            "metrics": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "score": { "type": "NUMBER", "description": "0 to 100" },
                        "status": {
                            "type": "STRING",
                            "enum": ["excellent", "good", "average", "poor"]
                        }
                    },
                    "required": ["category", "score", "status"]
                }
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "impact": { "type": "STRING", "enum": ["high", "medium", "low"] },
                        "category": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "actionableStep": { "type": "STRING" }
                    },
                    "required": ["id", "title", "impact", "category", "description", "actionableStep"]
                }
            }
        },
        "required": REQUIRED_REPORT_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_report_fields_but_not_sources() {
        let schema = audit_report_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, REQUIRED_REPORT_FIELDS);
        assert!(schema["properties"].get("sourceUrls").is_none());
    }
}
