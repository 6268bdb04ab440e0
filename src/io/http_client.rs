use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{AuditError, Result};
use crate::io::gemini::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::report::model::EMPTY_RESPONSE;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; SeoGuard/0.1)";

/// Browsers own the user agent and request deadlines, so both only apply
/// to native builds.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.user_agent(USER_AGENT).timeout(timeout);
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;
    builder.build().map_err(AuditError::from)
}

/// POST `{base}/v1beta/models/{model}:generateContent`.
///
/// Non-2xx answers are classified into rate-limit, permission or generic
/// upstream errors before the body is ever parsed as a success payload.
pub async fn generate_content(
    client: &Client,
    base_url: &str,
    model: &str,
    api_key: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    );

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(%status, body = %body, "Gemini API returned an error");
        return Err(classify_failure(status, &body));
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Err(AuditError::response_format(EMPTY_RESPONSE));
    }
    serde_json::from_str(&text).map_err(|e| {
        AuditError::upstream(format!("Unreadable response from the analysis service ({e})."))
    })
}

/// Map an unsuccessful HTTP answer onto the error taxonomy.
pub fn classify_failure(status: StatusCode, body: &str) -> AuditError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let upstream_status = envelope
        .as_ref()
        .and_then(|e| e.status.as_deref())
        .unwrap_or_default();
    // Proxies sometimes rewrite the HTTP status; the envelope code is the
    // one Gemini assigned.
    let codes = [Some(status.as_u16()), envelope.as_ref().and_then(|e| e.code)];
    let any_code = |wanted: &[u16]| codes.iter().flatten().any(|c| wanted.contains(c));

    if any_code(&[429]) || upstream_status == "RESOURCE_EXHAUSTED" {
        return AuditError::RateLimited;
    }
    if any_code(&[401, 403]) || matches!(upstream_status, "PERMISSION_DENIED" | "UNAUTHENTICATED") {
        return AuditError::Unauthorized;
    }

    let message = envelope
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    if message.is_empty() {
        AuditError::upstream(format!("Gemini API error {status}"))
    } else {
        AuditError::upstream(format!("Gemini API error {status}: {message}"))
    }
}
