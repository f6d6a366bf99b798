use serde_json::{json, Value};

use research_common::{ReportError, Result};

/// Send the prompt to the Gemini generateContent endpoint and return the
/// trimmed response text.
///
/// Every failure mode (transport error, non-2xx status, undecodable body,
/// empty or whitespace-only text) maps to `ReportError::Generation`. The
/// call is attempted exactly once; there is no fallback model chain.
pub async fn generate_report(
    client: &reqwest::Client,
    api_base: &str,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_base.trim_end_matches('/'),
        model
    );
    let body = json!({"contents": [{"parts": [{"text": prompt}]}]});

    let resp = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| ReportError::Generation(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(ReportError::Generation(format!(
            "gemini request failed ({status}): {text}"
        )));
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| ReportError::Generation(e.to_string()))?;

    extract_text(&body)
        .ok_or_else(|| ReportError::Generation("empty response from model".to_string()))
}

/// Concatenated text of the first candidate's parts, trimmed.
/// `None` when the response carries no usable text.
fn extract_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let mut out = String::new();
    for part in parts {
        if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
            out.push_str(text);
        }
    }

    let out = out.trim();
    if out.is_empty() {
        None
    } else {
        Some(out.to_string())
    }
}
