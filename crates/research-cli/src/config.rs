use std::env;

use research_common::{ReportError, Result};

/// GitHub token for the metadata calls; optional, first non-empty wins.
pub fn github_token() -> Option<String> {
    first_nonempty(&["GH_TOKEN", "GITHUB_TOKEN"])
}

/// Gemini API key. Required; checked before any network call is made.
pub fn gemini_api_key() -> Result<String> {
    first_nonempty(&["GOOGLE_AI_API_KEY", "GEMINI_API_KEY"]).ok_or_else(|| {
        ReportError::Config("GOOGLE_AI_API_KEY or GEMINI_API_KEY is required".to_string())
    })
}

fn first_nonempty(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
}
