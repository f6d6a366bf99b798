use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use research_common::context::{empty_object, RepoContext};

const USER_AGENT: &str = concat!("industry-research/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub API. Every call shares a fixed 20s timeout.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(20))
        .user_agent(USER_AGENT)
        .build()
}

/// Gather repository metadata for the prompt.
///
/// Each sub-fetch is attempted exactly once; a failed call leaves its
/// field as an empty object rather than aborting the run. Without a
/// token or repository identifier only the minimal context (repo and
/// timestamp) is returned.
pub async fn gather_context(
    client: &reqwest::Client,
    api_base: &str,
    repo: &str,
    token: Option<&str>,
) -> RepoContext {
    let time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut ctx = RepoContext::minimal(repo, time);

    let token = match token {
        Some(t) if !repo.is_empty() => t,
        _ => {
            tracing::warn!("no github token or repository configured, skipping context fetch");
            return ctx;
        }
    };

    ctx.repo_info = fetch_endpoint(client, api_base, repo, "", token).await;
    ctx.languages = fetch_endpoint(client, api_base, repo, "languages", token).await;
    ctx.recent_commits = fetch_endpoint(client, api_base, repo, "commits?per_page=5", token).await;
    ctx.open_prs = fetch_endpoint(client, api_base, repo, "pulls?state=open&per_page=5", token).await;
    ctx.open_issues =
        fetch_endpoint(client, api_base, repo, "issues?state=open&per_page=5", token).await;
    ctx
}

/// GET one repository endpoint, returning `{}` on any failure.
async fn fetch_endpoint(
    client: &reqwest::Client,
    api_base: &str,
    repo: &str,
    endpoint: &str,
    token: &str,
) -> Value {
    let url = endpoint_url(api_base, repo, endpoint);
    let resp = match client
        .get(&url)
        .bearer_auth(token)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error=%e, endpoint, "github api error");
            return empty_object();
        }
    };

    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(%status, endpoint, "github api error");
        return empty_object();
    }

    match resp.json::<Value>().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error=%e, endpoint, "github api decode error");
            empty_object()
        }
    }
}

fn endpoint_url(api_base: &str, repo: &str, endpoint: &str) -> String {
    let base = api_base.trim_end_matches('/');
    if endpoint.is_empty() {
        format!("{base}/repos/{repo}")
    } else {
        format!("{base}/repos/{repo}/{endpoint}")
    }
}
