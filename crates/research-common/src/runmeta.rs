use std::env;

use serde_json::Value;

/// GitHub Actions run metadata, read from the environment at startup.
/// Every field is optional; a run outside Actions yields mostly `None`.
#[derive(Debug, Clone, Default)]
pub struct RunMeta {
    pub server_url: String,
    pub repo: Option<String>,
    pub run_id: Option<String>,
    pub ref_name: Option<String>,
    pub sha: Option<String>,
    pub pr_number: Option<u64>,
    pub pr_title: Option<String>,
}

impl RunMeta {
    pub fn from_env() -> Self {
        let server_url =
            env::var("GITHUB_SERVER_URL").unwrap_or_else(|_| "https://github.com".to_string());
        let ref_name = env::var("GITHUB_REF_NAME").ok().or_else(|| {
            env::var("GITHUB_REF").ok().map(|r| {
                r.trim_start_matches("refs/heads/")
                    .trim_start_matches("refs/tags/")
                    .to_string()
            })
        });

        let (pr_number, pr_title) = match env::var("GITHUB_EVENT_PATH") {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(raw) => pr_from_event(&raw),
                Err(e) => {
                    tracing::debug!(error=%e, path, "failed to read event payload");
                    (None, None)
                }
            },
            Err(_) => (None, None),
        };

        Self {
            server_url,
            repo: env::var("GITHUB_REPOSITORY").ok().filter(|v| !v.is_empty()),
            run_id: env::var("GITHUB_RUN_ID").ok(),
            ref_name,
            sha: env::var("GITHUB_SHA").ok(),
            pr_number,
            pr_title,
        }
    }

    pub fn run_url(&self) -> Option<String> {
        match (&self.repo, &self.run_id) {
            (Some(repo), Some(id)) => {
                Some(format!("{}/{}/actions/runs/{}", self.server_url, repo, id))
            }
            _ => None,
        }
    }

    pub fn commit_url(&self) -> Option<String> {
        match (&self.repo, &self.sha) {
            (Some(repo), Some(sha)) => Some(format!("{}/{}/commit/{}", self.server_url, repo, sha)),
            _ => None,
        }
    }

    pub fn pr_url(&self) -> Option<String> {
        match (&self.repo, self.pr_number) {
            (Some(repo), Some(n)) => Some(format!("{}/{}/pull/{}", self.server_url, repo, n)),
            _ => None,
        }
    }

    pub fn short_sha(&self) -> Option<&str> {
        // get() rather than slicing: the value comes from the
        // environment and need not be ASCII or 7 bytes long.
        self.sha.as_deref().map(|s| s.get(..7).unwrap_or(s))
    }
}

/// Pull request number and title from a webhook event payload, if present.
fn pr_from_event(raw: &str) -> (Option<u64>, Option<String>) {
    let evt: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return (None, None),
    };
    let pr = evt.get("pull_request");
    let number = pr.and_then(|p| p.get("number")).and_then(|n| n.as_u64());
    let title = pr
        .and_then(|p| p.get("title"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string());
    (number, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pr_event_parsed() {
        let raw = r#"{"pull_request": {"number": 42, "title": "Fix the thing"}}"#;
        assert_eq!(pr_from_event(raw), (Some(42), Some("Fix the thing".to_string())));
    }

    #[test]
    fn non_pr_event_yields_none() {
        assert_eq!(pr_from_event(r#"{"push": {}}"#), (None, None));
        assert_eq!(pr_from_event("not json"), (None, None));
    }

    #[test]
    fn urls_need_repo() {
        let meta = RunMeta {
            server_url: "https://github.com".to_string(),
            run_id: Some("123".to_string()),
            sha: Some("abcdef0123456789".to_string()),
            ..Default::default()
        };
        assert_eq!(meta.run_url(), None);
        assert_eq!(meta.short_sha(), Some("abcdef0"));

        let odd = RunMeta {
            sha: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(odd.short_sha(), Some("abc"));
        let multibyte = RunMeta {
            sha: Some("ééééééé".to_string()),
            ..Default::default()
        };
        // 7 bytes lands mid-character; fall back to the whole value.
        assert_eq!(multibyte.short_sha(), Some("ééééééé"));

        let meta = RunMeta {
            repo: Some("owner/name".to_string()),
            ..meta
        };
        assert_eq!(
            meta.run_url().as_deref(),
            Some("https://github.com/owner/name/actions/runs/123")
        );
        assert_eq!(
            meta.commit_url().as_deref(),
            Some("https://github.com/owner/name/commit/abcdef0123456789")
        );
    }
}
