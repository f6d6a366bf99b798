use serde_json::Value;

/// Snapshot of repository metadata gathered at the start of a run.
///
/// The five metadata fields hold the raw decoded JSON body of one
/// GitHub API call each. A failed call leaves its field as an empty
/// object, so consumers must tolerate any shape including `{}`.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// "owner/name" repository identifier.
    pub repo: String,
    /// ISO-8601 UTC timestamp captured when the run started.
    pub time: String,
    pub repo_info: Value,
    pub languages: Value,
    pub recent_commits: Value,
    pub open_prs: Value,
    pub open_issues: Value,
}

impl RepoContext {
    /// Context with no metadata, used when no token or repo is configured.
    pub fn minimal(repo: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            time: time.into(),
            repo_info: empty_object(),
            languages: empty_object(),
            recent_commits: empty_object(),
            open_prs: empty_object(),
            open_issues: empty_object(),
        }
    }
}

pub fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
